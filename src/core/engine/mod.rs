pub mod badges;
pub mod extract;
pub mod process;
pub mod report;
pub mod traits;
pub mod utils;
