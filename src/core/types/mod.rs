mod audit;
mod badge;
pub mod config;
mod error;
mod hash;
mod report;
mod summary;

pub use audit::*;
pub use badge::*;
pub use error::*;
pub use hash::*;
pub use report::*;
pub use summary::*;
