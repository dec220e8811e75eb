pub mod cli;
pub mod engine;
pub mod logging;
pub mod main_shared;
pub mod pipeline;
pub mod types;
pub mod writer;
