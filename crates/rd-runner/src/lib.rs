mod command;
mod driver;
pub mod error;

pub use command::Command;
pub use driver::{Driver, DriverBuilder, RunSummary};
pub use error::RunnerError;
