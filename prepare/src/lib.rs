pub use category::classify_raw;
pub use error::CompileError;
pub use tables::compile;
pub use tables::RunTable;

pub mod output;
pub mod tables;
pub mod telemetry;

mod category;
mod error;
