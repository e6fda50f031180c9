//! Test execution records consumed by the compiler.

mod columns;
mod status;

pub use columns::{LogColumns, UnsupportedColumns};
pub use status::{icon_name, LogStatus, TestStatus};
pub use test::{LogEntry, Tag, TestNode};
