pub mod config;
pub mod error;
pub mod format;
pub mod fragment;
pub mod model;
pub mod render;
pub mod template;

pub use config::{ConfigError, FormatConfig, PageConfig, ReportConfig};
pub use error::{CompileError, ErrorClass};
pub use format::{ChronoFormatter, Elapsed, Formatter};
pub use fragment::{Element, Node};
pub use model::{LogColumns, LogEntry, LogStatus, Tag, TestNode, TestStatus};
pub use render::{RowPass, TreeCompiler};
pub use template::{BuiltinTemplates, TemplateKind, TemplateProvider};
