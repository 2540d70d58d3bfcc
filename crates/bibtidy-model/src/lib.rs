pub mod cassi;
pub mod error;
pub mod options;
pub mod record;
pub mod warning;

pub use cassi::AbbrevTable;
pub use error::{BibError, Result};
pub use options::{OutputConfig, TitleConfig};
pub use record::{Record, RecordStore};
pub use warning::{Warning, WarningKind};
