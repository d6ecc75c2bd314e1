pub mod error;
pub mod tab;

// Re-export commonly used types
pub use error::ViewerError;
pub use tab::{ClosedTab, OpenOutcome, RestoreAllReport, RestoreOutcome, Tab, TabId};
