pub mod file;
pub mod result;
pub mod role;
pub mod types;

pub use file::SelectedFile;
pub use result::{AnalysisResult, Scores};
pub use role::{Role, UnknownRole};
pub use types::{AppEvent, Notification, NotificationKind, UiEvent};
