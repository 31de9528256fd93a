use resumate_types::{AnalysisResult, Role};

/// What the terminal form currently shows
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// File name and size once the backend has read the file
    pub file: Option<(String, usize)>,
    pub requirements: String,
    pub role: Role,
    pub submitting: bool,
    pub result: Option<AnalysisResult>,
}
