use std::fmt::Write;

use resumate_types::{AnalysisResult, Notification};

use crate::state::UiState;

pub const IDLE_CAPTION: &str = "Analyze";
pub const BUSY_CAPTION: &str = "Analyzing...";
pub const LOADING_LINE: &str = "Loading... Please wait.";

pub fn submit_caption(submitting: bool) -> &'static str {
    if submitting { BUSY_CAPTION } else { IDLE_CAPTION }
}

pub fn render_form(state: &UiState) -> String {
    let file = match &state.file {
        Some((name, bytes)) => format!("{name} ({bytes} bytes)"),
        None => "no file selected".to_string(),
    };
    let requirements = if state.requirements.is_empty() {
        "(empty)"
    } else {
        state.requirements.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(out, "Resume Analyzer");
    let _ = writeln!(out, "  Upload Resume (PDF): {file}");
    let _ = writeln!(out, "  Job Requirements (comma-separated): {requirements}");
    let _ = writeln!(out, "  Select Job Role: {}", state.role.label());
    if let Some(result) = &state.result {
        let _ = writeln!(out, "  Last Best Match: {}", result.best_match);
    }
    let _ = write!(out, "  [{}]", submit_caption(state.submitting));
    if state.submitting {
        let _ = write!(out, "\n{LOADING_LINE}");
    }
    out
}

/// Text block for a finished analysis. `preview_chars` of 0 disables clipping.
pub fn render_result(result: &AnalysisResult, preview_chars: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analysis Result");
    let _ = writeln!(out, "Best Match: {}", result.best_match);
    let _ = writeln!(out, "Scores:");
    for (label, score) in result.scores.iter() {
        let _ = writeln!(out, "  - {label}: {score}%");
    }
    let _ = writeln!(out, "Extracted Text (Preview):");
    let _ = writeln!(out, "{}", preview(&result.extracted_text, preview_chars));
    let _ = writeln!(out, "Filtered Relevant Text (Preview):");
    let _ = write!(out, "{}", preview(&result.filtered_text, preview_chars));
    out
}

pub fn render_notification(notification: &Notification) -> String {
    format!("! {}", notification.message)
}

fn preview(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumate_types::{Role, Scores};

    fn scenario_result() -> AnalysisResult {
        AnalysisResult {
            best_match: "it_support".to_string(),
            scores: Scores::from_iter([("it_support", 87.0), ("general", 42.0)]),
            extracted_text: "...".to_string(),
            filtered_text: "...".to_string(),
            filename: None,
            role: None,
        }
    }

    #[test]
    fn result_lists_one_line_per_score() {
        let text = render_result(&scenario_result(), 500);
        assert!(text.contains("Best Match: it_support"));
        assert!(text.contains("it_support: 87%"));
        assert!(text.contains("general: 42%"));
        assert_eq!(text.matches('%').count(), 2);

        let first = text.find("it_support: 87%").unwrap();
        let second = text.find("general: 42%").unwrap();
        assert!(first < second);
    }

    #[test]
    fn fractional_scores_keep_decimals() {
        let mut result = scenario_result();
        result.scores = Scores::from_iter([("sql", 63.25)]);
        assert!(render_result(&result, 0).contains("sql: 63.25%"));
    }

    #[test]
    fn long_previews_are_clipped() {
        let mut result = scenario_result();
        result.extracted_text = "abcdefghij".to_string();
        let text = render_result(&result, 4);
        assert!(text.contains("abcd...\n"));
        assert!(!text.contains("abcde"));
    }

    #[test]
    fn caption_follows_busy_flag() {
        let mut state = UiState::default();
        assert!(render_form(&state).contains("[Analyze]"));
        assert!(!render_form(&state).contains(LOADING_LINE));

        state.submitting = true;
        let text = render_form(&state);
        assert!(text.contains("[Analyzing...]"));
        assert!(text.contains(LOADING_LINE));
    }

    #[test]
    fn form_shows_fields() {
        let state = UiState {
            file: Some(("resume.pdf".to_string(), 1024)),
            requirements: "Python, SQL".to_string(),
            role: Role::ItSupport,
            ..Default::default()
        };
        let text = render_form(&state);
        assert!(text.contains("resume.pdf (1024 bytes)"));
        assert!(text.contains("Python, SQL"));
        assert!(text.contains("IT Support"));
    }

    #[test]
    fn form_keeps_last_result_summary() {
        let mut state = UiState::default();
        assert!(!render_form(&state).contains("Last Best Match"));

        state.result = Some(scenario_result());
        state.submitting = true;
        let text = render_form(&state);
        assert!(text.contains("Last Best Match: it_support"));
        assert!(text.contains("[Analyzing...]"));
    }

    #[test]
    fn notification_is_prefixed() {
        assert_eq!(
            render_notification(&Notification::failure()),
            "! An error occurred while analyzing the resume."
        );
    }
}
