use std::process::ExitCode;

use anyhow::Context;
use resumate_core::FormError;
use resumate_types::{AnalysisResult, SelectedFile};
use resumate_ui::render;

use crate::cli::AnalyzeArgs;
use crate::state::AppState;

/// Fills the form from flags and submits once
pub async fn analyze_once(
    state: &AppState,
    args: &AnalyzeArgs,
) -> anyhow::Result<Result<AnalysisResult, FormError>> {
    if let Some(path) = &args.file {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        state.client.set_file(Some(SelectedFile::from_path(path, bytes)));
    }
    state.client.set_requirements(args.requirements.clone());
    state.client.set_role(args.role);

    Ok(state.client.submit().await)
}

pub async fn run(state: &AppState, args: &AnalyzeArgs) -> anyhow::Result<ExitCode> {
    match analyze_once(state, args).await? {
        Ok(result) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{}",
                    render::render_result(&result, state.config.ui.preview_chars)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", render::render_notification(&e.notification()));
            Ok(if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
