mod html;

use std::path::Path;

use anyhow::Context;
use roadmap_config::ReportFormat;
use roadmap_engine::Roadmap;

/// Render the roadmap in the requested format.
pub fn render(
    roadmap: &Roadmap,
    format: ReportFormat,
    stylesheets: &[String],
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Html => {
            html::render(roadmap, stylesheets).context("failed to render HTML report")
        }
        ReportFormat::Json => {
            serde_json::to_string_pretty(roadmap).context("failed to serialize JSON report")
        }
    }
}

/// Write the report, replacing any existing file.
pub fn write_report(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write report to {}", path.display()))
}
