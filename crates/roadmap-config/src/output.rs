//! Report output settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("roadmap.html")
}

fn default_stylesheets() -> Vec<String> {
    vec![
        String::from("themes/bootstrap.css"),
        String::from("themes/bootstrap-theme.css"),
    ]
}

/// Document format written to [`OutputConfig::path`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// File the report is written to. Overwritten on every run.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub format: ReportFormat,

    /// Stylesheet links placed in the HTML head.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: ReportFormat::default(),
            stylesheets: default_stylesheets(),
        }
    }
}
