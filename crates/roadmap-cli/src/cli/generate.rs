use std::path::PathBuf;

use clap::{Args, ValueEnum};
use roadmap_config::ReportFormat;

/// Document format for `--format`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Arguments for `roadmap generate`.
#[derive(Clone, Debug, Default, Args)]
pub struct GenerateArgs {
    /// Tracker API token
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Comma-separated project IDs (replaces configured projects)
    #[arg(long, env = "PROJECTS", value_parser = parse_project_ids)]
    pub projects: Option<ProjectIds>,

    /// Start at this iteration offset (ignore older sprints)
    #[arg(long)]
    pub offset: Option<u32>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<FormatArg>,
}

impl GenerateArgs {
    /// Project IDs given on the command line, empty when none were.
    #[must_use]
    pub fn project_ids(&self) -> &[u64] {
        self.projects
            .as_ref()
            .map(|ids| ids.0.as_slice())
            .unwrap_or_default()
    }
}

/// Project IDs from a comma-separated list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectIds(pub Vec<u64>);

/// Parse `"101, 202,,303,"`; blank entries are skipped.
fn parse_project_ids(raw: &str) -> Result<ProjectIds, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u64>()
                .map_err(|_| format!("'{entry}' is not a numeric project id"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ProjectIds)
}
