use thiserror::Error;

/// Why a roadmap configuration could not be loaded or used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `ROADMAP_*` variable could not be read into the config.
    #[error("could not read roadmap configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A setting the run needs has no value in any source.
    #[error("`{section}` is not set; {}", source_hint(.section))]
    NotConfigured { section: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Where a missing `section` can be supplied.
fn source_hint(section: &str) -> String {
    match section {
        "tracker.token" => {
            String::from("add it to roadmap.toml, set ROADMAP_TRACKER__TOKEN or pass --token")
        }
        "projects" => String::from("add [[projects]] to roadmap.toml or pass --projects"),
        other => format!(
            "add it to roadmap.toml or set ROADMAP_{}",
            other.to_uppercase().replace('.', "__")
        ),
    }
}
