use roadmap_config::RoadmapConfig;
use roadmap_core::ProjectTarget;

use crate::cli::{GenerateArgs, GlobalFlags};

/// Load layered config (`.env`, TOML, `ROADMAP_*` env) and apply flags on top.
pub fn load_config(flags: &GlobalFlags, args: &GenerateArgs) -> anyhow::Result<RoadmapConfig> {
    let mut config = RoadmapConfig::load_with_dotenv(flags.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply command-line values over the loaded config.
///
/// `--projects` replaces the configured project list. `--offset` applies to
/// every project in the resulting list.
pub fn apply_overrides(config: &mut RoadmapConfig, args: &GenerateArgs) {
    if let Some(token) = args.token.as_deref().filter(|token| !token.trim().is_empty()) {
        config.tracker.token = token.trim().to_string();
    }

    let project_ids = args.project_ids();
    if !project_ids.is_empty() {
        config.projects = project_ids
            .iter()
            .map(|&id| ProjectTarget::new(id, 0))
            .collect();
    }

    if let Some(offset) = args.offset {
        for target in &mut config.projects {
            target.offset = offset;
        }
    }

    if let Some(path) = &args.output {
        config.output.path.clone_from(path);
    }

    if let Some(format) = args.format {
        config.output.format = format.into();
    }
}
