use std::time::Duration;

use anyhow::Context;
use roadmap_engine::Roadmap;
use roadmap_tracker::TrackerClient;

use crate::bootstrap;
use crate::cli::{GenerateArgs, GlobalFlags};
use crate::output;
use crate::pipeline;

/// Handle `roadmap generate`.
///
/// Skipped projects are reported but do not fail the command; only config,
/// client and file errors do.
pub async fn handle(args: &GenerateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, args)?;

    let client = TrackerClient::new(
        config.tracker.api_root(),
        &config.tracker.token,
        Duration::from_secs(config.tracker.timeout_secs),
    )
    .context("failed to build Tracker client")?;
    tracing::debug!(base_url = client.base_url(), projects = config.projects.len(), "starting run");

    let summary =
        pipeline::build_roadmap(&client, &config.projects, config.tracker.page_limit).await;

    let roadmap = Roadmap {
        generated_at: chrono::Utc::now(),
        projects: summary.tables,
    };
    let contents = output::render(&roadmap, config.output.format, &config.output.stylesheets)?;
    output::write_report(&config.output.path, &contents)?;
    tracing::info!(path = %config.output.path.display(), "report written");

    if !flags.quiet {
        println!(
            "Wrote {} ({} of {} projects)",
            config.output.path.display(),
            roadmap.projects.len(),
            config.projects.len()
        );
        for failure in &summary.failures {
            println!("  skipped project {}: {}", failure.project_id, failure.error);
        }
    }

    Ok(())
}
