//! Per-project fetch → correlate → layout pipeline.
//!
//! Projects run one after another. A failing project is logged and skipped;
//! the remaining projects still produce tables.

use roadmap_core::{Epic, ProjectTarget};
use roadmap_engine::ProjectTable;
use roadmap_tracker::{TrackerApi, TrackerError, collect_iterations};

use crate::progress::Progress;

/// A project that could not be processed.
#[derive(Debug)]
pub struct ProjectFailure {
    pub project_id: u64,
    pub error: TrackerError,
}

/// Result of one run over all configured projects.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub tables: Vec<ProjectTable>,
    pub failures: Vec<ProjectFailure>,
}

/// Build a table for every target, isolating failures per project.
pub async fn build_roadmap<A: TrackerApi>(
    api: &A,
    targets: &[ProjectTarget],
    page_limit: u32,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for target in targets {
        let progress = Progress::spinner(&format!("project {}", target.id));
        match build_project(api, *target, page_limit, &progress).await {
            Ok(table) => {
                progress.finish_ok(&format!(
                    "{}: {} epics over {} sprints",
                    table.caption,
                    table.rows.len(),
                    table.column_count()
                ));
                summary.tables.push(table);
            }
            Err(error) => {
                progress.finish_err(&format!("project {} skipped", target.id));
                tracing::error!(project_id = target.id, %error, "skipping project");
                summary.failures.push(ProjectFailure {
                    project_id: target.id,
                    error,
                });
            }
        }
    }

    summary
}

/// Fetch, correlate and lay out one project.
///
/// A failed settings lookup only costs the caption; epic and iteration
/// failures abort the project.
pub async fn build_project<A: TrackerApi>(
    api: &A,
    target: ProjectTarget,
    page_limit: u32,
    progress: &Progress,
) -> Result<ProjectTable, TrackerError> {
    let caption = match api.project(target.id).await {
        Ok(project) => project.name,
        Err(error) => {
            tracing::warn!(project_id = target.id, %error, "project settings unavailable");
            format!("Project {}", target.id)
        }
    };

    progress.set_message(&format!("{caption}: epics"));
    let mut epics = api.epics(target.id).await?;

    progress.set_message(&format!("{caption}: iterations"));
    let iterations = collect_iterations(api, target.id, target.offset, page_limit).await?;
    tracing::info!(
        project_id = target.id,
        epics = epics.len(),
        iterations = iterations.len(),
        "fetched project"
    );

    let table = roadmap_engine::build_table(target.id, caption, &mut epics, &iterations);
    log_epic_dates(&epics);
    Ok(table)
}

fn log_epic_dates(epics: &[Epic]) {
    for epic in epics {
        tracing::debug!(
            epic = %epic.name,
            start = ?epic.dates.start,
            release = ?epic.dates.release,
            finish = ?epic.dates.finish,
            stories = epic.tally.total,
            "correlated epic"
        );
    }
}
