use anyhow::Context;

/// Handle `roadmap schema`.
pub fn handle() -> anyhow::Result<()> {
    let schema = roadmap_engine::report_schema();
    let json = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
    println!("{json}");
    Ok(())
}
