use boundary_index::{DemoConfig, ScenarioBuilder};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DemoConfig::default();
    info!(
        "removing {} (seed {}, {} point(s) per polygon)",
        config.remove, config.seed, config.points_per_polygon
    );

    let report = ScenarioBuilder::new().bundled().config(config).run()?;

    info!(
        "{} entries removed, {} remain, {} of {} points lost their match",
        report.removed_entries,
        report.remaining_entries,
        report.missing.len(),
        report.checked_points
    );

    for line in report.lines() {
        println!("{}", line);
    }

    Ok(())
}
