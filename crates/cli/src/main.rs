use anyhow::Context;

use replenish_cli::{build_source, render, run_analysis, AppConfig};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    replenish_observability::init_with(config.log_format);
    config.warn_on_defaults(|var| std::env::var(var).ok());

    let source = build_source(&config).context("building telemetry source")?;
    let analysis = run_analysis(source.as_ref(), config.delay)?;

    let output = render(&analysis, config.output).context("rendering report")?;
    println!("{output}");

    Ok(())
}
