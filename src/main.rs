use clap::Parser;
use dogcow::{CliArgs, LoggingConfig, ReportConfig, init_logging, run_report};

fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = ReportConfig::from_args(cli)?;

    // Validate configuration before doing any work (fail-fast)
    config.validate()?;

    run_report(&config, std::io::stdout().lock())
}
