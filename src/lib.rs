pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CliArgs, OutputFormat, ReportConfig};
pub use domain::{Breed, Cow, CowData, Dog, DogCow, DogData, PetName};
pub use error::{DomainError, ErrorKind};
pub use logging::{LoggingConfig, init_logging};

use anyhow::Result;
use std::io::Write;

pub fn run_report<W: Write>(config: &ReportConfig, writer: W) -> Result<()> {
    let clock = config.clock();
    let evaluated_at = clock.now();

    tracing::info!(
        count = config.count,
        format = %config.format,
        %evaluated_at,
        pinned = config.now.is_some(),
        "building checkup report",
    );

    let reports = match report::build_reports(config, clock.as_ref()) {
        Ok(reports) => reports,
        Err(error) => {
            tracing::error!(kind = %error.kind(), category = error.category(), %error, "report failed");
            return Err(error.into());
        }
    };

    report::write_reports(&reports, config.format, writer)
}
