//! Checkup report rendering for the `dogcow` binary.

use crate::clock::{Clock, FixedClock};
use crate::config::{OutputFormat, ReportConfig};
use crate::domain::{Cow, Dog, DogCow, cow, dog};
use crate::error::Result;
use anyhow::Context;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckupReport {
    pub breed: String,
    pub name: String,
    pub birth_date: DateTime<FixedOffset>,
    pub dog_checkup: DateTime<FixedOffset>,
    pub cow_checkup: DateTime<FixedOffset>,
    pub next_checkup: DateTime<FixedOffset>,
    pub evaluated_at: DateTime<FixedOffset>,
}

impl CheckupReport {
    /// Every date in the row is computed against one reading of `clock`.
    pub fn for_dog_cow(animal: &DogCow, clock: &dyn Clock) -> Result<Self> {
        let snapshot = FixedClock::new(clock.now());
        Ok(Self {
            breed: animal.breed(),
            name: animal.name(),
            birth_date: animal.birth_date(),
            dog_checkup: dog::next_checkup(animal.dog_data(), &snapshot)?,
            cow_checkup: cow::next_checkup(animal.cow_data(), &snapshot)?,
            next_checkup: animal.next_checkup(&snapshot)?,
            evaluated_at: snapshot.instant(),
        })
    }

    pub fn to_text_line(&self) -> String {
        format!(
            "{} ({}), born {}: next checkup {} (dog {}, cow {})",
            self.name,
            self.breed,
            self.birth_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.next_checkup.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.dog_checkup.format("%Y-%m-%d"),
            self.cow_checkup.format("%Y-%m-%d"),
        )
    }
}

/// Generates `config.count` DogCows and writes a report for each.
pub fn build_reports(config: &ReportConfig, clock: &dyn Clock) -> Result<Vec<CheckupReport>> {
    (0..config.count)
        .map(|_| {
            let animal = DogCow::new(clock)?;
            CheckupReport::for_dog_cow(&animal, clock)
        })
        .collect()
}

pub fn write_reports<W: Write>(
    reports: &[CheckupReport],
    format: OutputFormat,
    mut writer: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(writer, "{}", report.to_text_line()).context("failed to write report")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, reports)
                .context("failed to serialize reports")?;
            writeln!(writer).context("failed to write report")?;
        }
    }
    writer.flush().context("failed to flush report output")
}
