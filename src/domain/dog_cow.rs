//! An animal that is both a [`Dog`] and a [`Cow`].
//!
//! Both records share one birth date. Where the capabilities overlap, the
//! composite merges them: the checkup is whichever comes first, the breed
//! lists both, and the birth date comes from the dog record.

use super::cow::{self, Cow, CowData};
use super::dog::{self, Dog, DogData};
use super::value_objects::{Breed, PetName};
use crate::clock::{Clock, FixedClock};
use crate::error::Result;
use chrono::{DateTime, Datelike, FixedOffset};
use rand::Rng;
use serde::Serialize;

pub const DOG_BREED: &str = "Border Collie";
pub const DOG_NAME: &str = "Nate";
pub const COW_BREED: &str = "Angus";

/// Birth years are drawn from the current year and the four before it.
pub const MAX_AGE_YEARS: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogCow {
    birth_date: DateTime<FixedOffset>,
    dog_data: DogData,
    cow_data: CowData,
}

impl DogCow {
    /// Creates a DogCow with a random birth date in the last few years.
    pub fn new(clock: &dyn Clock) -> Result<Self> {
        Self::with_rng(clock, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(clock: &dyn Clock, rng: &mut R) -> Result<Self> {
        let birth_date = random_birth_date(clock, rng)?;
        Self::born_at(birth_date)
    }

    /// Creates a DogCow with a known birth date.
    pub fn born_at(birth_date: DateTime<FixedOffset>) -> Result<Self> {
        let dog_data = DogData::new(Breed::new(DOG_BREED)?, PetName::new(DOG_NAME)?, birth_date);
        let cow_data = CowData::new(Breed::new(COW_BREED)?, birth_date);

        tracing::info!(
            %birth_date,
            dog_breed = DOG_BREED,
            cow_breed = COW_BREED,
            "dogcow created"
        );

        Ok(Self {
            birth_date,
            dog_data,
            cow_data,
        })
    }

    /// Earlier of the dog and cow checkups, both judged against a single
    /// reading of `clock`.
    pub fn next_checkup(&self, clock: &dyn Clock) -> Result<DateTime<FixedOffset>> {
        let snapshot = FixedClock::new(clock.now());
        let dog_checkup = dog::next_checkup(&self.dog_data, &snapshot)?;
        let cow_checkup = cow::next_checkup(&self.cow_data, &snapshot)?;

        let chosen = earliest_checkup(dog_checkup, cow_checkup);
        tracing::debug!(%dog_checkup, %cow_checkup, %chosen, "selected earliest checkup");

        Ok(chosen)
    }

    pub fn breed(&self) -> String {
        format!("{} {}", dog::breed(&self.dog_data), cow::breed(&self.cow_data))
    }

    pub fn name(&self) -> String {
        dog::name(&self.dog_data)
    }

    pub fn birth_date(&self) -> DateTime<FixedOffset> {
        debug_assert_eq!(self.birth_date, cow::birth_date(&self.cow_data));
        dog::birth_date(&self.dog_data)
    }
}

impl Dog for DogCow {
    fn dog_data(&self) -> &DogData {
        &self.dog_data
    }

    fn next_checkup(&self, clock: &dyn Clock) -> Result<DateTime<FixedOffset>> {
        DogCow::next_checkup(self, clock)
    }

    fn breed(&self) -> String {
        DogCow::breed(self)
    }

    fn birth_date(&self) -> DateTime<FixedOffset> {
        DogCow::birth_date(self)
    }
}

impl Cow for DogCow {
    fn cow_data(&self) -> &CowData {
        &self.cow_data
    }

    fn next_checkup(&self, clock: &dyn Clock) -> Result<DateTime<FixedOffset>> {
        DogCow::next_checkup(self, clock)
    }

    fn breed(&self) -> String {
        DogCow::breed(self)
    }

    fn birth_date(&self) -> DateTime<FixedOffset> {
        DogCow::birth_date(self)
    }
}

/// Picks the earlier checkup. The dog's date wins a tie; with the fixed
/// one-week offsets a tie does not arise from the default rules.
pub fn earliest_checkup(
    dog_checkup: DateTime<FixedOffset>,
    cow_checkup: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    if cow_checkup < dog_checkup {
        cow_checkup
    } else {
        dog_checkup
    }
}

/// Random birth date at whole minutes, UTC, with the day capped at 28 so every
/// month is valid.
pub fn random_birth_date<R: Rng>(
    clock: &dyn Clock,
    rng: &mut R,
) -> Result<DateTime<FixedOffset>> {
    let year = clock.now().year() - rng.gen_range(0..=MAX_AGE_YEARS);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);

    super::calendar::utc_datetime(year, month, day, hour, minute)
}
