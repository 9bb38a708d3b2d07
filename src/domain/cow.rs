//! The Cow capability: breed and birth date, with an annual checkup one week
//! before the birthday.

use super::calendar::{self, AnniversaryOffset, CHECKUP_OFFSET_DAYS};
use super::value_objects::Breed;
use crate::clock::Clock;
use crate::error::Result;
use chrono::{DateTime, Days, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fields a type must store to act as a cow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CowData {
    breed: Breed,
    birth_date: DateTime<FixedOffset>,
}

impl CowData {
    pub fn new(breed: Breed, birth_date: DateTime<FixedOffset>) -> Self {
        Self { breed, birth_date }
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn birth_date(&self) -> DateTime<FixedOffset> {
        self.birth_date
    }
}

/// Default checkup rule for cows, callable by implementors that override
/// [`Cow::next_checkup`] but still need the plain cow answer.
pub fn next_checkup<C: Clock + ?Sized>(
    data: &CowData,
    clock: &C,
) -> Result<DateTime<FixedOffset>> {
    calendar::next_checkup(
        clock,
        data.birth_date,
        AnniversaryOffset::Before(Days::new(CHECKUP_OFFSET_DAYS)),
    )
}

pub fn breed(data: &CowData) -> String {
    data.breed.to_string()
}

pub fn birth_date(data: &CowData) -> DateTime<FixedOffset> {
    data.birth_date
}

pub trait Cow {
    /// The cow record stored on the implementing type.
    fn cow_data(&self) -> &CowData;

    /// Next vet visit: annually, one week before the birthday.
    fn next_checkup(&self, clock: &dyn Clock) -> Result<DateTime<FixedOffset>> {
        next_checkup(self.cow_data(), clock)
    }

    fn breed(&self) -> String {
        breed(self.cow_data())
    }

    fn birth_date(&self) -> DateTime<FixedOffset> {
        birth_date(self.cow_data())
    }
}

impl Cow for CowData {
    fn cow_data(&self) -> &CowData {
        self
    }
}
