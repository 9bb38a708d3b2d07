//! The Dog capability: breed, name and birth date, with an annual checkup one
//! week after the birthday.

use super::calendar::{self, AnniversaryOffset, CHECKUP_OFFSET_DAYS};
use super::value_objects::{Breed, PetName};
use crate::clock::Clock;
use crate::error::Result;
use chrono::{DateTime, Days, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fields a type must store to act as a dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogData {
    breed: Breed,
    name: PetName,
    birth_date: DateTime<FixedOffset>,
}

impl DogData {
    pub fn new(breed: Breed, name: PetName, birth_date: DateTime<FixedOffset>) -> Self {
        Self {
            breed,
            name,
            birth_date,
        }
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn name(&self) -> &PetName {
        &self.name
    }

    pub fn birth_date(&self) -> DateTime<FixedOffset> {
        self.birth_date
    }
}

pub fn next_checkup<C: Clock + ?Sized>(
    data: &DogData,
    clock: &C,
) -> Result<DateTime<FixedOffset>> {
    calendar::next_checkup(
        clock,
        data.birth_date,
        AnniversaryOffset::After(Days::new(CHECKUP_OFFSET_DAYS)),
    )
}

pub fn breed(data: &DogData) -> String {
    data.breed.to_string()
}

pub fn name(data: &DogData) -> String {
    data.name.to_string()
}

pub fn birth_date(data: &DogData) -> DateTime<FixedOffset> {
    data.birth_date
}

pub trait Dog {
    /// The dog record stored on the implementing type.
    fn dog_data(&self) -> &DogData;

    /// Next vet visit: annually, one week after the birthday.
    fn next_checkup(&self, clock: &dyn Clock) -> Result<DateTime<FixedOffset>> {
        next_checkup(self.dog_data(), clock)
    }

    fn breed(&self) -> String {
        breed(self.dog_data())
    }

    fn name(&self) -> String {
        name(self.dog_data())
    }

    fn birth_date(&self) -> DateTime<FixedOffset> {
        birth_date(self.dog_data())
    }
}

impl Dog for DogData {
    fn dog_data(&self) -> &DogData {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_defaults_project_record() {
        let birth = at("2022-11-20T04:05:00Z");
        let data = DogData::new(
            Breed::new("Beagle").unwrap(),
            PetName::new("Rex").unwrap(),
            birth,
        );
        assert_eq!(Dog::breed(&data), "Beagle");
        assert_eq!(Dog::name(&data), "Rex");
        assert_eq!(Dog::birth_date(&data), birth);
    }

    #[test]
    fn test_checkup_one_week_after_birthday() {
        let clock = FixedClock::new(at("2024-11-27T23:30:00-05:00"));
        let data = DogData::new(
            Breed::new("Beagle").unwrap(),
            PetName::new("Rex").unwrap(),
            at("2022-11-20T04:05:00Z"),
        );
        // Today is Nov 27 in -05:00, which starts at 05:00Z, before noon UTC.
        assert_eq!(data.next_checkup(&clock).unwrap(), at("2024-11-27T12:00:00Z"));
    }
}
