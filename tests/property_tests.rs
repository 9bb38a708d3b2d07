//! Property-based tests for checkup scheduling.
//!
//! Evaluation instants range over several decades and every whole-hour UTC
//! offset from -12:00 to +14:00; birth dates use the same day range the
//! DogCow generator draws from (1-28), so every anniversary exists every year.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use dogcow::domain::calendar::start_of_day;
use dogcow::domain::{cow, dog};
use dogcow::{Breed, Cow, CowData, Dog, DogCow, DogData, FixedClock, PetName};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Generators
// =============================================================================

/// Generate an evaluation instant with an arbitrary whole-hour offset
fn arb_now() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (
        1990i32..2090,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        -12i32..=14,
    )
        .prop_map(|(year, month, day, hour, minute, second, offset_hours)| {
            FixedOffset::east_opt(offset_hours * 3600)
                .unwrap()
                .with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap()
        })
}

/// Generate a birth date at whole minutes, UTC
fn arb_birth() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (1990i32..2090, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(
        |(year, month, day, hour, minute)| {
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .unwrap()
        },
    )
}

fn cow_record(birth: DateTime<FixedOffset>) -> CowData {
    CowData::new(Breed::new("Angus").unwrap(), birth)
}

fn dog_record(birth: DateTime<FixedOffset>) -> DogData {
    DogData::new(
        Breed::new("Border Collie").unwrap(),
        PetName::new("Nate").unwrap(),
        birth,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn cow_checkup_within_a_year_of_today(now in arb_now(), birth in arb_birth()) {
        let clock = FixedClock::new(now);
        let today = start_of_day(now).unwrap();
        let checkup = cow::next_checkup(&cow_record(birth), &clock).unwrap();

        prop_assert!(checkup >= today, "{checkup} is before {today}");
        // A year from today, with room for a leap day.
        prop_assert!(checkup < today + Duration::days(366));
    }

    #[test]
    fn dog_checkup_never_before_today(now in arb_now(), birth in arb_birth()) {
        let clock = FixedClock::new(now);
        let today = start_of_day(now).unwrap();
        let checkup = dog::next_checkup(&dog_record(birth), &clock).unwrap();

        prop_assert!(checkup >= today);
    }

    #[test]
    fn checkup_is_idempotent(now in arb_now(), birth in arb_birth()) {
        let clock = FixedClock::new(now);
        let record = cow_record(birth);
        prop_assert_eq!(
            cow::next_checkup(&record, &clock).unwrap(),
            cow::next_checkup(&record, &clock).unwrap()
        );
    }

    #[test]
    fn dog_is_two_weeks_after_cow_from_new_year(
        year in 1990i32..2090,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        // Keep the cow candidate inside the evaluated year.
        prop_assume!(month > 1 || day > 7);

        let now = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        let birth = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2000, month, day, 6, 30, 0).unwrap();
        let clock = FixedClock::new(now);

        let cow_checkup = cow::next_checkup(&cow_record(birth), &clock).unwrap();
        let dog_checkup = dog::next_checkup(&dog_record(birth), &clock).unwrap();
        prop_assert_eq!(dog_checkup - cow_checkup, Duration::days(14));
    }

    #[test]
    fn dogcow_takes_the_earlier_checkup(now in arb_now(), seed in any::<u64>()) {
        let clock = FixedClock::new(now);
        let animal = DogCow::with_rng(&clock, &mut StdRng::seed_from_u64(seed)).unwrap();

        let dog_checkup = dog::next_checkup(animal.dog_data(), &clock).unwrap();
        let cow_checkup = cow::next_checkup(animal.cow_data(), &clock).unwrap();
        prop_assert_eq!(animal.next_checkup(&clock).unwrap(), dog_checkup.min(cow_checkup));
    }

    #[test]
    fn dogcow_birth_date_round_trips(birth in arb_birth()) {
        let animal = DogCow::born_at(birth).unwrap();
        prop_assert_eq!(animal.birth_date(), birth);
        prop_assert_eq!(animal.dog_data().birth_date(), animal.cow_data().birth_date());
        prop_assert_eq!(animal.breed(), "Border Collie Angus");
    }
}
