//! Animal capabilities and the composite that combines them
//!
//! ## Layout
//!
//! ```text
//! +-----------------+     +-----------------+
//! |  dog::Dog       |     |  cow::Cow       |
//! |  (DogData)      |     |  (CowData)      |
//! +--------+--------+     +--------+--------+
//!          |                       |
//!          +-----------+-----------+
//!                      |
//!             +--------v--------+
//!             | dog_cow::DogCow |
//!             +-----------------+
//! ```
//!
//! Each capability is a trait with one required accessor and default methods
//! that forward to free functions in the same module. A type that overrides a
//! default can still reach the plain behavior through those functions, which
//! is how [`DogCow`] merges the two checkup rules.

pub mod calendar;
pub mod cow;
pub mod dog;
pub mod dog_cow;
pub mod value_objects;

pub use cow::{Cow, CowData};
pub use dog::{Dog, DogData};
pub use dog_cow::DogCow;
pub use value_objects::{Breed, PetName, ValidationError};
