//! Balance constants and helpers shared by every subsystem.

pub mod constants;

pub use constants::*;

use rand::Rng;
use uuid::Uuid;

/// Builds an entity id from the injected generator, so seeded runs produce
/// the same ids.
pub fn random_uuid(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
