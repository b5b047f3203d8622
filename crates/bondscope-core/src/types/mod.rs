//! Reference data types.

mod bond;
mod rating;

pub use bond::{BondId, BondRecord, DEFAULT_FACE_VALUE};
pub use rating::CreditRating;
