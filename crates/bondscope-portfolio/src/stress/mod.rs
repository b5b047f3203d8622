//! Rate shock scenarios.
//!
//! Shocks are parallel shifts in percentage points, applied to each bond
//! through the duration-convexity approximation. No repricing is done.

mod impact;
mod scenarios;

pub use impact::*;
pub use scenarios::*;
