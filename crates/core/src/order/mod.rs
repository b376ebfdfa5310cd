//! Lifting-order derivation.
//!
//! A pure mapping from the active flight's entries plus the lifting selection
//! to a [`LiftingOrder`] snapshot: who lifts now, on which attempt, and who is
//! up next. Recomputed on every state change, never mutated in place.

mod engine;
mod types;

pub use engine::{compute, compute_with_tie_break};
pub use types::LiftingOrder;
