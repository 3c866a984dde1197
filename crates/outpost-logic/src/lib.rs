//! Pure gameplay logic for Outpost.
//!
//! This crate contains station content logic that is independent of any
//! engine or runtime. Functions take plain data (and an explicit `Rng`
//! where they need randomness) and return results, making them
//! unit-testable and portable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`spawn_table`] | Weighted entity spawn tables with memoizable sampling |
//! | [`slot`] | Single-occupant storage slot insertion/ejection policy |

pub mod slot;
pub mod spawn_table;
