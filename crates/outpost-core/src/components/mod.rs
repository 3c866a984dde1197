//! Component definitions for station content.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod cryo;
mod debris;

pub use common::*;
pub use cryo::*;
pub use debris::*;
