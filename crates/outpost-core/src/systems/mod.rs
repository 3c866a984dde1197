//! Systems - event handlers and operations over the content components

mod cryo_storage;
mod debris;

pub use cryo_storage::*;
pub use debris::*;
