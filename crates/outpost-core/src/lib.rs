//! Outpost Core - station content riding on a host ECS engine
//!
//! Gameplay content for a multiplayer space-station simulation: data-driven
//! components, the event reactions wired to them, and the seams through
//! which they call back into the host engine.
//!
//! # Architecture
//!
//! Entities and components live in a `hecs` [`World`](hecs::World) owned by
//! the host. The content layer contributes three kinds of pieces:
//! - **Components**: pure data attached to entities (`DebrisSelector`,
//!   `CryoStorage`), authored in external definition files.
//! - **Systems**: plain functions the host's dispatcher calls with a typed
//!   event. Handlers run to completion, one at a time; all failure paths
//!   are silent no-ops so nothing propagates back into the dispatcher.
//! - **Host seams**: trait objects ([`host::HostSystems`]) for the engine
//!   subsystems the content delegates to - containers, action blocking,
//!   climbing, entity spawning. Tests supply in-memory fakes.
//!
//! # Example
//!
//! ```rust,no_run
//! use hecs::World;
//! use outpost_core::prelude::*;
//! use outpost_logic::spawn_table::SpawnEntry;
//!
//! let mut world = World::new();
//! let field = world.spawn((DebrisSelector::new(vec![
//!     SpawnEntry::new("asteroid-small", 3.0),
//!     SpawnEntry::new("derelict-pod", 1.0),
//! ]),));
//!
//! let mut rng = rand::thread_rng();
//! let picks = outpost_core::systems::select_debris(&world, field, &mut rng, 8);
//! ```

pub mod components;
pub mod config;
pub mod events;
pub mod host;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::host::HostSystems;
}
