//! Seams to the host engine's subsystems.
//!
//! The content layer performs no entity creation, containment, or
//! capability checking of its own; it calls into the host through these
//! traits. Handlers receive them as explicit parameters (bundled in
//! [`HostSystems`]) rather than resolving them from ambient global state,
//! so tests can substitute in-memory fakes.

use hecs::Entity;

/// The host's container subsystem: named child containers on entities.
pub trait ContainerRegistry {
    /// Entities currently held in the named container on `owner`, or `None`
    /// when the key does not resolve to a container on that entity.
    fn contained(&self, owner: Entity, container_id: &str) -> Option<Vec<Entity>>;

    /// Move `entity` into the named container on `owner`.
    fn insert(&mut self, owner: Entity, container_id: &str, entity: Entity);

    /// Remove `entity` from the named container on `owner`.
    fn remove(&mut self, owner: Entity, container_id: &str, entity: Entity);
}

/// The host's action-permission checker.
pub trait ActionBlocker {
    /// May `actor` interact with `target`?
    fn can_interact(&self, actor: Entity, target: Entity) -> bool;

    /// May `actor` move under its own power?
    fn can_move(&self, actor: Entity) -> bool;
}

/// The host's climbing subsystem. Ejected bodies are handed off here so
/// they exit over the storage unit instead of clipping into it.
pub trait ClimbController {
    fn force_climbing(&mut self, climber: Entity, over: Entity);
}

/// The host's entity factory, used when a spawn table selection is
/// materialized into the world.
pub trait EntityFactory {
    fn spawn(&mut self, prototype: &str, x: f32, y: f32) -> Entity;
}

/// The host subsystems a content handler may call into, passed explicitly
/// per invocation.
pub struct HostSystems<'a> {
    pub containers: &'a mut dyn ContainerRegistry,
    pub blocker: &'a dyn ActionBlocker,
    pub climb: &'a mut dyn ClimbController,
}
