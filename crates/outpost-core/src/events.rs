//! Typed events the host dispatches into content handlers, and the verbs
//! content contributes back to interaction menus.
//!
//! Events are plain data; handlers are free functions in [`crate::systems`]
//! registered with the host's dispatcher. Verbs are declarative: instead of
//! carrying a closure, a verb names the [`VerbAction`] the host should run
//! if the player picks it.

use hecs::Entity;

/// An entity inside a container tried to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRelayed {
    /// The storage unit whose container relayed the movement.
    pub storage: Entity,
    /// The contained entity that moved.
    pub mover: Entity,
}

/// One entity was drag-dropped onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDropped {
    /// Drop target (the storage unit).
    pub target: Entity,
    /// The entity that was dragged.
    pub dragged: Entity,
    /// The player doing the dragging.
    pub user: Entity,
}

/// The host is assembling an interaction menu for `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbsRequested {
    /// The entity the menu is for.
    pub target: Entity,
    /// The player opening the menu.
    pub user: Entity,
    /// What the player is holding, if anything.
    pub using: Option<Entity>,
    /// Host-computed: the user can reach the target.
    pub can_access: bool,
    /// Host-computed: the user can interact at all.
    pub can_interact: bool,
}

/// Menu grouping for a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbCategory {
    Eject,
    Insert,
}

/// What the host should do when a verb is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbAction {
    /// Eject whatever the storage unit holds.
    EjectOccupant { storage: Entity },
    /// The user climbs into the storage unit.
    SelfInsert { storage: Entity, user: Entity },
    /// Insert the entity the user is holding.
    InsertHeld {
        storage: Entity,
        inserted: Entity,
        user: Entity,
    },
}

/// A candidate action offered in an interaction menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Verb {
    pub text: String,
    pub category: Option<VerbCategory>,
    /// Higher sorts first; lets eject win the alt-click slot.
    pub priority: i32,
    pub action: VerbAction,
}

impl Verb {
    pub fn new(text: impl Into<String>, action: VerbAction) -> Self {
        Self {
            text: text.into(),
            category: None,
            priority: 0,
            action,
        }
    }

    pub fn with_category(mut self, category: VerbCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
