//! Cryo storage system - sending bodies into storage and back out.
//!
//! Every operation is a silent no-op when a precondition fails: the host
//! dispatcher expects handlers to run to completion without errors, so
//! missing components, denied permissions, and unresolved containers are
//! logged at debug level and otherwise swallowed.

use hecs::{Entity, World};
use log::debug;
use outpost_logic::slot;

use crate::components::{CryoStorage, Label};
use crate::events::{
    DragDropped, MovementRelayed, Verb, VerbAction, VerbCategory, VerbsRequested,
};
use crate::host::{ContainerRegistry, HostSystems};

/// True iff the storage unit's body container currently holds anything.
pub fn is_occupied(
    containers: &dyn ContainerRegistry,
    storage: Entity,
    component: &CryoStorage,
) -> bool {
    containers
        .contained(storage, &component.container_id)
        .map_or(false, |held| !held.is_empty())
}

/// Move `inserted` into the storage unit's body container.
///
/// Skipped silently when the component or container is missing, when `user`
/// may not interact with the unit, or when the unit's insert policy rejects
/// the current occupancy state.
pub fn insert_body(
    world: &World,
    host: &mut HostSystems,
    storage: Entity,
    inserted: Entity,
    user: Entity,
) {
    let component = match world.get::<&CryoStorage>(storage) {
        Ok(component) => component,
        Err(_) => {
            debug!("cryo insert skipped: {storage:?} has no storage component");
            return;
        }
    };

    if !host.blocker.can_interact(user, storage) {
        debug!("cryo insert skipped: {user:?} may not interact with {storage:?}");
        return;
    }

    let held = match host.containers.contained(storage, &component.container_id) {
        Some(held) => held,
        None => {
            debug!(
                "cryo insert skipped: {storage:?} has no container {:?}",
                component.container_id
            );
            return;
        }
    };

    if !slot::insert_allowed(component.insert_policy, !held.is_empty()) {
        debug!("cryo insert skipped: {storage:?} occupancy rejected by policy");
        return;
    }

    host.containers
        .insert(storage, &component.container_id, inserted);
}

/// Empty the storage unit, handing each occupant to the climb system so it
/// exits over the unit. Skipped silently when the unit is already empty.
pub fn eject_body(world: &World, host: &mut HostSystems, storage: Entity) {
    let component = match world.get::<&CryoStorage>(storage) {
        Ok(component) => component,
        Err(_) => {
            debug!("cryo eject skipped: {storage:?} has no storage component");
            return;
        }
    };

    let held = match host.containers.contained(storage, &component.container_id) {
        Some(held) => held,
        None => return,
    };

    if !slot::eject_allowed(!held.is_empty()) {
        return;
    }

    for occupant in held {
        host.containers
            .remove(storage, &component.container_id, occupant);
        host.climb.force_climbing(occupant, storage);
    }
}

/// A contained entity tried to move: let it out, if it is able to act.
pub fn on_relay_movement(world: &World, host: &mut HostSystems, event: &MovementRelayed) {
    if !host.blocker.can_interact(event.mover, event.storage) {
        return;
    }

    eject_body(world, host, event.storage);
}

/// Something was dragged onto the storage unit: try to put it inside.
pub fn on_drag_drop(world: &World, host: &mut HostSystems, event: &DragDropped) {
    insert_body(world, host, event.target, event.dragged, event.user);
}

/// Alt-click menu verbs: eject when occupied, climb in when not.
pub fn alternative_verbs(
    world: &World,
    host: &HostSystems,
    event: &VerbsRequested,
) -> Vec<Verb> {
    if !event.can_access || !event.can_interact {
        return Vec::new();
    }

    let component = match world.get::<&CryoStorage>(event.target) {
        Ok(component) => component,
        Err(_) => return Vec::new(),
    };

    let mut verbs = Vec::new();
    let occupied = is_occupied(&*host.containers, event.target, &component);

    if occupied {
        // Promoted above the default verb so eject is the alt-click action.
        verbs.push(
            Verb::new(
                "Eject occupant",
                VerbAction::EjectOccupant {
                    storage: event.target,
                },
            )
            .with_category(VerbCategory::Eject)
            .with_priority(1),
        );
    }

    if !occupied && host.blocker.can_move(event.user) {
        verbs.push(Verb::new(
            "Enter",
            VerbAction::SelfInsert {
                storage: event.target,
                user: event.user,
            },
        ));
    }

    verbs
}

/// Interaction menu verbs: offer to insert whatever the user is holding.
pub fn interaction_verbs(
    world: &World,
    host: &HostSystems,
    event: &VerbsRequested,
) -> Vec<Verb> {
    let using = match event.using {
        Some(using) => using,
        None => return Vec::new(),
    };

    if !event.can_access || !event.can_interact {
        return Vec::new();
    }

    let component = match world.get::<&CryoStorage>(event.target) {
        Ok(component) => component,
        Err(_) => return Vec::new(),
    };

    if is_occupied(&*host.containers, event.target, &component) {
        return Vec::new();
    }

    let text = world
        .get::<&Label>(using)
        .map(|label| label.0.clone())
        .unwrap_or_else(|_| "Insert".to_string());

    vec![Verb::new(
        text,
        VerbAction::InsertHeld {
            storage: event.target,
            inserted: using,
            user: event.user,
        },
    )
    .with_category(VerbCategory::Insert)]
}

/// Execute a chosen verb against the world.
pub fn run_verb(world: &World, host: &mut HostSystems, action: &VerbAction) {
    match *action {
        VerbAction::EjectOccupant { storage } => eject_body(world, host, storage),
        VerbAction::SelfInsert { storage, user } => insert_body(world, host, storage, user, user),
        VerbAction::InsertHeld {
            storage,
            inserted,
            user,
        } => insert_body(world, host, storage, inserted, user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{FixedBlocker, MemoryContainers, RecordingClimb};
    use outpost_logic::slot::InsertPolicy;

    const SLOT: &str = "cryostorage-body-container";

    struct Fixture {
        world: World,
        containers: MemoryContainers,
        blocker: FixedBlocker,
        climb: RecordingClimb,
        storage: Entity,
        body: Entity,
        user: Entity,
    }

    impl Fixture {
        fn new(policy: InsertPolicy) -> Self {
            let mut world = World::new();
            let storage = world.spawn((CryoStorage {
                insert_policy: policy,
                ..CryoStorage::default()
            },));
            let body = world.spawn(());
            let user = world.spawn(());

            let mut containers = MemoryContainers::default();
            containers.register(storage, SLOT);

            Self {
                world,
                containers,
                blocker: FixedBlocker::allow_all(),
                climb: RecordingClimb::default(),
                storage,
                body,
                user,
            }
        }

        fn occupy(&mut self, occupant: Entity) {
            self.containers
                .register_with(self.storage, SLOT, vec![occupant]);
        }

        fn contained(&self) -> Vec<Entity> {
            self.containers.contained(self.storage, SLOT).unwrap()
        }

        fn verbs_event(&self) -> VerbsRequested {
            VerbsRequested {
                target: self.storage,
                user: self.user,
                using: None,
                can_access: true,
                can_interact: true,
            }
        }
    }

    // Each field is borrowed separately so the world stays shareable while
    // the host systems are mutated.
    macro_rules! host {
        ($fx:ident) => {
            HostSystems {
                containers: &mut $fx.containers,
                blocker: &$fx.blocker,
                climb: &mut $fx.climb,
            }
        };
    }

    #[test]
    fn test_legacy_policy_rejects_insert_into_empty_slot() {
        let mut fx = Fixture::new(InsertPolicy::RequireExistingOccupant);

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);

        assert!(fx.contained().is_empty());
    }

    #[test]
    fn test_legacy_policy_inserts_when_placeholder_present() {
        let mut fx = Fixture::new(InsertPolicy::RequireExistingOccupant);
        let placeholder = fx.world.spawn(());
        fx.occupy(placeholder);

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);

        assert_eq!(fx.contained(), vec![placeholder, fx.body]);
    }

    #[test]
    fn test_require_empty_policy_inserts_into_empty_slot() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);

        assert_eq!(fx.contained(), vec![fx.body]);
    }

    #[test]
    fn test_require_empty_policy_rejects_second_occupant() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);

        assert_eq!(fx.contained(), vec![occupant]);
    }

    #[test]
    fn test_insert_denied_leaves_slot_unchanged() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);
        fx.blocker = FixedBlocker::deny_all();

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);

        assert!(fx.contained().is_empty());
    }

    #[test]
    fn test_insert_with_unresolved_container_is_a_noop() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);
        fx.containers = MemoryContainers::default();

        insert_body(&fx.world, &mut host!(fx), fx.storage, fx.body, fx.user);
        // No container registered; nothing to assert beyond not panicking.
    }

    #[test]
    fn test_insert_without_component_is_a_noop() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);
        let bare = fx.world.spawn(());

        insert_body(&fx.world, &mut host!(fx), bare, fx.body, fx.user);

        assert!(fx.contained().is_empty());
    }

    #[test]
    fn test_eject_empties_slot_and_hands_off_to_climb() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);

        eject_body(&fx.world, &mut host!(fx), fx.storage);

        assert!(fx.contained().is_empty());
        assert_eq!(fx.climb.climbs, vec![(occupant, fx.storage)]);
    }

    #[test]
    fn test_eject_empty_slot_is_a_noop() {
        let mut fx = Fixture::new(InsertPolicy::default());

        eject_body(&fx.world, &mut host!(fx), fx.storage);

        assert!(fx.contained().is_empty());
        assert!(fx.climb.climbs.is_empty());
    }

    #[test]
    fn test_relay_movement_ejects_mobile_occupant() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);
        let event = MovementRelayed {
            storage: fx.storage,
            mover: occupant,
        };

        on_relay_movement(&fx.world, &mut host!(fx), &event);

        assert!(fx.contained().is_empty());
        assert_eq!(fx.climb.climbs, vec![(occupant, fx.storage)]);
    }

    #[test]
    fn test_relay_movement_ignored_when_mover_cannot_act() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);
        fx.blocker = FixedBlocker::deny_all();
        let event = MovementRelayed {
            storage: fx.storage,
            mover: occupant,
        };

        on_relay_movement(&fx.world, &mut host!(fx), &event);

        assert_eq!(fx.contained(), vec![occupant]);
    }

    #[test]
    fn test_drag_drop_inserts_dragged_entity() {
        let mut fx = Fixture::new(InsertPolicy::RequireEmpty);
        let event = DragDropped {
            target: fx.storage,
            dragged: fx.body,
            user: fx.user,
        };

        on_drag_drop(&fx.world, &mut host!(fx), &event);

        assert_eq!(fx.contained(), vec![fx.body]);
    }

    #[test]
    fn test_occupied_unit_offers_eject_verb() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);
        let event = fx.verbs_event();

        let verbs = alternative_verbs(&fx.world, &host!(fx), &event);

        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].category, Some(VerbCategory::Eject));
        assert_eq!(verbs[0].priority, 1);
        assert_eq!(
            verbs[0].action,
            VerbAction::EjectOccupant { storage: fx.storage }
        );
    }

    #[test]
    fn test_empty_unit_offers_enter_verb_to_mobile_user() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let event = fx.verbs_event();

        let verbs = alternative_verbs(&fx.world, &host!(fx), &event);

        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].text, "Enter");
        assert_eq!(
            verbs[0].action,
            VerbAction::SelfInsert {
                storage: fx.storage,
                user: fx.user,
            }
        );
    }

    #[test]
    fn test_no_verbs_without_access() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let mut event = fx.verbs_event();
        event.can_access = false;

        assert!(alternative_verbs(&fx.world, &host!(fx), &event).is_empty());
        assert!(interaction_verbs(&fx.world, &host!(fx), &event).is_empty());
    }

    #[test]
    fn test_no_enter_verb_for_immobilized_user() {
        let mut fx = Fixture::new(InsertPolicy::default());
        fx.blocker.mobile = false;
        let event = fx.verbs_event();

        assert!(alternative_verbs(&fx.world, &host!(fx), &event).is_empty());
    }

    #[test]
    fn test_insert_verb_uses_held_entity_label() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let held = fx.world.spawn((Label::new("stasis bag"),));
        let mut event = fx.verbs_event();
        event.using = Some(held);

        let verbs = interaction_verbs(&fx.world, &host!(fx), &event);

        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].text, "stasis bag");
        assert_eq!(verbs[0].category, Some(VerbCategory::Insert));
    }

    #[test]
    fn test_no_insert_verb_when_occupied_or_empty_handed() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        let held = fx.world.spawn(());

        // Empty-handed.
        let event = fx.verbs_event();
        assert!(interaction_verbs(&fx.world, &host!(fx), &event).is_empty());

        // Holding something, but the unit is occupied.
        fx.occupy(occupant);
        let mut event = fx.verbs_event();
        event.using = Some(held);
        assert!(interaction_verbs(&fx.world, &host!(fx), &event).is_empty());
    }

    #[test]
    fn test_run_verb_executes_eject() {
        let mut fx = Fixture::new(InsertPolicy::default());
        let occupant = fx.world.spawn(());
        fx.occupy(occupant);

        run_verb(
            &fx.world,
            &mut host!(fx),
            &VerbAction::EjectOccupant { storage: fx.storage },
        );

        assert!(fx.contained().is_empty());
        assert_eq!(fx.climb.climbs, vec![(occupant, fx.storage)]);
    }
}
