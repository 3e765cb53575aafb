//! Per-tree identifier arena.
//!
//! Every live entity in the tree (effect, category, particle) holds an id
//! from this registry. Ids are unique among currently-live entities only:
//! once the last id has been released the counter resets to 0 and numbering
//! starts over. Each reset begins a new "generation"; ids from different
//! generations may collide numerically.

use std::collections::HashMap;

use crate::error::CoreError;

/// What kind of entity owns a registered id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Effect,
    Category,
    Particle,
}

/// Arena of live entity ids.
///
/// One instance per tree, owned by the `Editor` and threaded by reference
/// through every allocation and teardown. No hidden global state.
#[derive(Debug, Default)]
pub struct IdRegistry {
    next_id: u64,
    live: HashMap<u64, EntityKind>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id for an entity of the given kind. Never fails.
    pub fn allocate(&mut self, kind: EntityKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, kind);
        id
    }

    /// Release a previously allocated id.
    ///
    /// When the last live id is released the counter resets to 0.
    pub fn release(&mut self, id: u64) -> Result<(), CoreError> {
        if self.live.remove(&id).is_none() {
            return Err(CoreError::IdNotRegistered(id));
        }
        if self.live.is_empty() {
            self.next_id = 0;
            tracing::debug!("no ids registered, resetting index");
        }
        Ok(())
    }

    /// Kind of the entity owning `id`, if it is live.
    pub fn lookup(&self, id: u64) -> Option<EntityKind> {
        self.live.get(&id).copied()
    }

    /// Number of currently-live ids.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// The id the next allocation will return.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
