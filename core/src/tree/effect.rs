//! Fixed hit/stronghit/kill category triple for one material kind.

use impactfx_types::TriggerCategory;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::registry::{EntityKind, IdRegistry};

use super::Category;

/// One material kind's effect definition: exactly three categories, fixed
/// at construction.
#[derive(Debug)]
pub struct Effect {
    id: u64,
    hit: Category,
    stronghit: Category,
    kill: Category,
}

impl Effect {
    /// Build from an optional document fragment; missing sub-keys yield
    /// empty categories.
    pub(crate) fn new(registry: &mut IdRegistry, params: Option<&Value>) -> Self {
        let sub = |name: &str| params.and_then(|p| p.get(name));
        Self {
            id: registry.allocate(EntityKind::Effect),
            hit: Category::new(registry, sub("hit")),
            stronghit: Category::new(registry, sub("stronghit")),
            kill: Category::new(registry, sub("kill")),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn category(&self, trigger: TriggerCategory) -> &Category {
        match trigger {
            TriggerCategory::Hit => &self.hit,
            TriggerCategory::StrongHit => &self.stronghit,
            TriggerCategory::Kill => &self.kill,
        }
    }

    pub fn category_mut(&mut self, trigger: TriggerCategory) -> &mut Category {
        match trigger {
            TriggerCategory::Hit => &mut self.hit,
            TriggerCategory::StrongHit => &mut self.stronghit,
            TriggerCategory::Kill => &mut self.kill,
        }
    }

    pub fn output(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("hit".into(), self.hit.output());
        doc.insert("stronghit".into(), self.stronghit.output());
        doc.insert("kill".into(), self.kill.output());
        Value::Object(doc)
    }

    /// Tear down the three categories best-effort, then release this id.
    /// A failing category is logged; its siblings are still destroyed.
    pub(crate) fn destroy(self, registry: &mut IdRegistry) -> Result<(), CoreError> {
        let categories = [
            ("hit", self.hit),
            ("stronghit", self.stronghit),
            ("kill", self.kill),
        ];
        for (name, category) in categories {
            if let Err(e) = category.destroy(registry) {
                tracing::warn!(error = %e, category = name, "could not destroy effect category");
            }
        }
        registry.release(self.id)
    }
}
