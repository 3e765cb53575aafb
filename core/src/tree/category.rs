//! Ordered sound and particle lists for one trigger category.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce;
use crate::error::CoreError;
use crate::registry::{EntityKind, IdRegistry};

use super::Particle;

/// One entry in a category's sound list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SoundEntry {
    /// A single sound path.
    Single(String),
    /// A pool of alternative paths; the consumer picks one at random.
    Pool(Vec<String>),
}

/// Sounds and particles fired for one trigger (hit/stronghit/kill).
///
/// Both lists are ordered and index-addressed; removal is a splice, so
/// indices held by a host are only stable until the next removal.
#[derive(Debug)]
pub struct Category {
    id: u64,
    sounds: Vec<SoundEntry>,
    particles: Vec<Particle>,
}

impl Category {
    pub(crate) fn new(registry: &mut IdRegistry, params: Option<&Value>) -> Self {
        let mut category = Self {
            id: registry.allocate(EntityKind::Category),
            sounds: Vec::new(),
            particles: Vec::new(),
        };
        if let Some(data) = params {
            category.setup(registry, data);
        }
        category
    }

    pub(crate) fn setup(&mut self, registry: &mut IdRegistry, data: &Value) {
        if let Some(sounds) = data.get("sounds").and_then(Value::as_array) {
            for entry in sounds {
                self.add_sound_value(entry);
            }
        }
        // The persisted format wraps the particle list in one extra
        // single-element layer.
        let nested = data
            .get("particles")
            .and_then(Value::as_array)
            .and_then(|outer| outer.first())
            .and_then(Value::as_array);
        if let Some(particles) = nested {
            for params in particles {
                self.add_particle(registry, Some(params));
            }
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn sounds(&self) -> &[SoundEntry] {
        &self.sounds
    }

    pub fn add_sound(&mut self, entry: SoundEntry) {
        self.sounds.push(entry);
    }

    /// Coerce a document value into a sound entry and append it: arrays
    /// become pools, everything else a single path.
    pub fn add_sound_value(&mut self, value: &Value) {
        let entry = match value.as_array() {
            Some(paths) => SoundEntry::Pool(paths.iter().map(coerce::to_string_lossy).collect()),
            None => SoundEntry::Single(coerce::to_string_lossy(value)),
        };
        self.sounds.push(entry);
    }

    /// Remove the sound at `index`, shifting later entries down. Returns
    /// false when out of range.
    pub fn remove_sound(&mut self, index: usize) -> bool {
        if index >= self.sounds.len() {
            return false;
        }
        self.sounds.remove(index);
        true
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn add_particle(&mut self, registry: &mut IdRegistry, params: Option<&Value>) {
        self.particles.push(Particle::new(registry, params));
    }

    /// Remove the particle at `index`, releasing its id. Returns false when
    /// there is no such particle; a teardown failure is logged and the
    /// removal still counts as successful.
    pub fn remove_particle(&mut self, registry: &mut IdRegistry, index: usize) -> bool {
        if index >= self.particles.len() {
            return false;
        }
        let particle = self.particles.remove(index);
        if let Err(e) = particle.destroy(registry) {
            tracing::warn!(error = %e, index, "could not destroy removed particle");
        }
        true
    }

    /// Export to the canonical document form. The particle list keeps its
    /// extra single-element wrapping for format compatibility.
    pub fn output(&self) -> Value {
        let sounds: Vec<Value> = self
            .sounds
            .iter()
            .map(|entry| match entry {
                SoundEntry::Single(path) => Value::String(path.clone()),
                SoundEntry::Pool(paths) => {
                    Value::Array(paths.iter().cloned().map(Value::String).collect())
                }
            })
            .collect();
        let particles: Vec<Value> = self.particles.iter().map(Particle::output).collect();

        let mut doc = Map::new();
        doc.insert("sounds".into(), Value::Array(sounds));
        doc.insert("particles".into(), Value::Array(vec![Value::Array(particles)]));
        Value::Object(doc)
    }

    /// Release every particle id, then this category's own id. A failing
    /// particle is logged and does not stop the remaining teardowns.
    pub(crate) fn destroy(mut self, registry: &mut IdRegistry) -> Result<(), CoreError> {
        for particle in self.particles.drain(..) {
            if let Err(e) = particle.destroy(registry) {
                tracing::warn!(error = %e, "could not destroy category particle");
            }
        }
        registry.release(self.id)
    }
}
