//! Leaf particle entity.
//!
//! A particle is a bag of rendering/physics parameters plus a persist-flag
//! set deciding which of them are written out. Export is flag-driven, not
//! value-driven: a field equal to its default is still exported when its
//! flag is set, and a changed field is omitted when the flag is cleared.

use impactfx_types::{ParticleField, VarianceKey};
use serde_json::{Map, Value};

use crate::coerce;
use crate::error::CoreError;
use crate::registry::{EntityKind, IdRegistry};

/// Variance attached to a particle parameter: a scalar spread, or a
/// `[min, max]` range for `initialVelocity`.
#[derive(Debug, Clone, PartialEq)]
pub enum VarianceValue {
    Scalar(f64),
    Range([f64; 2]),
}

/// Which optional fields `output` writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveFlags {
    pub size: bool,
    pub angular_velocity: bool,
    pub color: bool,
    pub fade: bool,
    pub destruction_time: bool,
    pub destruction_action: bool,
    pub position: bool,
    pub initial_velocity: bool,
    pub final_velocity: bool,
    pub approach: bool,
    pub layer: bool,
    pub time_to_live: bool,
}

impl SaveFlags {
    pub fn get(&self, field: ParticleField) -> bool {
        match field {
            ParticleField::Size => self.size,
            ParticleField::AngularVelocity => self.angular_velocity,
            ParticleField::Color => self.color,
            ParticleField::Fade => self.fade,
            ParticleField::DestructionTime => self.destruction_time,
            ParticleField::DestructionAction => self.destruction_action,
            ParticleField::Position => self.position,
            ParticleField::InitialVelocity => self.initial_velocity,
            ParticleField::FinalVelocity => self.final_velocity,
            ParticleField::Approach => self.approach,
            ParticleField::Layer => self.layer,
            ParticleField::TimeToLive => self.time_to_live,
        }
    }

    pub fn set(&mut self, field: ParticleField, on: bool) {
        match field {
            ParticleField::Size => self.size = on,
            ParticleField::AngularVelocity => self.angular_velocity = on,
            ParticleField::Color => self.color = on,
            ParticleField::Fade => self.fade = on,
            ParticleField::DestructionTime => self.destruction_time = on,
            ParticleField::DestructionAction => self.destruction_action = on,
            ParticleField::Position => self.position = on,
            ParticleField::InitialVelocity => self.initial_velocity = on,
            ParticleField::FinalVelocity => self.final_velocity = on,
            ParticleField::Approach => self.approach = on,
            ParticleField::Layer => self.layer = on,
            ParticleField::TimeToLive => self.time_to_live = on,
        }
    }
}

fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() { value } else { default }
}

fn finite_pair(pair: [f64; 2]) -> [f64; 2] {
    [finite_or(pair[0], 0.0), finite_or(pair[1], 0.0)]
}

#[derive(Debug)]
pub struct Particle {
    id: u64,
    particle_type: String,
    animation: String,
    size: f64,
    angular_velocity: f64,
    color: [i64; 4],
    fade: f64,
    destruction_time: f64,
    destruction_action: String,
    position: [f64; 2],
    initial_velocity: [f64; 2],
    final_velocity: [f64; 2],
    approach: [f64; 2],
    layer: String,
    time_to_live: f64,
    flippable: bool,
    variance: Vec<(VarianceKey, VarianceValue)>,
    save: SaveFlags,
}

impl Particle {
    pub(crate) fn new(registry: &mut IdRegistry, params: Option<&Value>) -> Self {
        let mut particle = Self {
            id: registry.allocate(EntityKind::Particle),
            particle_type: "ember".to_string(),
            animation: String::new(),
            size: 1.0,
            angular_velocity: 0.0,
            color: [0; 4],
            fade: 1.0,
            destruction_time: 0.0,
            destruction_action: "shrink".to_string(),
            position: [0.0; 2],
            initial_velocity: [0.0; 2],
            final_velocity: [0.0; 2],
            approach: [0.0; 2],
            layer: "front".to_string(),
            time_to_live: 0.0,
            flippable: false,
            variance: Vec::new(),
            save: SaveFlags::default(),
        };
        if let Some(data) = params {
            particle.setup(data);
        }
        particle
    }

    /// Bulk-initialize from a document fragment.
    ///
    /// Present keys are assigned *and* marked for persistence; absent keys
    /// keep their defaults with the flag clear. Pair/color fields only apply
    /// when the value is actually an array.
    pub fn setup(&mut self, data: &Value) {
        let Some(obj) = data.as_object() else { return };

        if let Some(v) = obj.get("type") {
            self.particle_type = coerce::to_string_lossy(v);
        }
        if self.particle_type == "animated" {
            if let Some(v) = obj.get("animation") {
                self.animation = coerce::to_string_lossy(v);
            }
        }
        if let Some(v) = obj.get("size") {
            self.size = finite_or(coerce::to_f64(v, 1.0), 1.0);
            self.save.size = true;
        }
        if let Some(v) = obj.get("angularVelocity") {
            self.angular_velocity = coerce::to_f64(v, 0.0);
            self.save.angular_velocity = true;
        }
        if let Some(v) = obj.get("color") {
            if let Some(color) = coerce::to_color(v) {
                self.color = color;
                self.save.color = true;
            }
        }
        if let Some(v) = obj.get("fade") {
            self.fade = coerce::to_f64(v, 1.0).clamp(0.0, 1.0);
            self.save.fade = true;
        }
        if let Some(v) = obj.get("destructionTime") {
            self.destruction_time = coerce::to_f64(v, 0.0);
            self.save.destruction_time = true;
        }
        if let Some(v) = obj.get("destructionAction") {
            self.destruction_action = coerce::to_string_lossy(v);
            self.save.destruction_action = true;
        }
        if let Some(v) = obj.get("position") {
            if let Some(pair) = coerce::to_pair(v) {
                self.position = pair;
                self.save.position = true;
            }
        }
        if let Some(v) = obj.get("initialVelocity") {
            if let Some(pair) = coerce::to_pair(v) {
                self.initial_velocity = pair;
                self.save.initial_velocity = true;
            }
        }
        if let Some(v) = obj.get("finalVelocity") {
            if let Some(pair) = coerce::to_pair(v) {
                self.final_velocity = pair;
                self.save.final_velocity = true;
            }
        }
        if let Some(v) = obj.get("approach") {
            if let Some(pair) = coerce::to_pair(v) {
                self.approach = pair;
                self.save.approach = true;
            }
        }
        if let Some(v) = obj.get("layer") {
            self.layer = coerce::to_string_lossy(v);
            self.save.layer = true;
        }
        if let Some(v) = obj.get("timeToLive") {
            self.time_to_live = coerce::to_f64(v, 0.0);
            self.save.time_to_live = true;
        }
        if let Some(v) = obj.get("flippable") {
            if v.as_bool().unwrap_or(false) {
                self.flippable = true;
            }
        }
        if let Some(variance) = obj.get("variance").and_then(Value::as_object) {
            for (key, value) in variance {
                // Unknown keys and malformed shapes are skipped.
                self.set_variance(key, value);
            }
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn particle_type(&self) -> &str {
        &self.particle_type
    }

    /// Change the particle type. Leaving `"animated"` clears the animation.
    pub fn set_type(&mut self, value: impl Into<String>) -> &str {
        self.particle_type = value.into();
        if self.particle_type != "animated" {
            self.animation.clear();
        }
        &self.particle_type
    }

    pub fn animation(&self) -> &str {
        &self.animation
    }

    /// Only meaningful while `type == "animated"`; ignored otherwise.
    pub fn set_animation(&mut self, value: impl Into<String>) -> &str {
        if self.particle_type == "animated" {
            self.animation = value.into();
        }
        &self.animation
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_size(&mut self, value: f64) -> f64 {
        self.size = finite_or(value, 1.0);
        self.size
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, value: f64) -> f64 {
        self.angular_velocity = finite_or(value, 0.0);
        self.angular_velocity
    }

    pub fn color(&self) -> [i64; 4] {
        self.color
    }

    pub fn set_color(&mut self, value: [i64; 4]) -> [i64; 4] {
        self.color = value;
        self.color
    }

    pub fn fade(&self) -> f64 {
        self.fade
    }

    /// Fade is clamped to `[0, 1]` on assignment.
    pub fn set_fade(&mut self, value: f64) -> f64 {
        self.fade = finite_or(value, 0.0).clamp(0.0, 1.0);
        self.fade
    }

    pub fn destruction_time(&self) -> f64 {
        self.destruction_time
    }

    pub fn set_destruction_time(&mut self, value: f64) -> f64 {
        self.destruction_time = finite_or(value, 0.0);
        self.destruction_time
    }

    pub fn destruction_action(&self) -> &str {
        &self.destruction_action
    }

    pub fn set_destruction_action(&mut self, value: impl Into<String>) -> &str {
        self.destruction_action = value.into();
        &self.destruction_action
    }

    pub fn position(&self) -> [f64; 2] {
        self.position
    }

    pub fn set_position(&mut self, value: [f64; 2]) -> [f64; 2] {
        self.position = finite_pair(value);
        self.position
    }

    pub fn initial_velocity(&self) -> [f64; 2] {
        self.initial_velocity
    }

    pub fn set_initial_velocity(&mut self, value: [f64; 2]) -> [f64; 2] {
        self.initial_velocity = finite_pair(value);
        self.initial_velocity
    }

    pub fn final_velocity(&self) -> [f64; 2] {
        self.final_velocity
    }

    pub fn set_final_velocity(&mut self, value: [f64; 2]) -> [f64; 2] {
        self.final_velocity = finite_pair(value);
        self.final_velocity
    }

    pub fn approach(&self) -> [f64; 2] {
        self.approach
    }

    pub fn set_approach(&mut self, value: [f64; 2]) -> [f64; 2] {
        self.approach = finite_pair(value);
        self.approach
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn set_layer(&mut self, value: impl Into<String>) -> &str {
        self.layer = value.into();
        &self.layer
    }

    pub fn time_to_live(&self) -> f64 {
        self.time_to_live
    }

    pub fn set_time_to_live(&mut self, value: f64) -> f64 {
        self.time_to_live = finite_or(value, 0.0);
        self.time_to_live
    }

    pub fn flippable(&self) -> bool {
        self.flippable
    }

    pub fn set_flippable(&mut self, value: bool) -> bool {
        self.flippable = value;
        self.flippable
    }

    pub fn save_flags(&self) -> &SaveFlags {
        &self.save
    }

    /// Force-include or force-omit a field from export, independent of its
    /// current value. Returns false for an unknown field name.
    pub fn set_save_parameter(&mut self, name: &str, on: bool) -> bool {
        match ParticleField::from_key(name) {
            Some(field) => {
                self.save.set(field, on);
                true
            }
            None => false,
        }
    }

    pub fn variance(&self) -> &[(VarianceKey, VarianceValue)] {
        &self.variance
    }

    /// Set a variance entry from a document value.
    ///
    /// Returns false for an unknown key, or for a range key given a
    /// non-array. Scalar parse failures default to 1.0 for `size` and 0.0
    /// otherwise.
    pub fn set_variance(&mut self, name: &str, value: &Value) -> bool {
        let Some(key) = VarianceKey::from_key(name) else {
            return false;
        };
        let stored = if key.is_range() {
            let Some(pair) = coerce::to_pair(value) else {
                return false;
            };
            VarianceValue::Range(pair)
        } else {
            let default = if key == VarianceKey::Size { 1.0 } else { 0.0 };
            VarianceValue::Scalar(coerce::to_f64(value, default))
        };
        match self.variance.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = stored,
            None => self.variance.push((key, stored)),
        }
        true
    }

    /// Remove a variance entry. Returns false when the key is unknown or
    /// not present.
    pub fn remove_variance(&mut self, name: &str) -> bool {
        let Some(key) = VarianceKey::from_key(name) else {
            return false;
        };
        let before = self.variance.len();
        self.variance.retain(|(k, _)| *k != key);
        self.variance.len() != before
    }

    /// Export to the canonical document form.
    ///
    /// `type` is always written; `animation` only for animated particles;
    /// each optional field only when its persist flag is set; `flippable`
    /// only when true; `variance` only when non-empty.
    pub fn output(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("type".into(), Value::String(self.particle_type.clone()));
        if self.particle_type == "animated" {
            doc.insert("animation".into(), Value::String(self.animation.clone()));
        }
        if self.save.size {
            doc.insert("size".into(), coerce::json_num(self.size));
        }
        if self.save.angular_velocity {
            doc.insert("angularVelocity".into(), coerce::json_num(self.angular_velocity));
        }
        if self.save.color {
            doc.insert(
                "color".into(),
                Value::Array(self.color.iter().map(|&c| Value::from(c)).collect()),
            );
        }
        if self.save.fade {
            doc.insert("fade".into(), coerce::json_num(self.fade));
        }
        if self.save.destruction_time {
            doc.insert("destructionTime".into(), coerce::json_num(self.destruction_time));
        }
        if self.save.destruction_action {
            doc.insert(
                "destructionAction".into(),
                Value::String(self.destruction_action.clone()),
            );
        }
        if self.save.position {
            doc.insert("position".into(), coerce::json_pair(self.position));
        }
        if self.save.initial_velocity {
            doc.insert("initialVelocity".into(), coerce::json_pair(self.initial_velocity));
        }
        if self.save.final_velocity {
            doc.insert("finalVelocity".into(), coerce::json_pair(self.final_velocity));
        }
        if self.save.approach {
            doc.insert("approach".into(), coerce::json_pair(self.approach));
        }
        if self.save.layer {
            doc.insert("layer".into(), Value::String(self.layer.clone()));
        }
        if self.save.time_to_live {
            doc.insert("timeToLive".into(), coerce::json_num(self.time_to_live));
        }
        if self.flippable {
            doc.insert("flippable".into(), Value::Bool(true));
        }
        if !self.variance.is_empty() {
            let mut variance = Map::new();
            for (key, value) in &self.variance {
                let entry = match value {
                    VarianceValue::Scalar(v) => coerce::json_num(*v),
                    VarianceValue::Range(pair) => coerce::json_pair(*pair),
                };
                variance.insert(key.as_str().into(), entry);
            }
            doc.insert("variance".into(), Value::Object(variance));
        }
        Value::Object(doc)
    }

    /// Release this particle's registry id. Nothing else to tear down.
    pub(crate) fn destroy(self, registry: &mut IdRegistry) -> Result<(), CoreError> {
        registry.release(self.id)
    }
}
