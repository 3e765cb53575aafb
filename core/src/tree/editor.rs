//! Root aggregate: the four material effect kinds, the serialization tier
//! selector, and the notification channels.

use impactfx_types::{CompressionTier, EffectKind, TriggerCategory};
use serde_json::{Map, Value};

use crate::codec;
use crate::coerce;
use crate::error::BoxError;
use crate::events::{Channel, Dispatcher, ListenerId};
use crate::registry::IdRegistry;

use super::{Category, Effect, Particle};

/// The four fixed effect kinds.
#[derive(Debug)]
struct EffectSet {
    organic: Effect,
    robotic: Effect,
    wooden: Effect,
    stone: Effect,
}

impl EffectSet {
    fn build(registry: &mut IdRegistry, params: Option<&Value>) -> Self {
        let sub = |name: &str| params.and_then(|p| p.get(name));
        Self {
            organic: Effect::new(registry, sub("organic")),
            robotic: Effect::new(registry, sub("robotic")),
            wooden: Effect::new(registry, sub("wooden")),
            stone: Effect::new(registry, sub("stone")),
        }
    }

    fn get(&self, kind: EffectKind) -> &Effect {
        match kind {
            EffectKind::Organic => &self.organic,
            EffectKind::Robotic => &self.robotic,
            EffectKind::Wooden => &self.wooden,
            EffectKind::Stone => &self.stone,
        }
    }

    fn get_mut(&mut self, kind: EffectKind) -> &mut Effect {
        match kind {
            EffectKind::Organic => &mut self.organic,
            EffectKind::Robotic => &mut self.robotic,
            EffectKind::Wooden => &mut self.wooden,
            EffectKind::Stone => &mut self.stone,
        }
    }
}

/// The editor root. Owns the id registry, the effect tree, and the event
/// dispatcher; every structural mutation goes through here so ids stay
/// accounted for.
pub struct Editor {
    kind: String,
    effects: Option<EffectSet>,
    registry: IdRegistry,
    dispatcher: Dispatcher,
    compression: CompressionTier,
}

impl Editor {
    pub fn new() -> Self {
        let mut editor = Self {
            kind: String::new(),
            effects: None,
            registry: IdRegistry::new(),
            dispatcher: Dispatcher::new(),
            compression: CompressionTier::None,
        };
        editor.load_clean();
        editor
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, value: impl Into<String>) {
        self.kind = value.into();
    }

    pub fn compression_level(&self) -> CompressionTier {
        self.compression
    }

    /// Set the tier from a numeric level. Out-of-range input leaves the
    /// current tier unchanged; this is not an error.
    pub fn set_compression_level(&mut self, level: i64) {
        if let Some(tier) = CompressionTier::from_level(level) {
            self.compression = tier;
        }
    }

    /// Whether the tree currently holds any effect kinds. False only in the
    /// degenerate post-`destroy` state.
    pub fn has_elements(&self) -> bool {
        self.effects.is_some()
    }

    /// Tear down the current effect set without firing anything. Failures
    /// are logged; the cascade always visits all four kinds.
    fn teardown_effects(&mut self) {
        let Some(set) = self.effects.take() else { return };
        let effects = [
            ("organic", set.organic),
            ("robotic", set.robotic),
            ("wooden", set.wooden),
            ("stone", set.stone),
        ];
        for (name, effect) in effects {
            if let Err(e) = effect.destroy(&mut self.registry) {
                tracing::error!(error = %e, kind = name, "could not destroy effect");
            }
        }
    }

    /// Best-effort teardown of the whole tree. Clears the kind label and
    /// fires `load`.
    pub fn destroy(&mut self) {
        self.teardown_effects();
        self.kind.clear();
        self.dispatcher.fire(Channel::Load);
    }

    /// Reinitialize all four effects to empty defaults and fire `load`.
    pub fn load_clean(&mut self) {
        self.teardown_effects();
        self.effects = Some(EffectSet::build(&mut self.registry, None));
        self.dispatcher.fire(Channel::Load);
    }

    /// Replace the whole tree from a persisted document.
    ///
    /// Both channels are locked for the duration, so observers see exactly
    /// one `load` notification and never an intermediate state. The returned
    /// error count is reserved for per-field validation and is currently
    /// always 0.
    pub fn load(&mut self, doc: &Value) -> u32 {
        self.dispatcher.lock(Channel::Load);
        self.dispatcher.lock(Channel::Update);
        self.destroy();
        let error_count = 0;

        if let Some(kind) = doc.get("kind") {
            self.kind = coerce::to_string_lossy(kind);
        }
        self.effects = Some(EffectSet::build(&mut self.registry, doc.get("effects")));

        self.dispatcher.unlock(Channel::Load);
        self.dispatcher.unlock(Channel::Update);
        self.dispatcher.fire(Channel::Load);
        error_count
    }

    /// Export the tree as the canonical document, or `None` in the
    /// degenerate state where no effect kinds are registered.
    pub fn output(&self) -> Option<Value> {
        let set = self.effects.as_ref()?;
        let mut effects = Map::new();
        for kind in EffectKind::ALL {
            effects.insert(kind.as_str().into(), set.get(kind).output());
        }
        let mut doc = Map::new();
        doc.insert("kind".into(), Value::String(self.kind.clone()));
        doc.insert("effects".into(), Value::Object(effects));
        Some(Value::Object(doc))
    }

    /// Render the exported document at `override_tier` (or the configured
    /// tier), optionally colorized. `None` output passes through as `None`.
    pub fn print(&self, override_tier: Option<CompressionTier>, colorize: bool) -> Option<String> {
        let doc = self.output()?;
        let tier = override_tier.unwrap_or(self.compression);
        let text = codec::render(&doc, tier);
        Some(if colorize { codec::colorize(&text) } else { text })
    }

    pub fn effect(&self, kind: EffectKind) -> Option<&Effect> {
        self.effects.as_ref().map(|set| set.get(kind))
    }

    pub fn effect_mut(&mut self, kind: EffectKind) -> Option<&mut Effect> {
        self.effects.as_mut().map(|set| set.get_mut(kind))
    }

    pub fn category(&self, kind: EffectKind, trigger: TriggerCategory) -> Option<&Category> {
        self.effect(kind).map(|effect| effect.category(trigger))
    }

    pub fn category_mut(&mut self, kind: EffectKind, trigger: TriggerCategory) -> Option<&mut Category> {
        self.effect_mut(kind).map(|effect| effect.category_mut(trigger))
    }

    pub fn particle_mut(
        &mut self,
        kind: EffectKind,
        trigger: TriggerCategory,
        index: usize,
    ) -> Option<&mut Particle> {
        self.category_mut(kind, trigger)?.particle_mut(index)
    }

    /// Append a particle built from optional initialization parameters.
    /// Returns false in the degenerate no-effects state.
    pub fn add_particle(
        &mut self,
        kind: EffectKind,
        trigger: TriggerCategory,
        params: Option<&Value>,
    ) -> bool {
        let Some(set) = self.effects.as_mut() else {
            return false;
        };
        set.get_mut(kind)
            .category_mut(trigger)
            .add_particle(&mut self.registry, params);
        true
    }

    /// Remove a particle by index, releasing its id. Returns false when
    /// there is no such particle.
    pub fn remove_particle(&mut self, kind: EffectKind, trigger: TriggerCategory, index: usize) -> bool {
        let Some(set) = self.effects.as_mut() else {
            return false;
        };
        set.get_mut(kind)
            .category_mut(trigger)
            .remove_particle(&mut self.registry, index)
    }

    /// Register a listener on `channel`. `count` limits how many
    /// notifications it receives; -1 means unlimited.
    pub fn add_event_listener(
        &mut self,
        channel: Channel,
        callback: impl FnMut() -> Result<(), BoxError> + 'static,
        count: i64,
    ) -> ListenerId {
        self.dispatcher.add(channel, Box::new(callback), count)
    }

    /// Unregister a listener. Returns false when the token is not (or no
    /// longer) registered on the channel.
    pub fn remove_event_listener(&mut self, channel: Channel, id: ListenerId) -> bool {
        self.dispatcher.remove(channel, id)
    }

    /// Explicit trigger for the `update` channel. Nothing in the core calls
    /// this; hosts that mutate entities in place fire it themselves.
    pub fn fire_update(&mut self) {
        self.dispatcher.fire(Channel::Update);
    }

    pub fn registry(&self) -> &IdRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut IdRegistry {
        &mut self.registry
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
