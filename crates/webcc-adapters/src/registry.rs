//! Emitter registry for looking up targets by name.

use crate::astro::AstroEmitter;
use crate::ir::{ComponentIr, EmittedArtifact};
use crate::jsx::JsxEmitter;
use crate::traits::{EmitError, TargetEmitter};
use crate::vue::VueEmitter;

/// A registry of target emitters keyed by name.
pub struct EmitterRegistry {
    emitters: Vec<Box<dyn TargetEmitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
        }
    }

    /// Create a registry with the built-in targets.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsxEmitter::react());
        registry.register(AstroEmitter::new());
        registry.register(JsxEmitter::preact());
        registry.register(VueEmitter::new());
        registry
    }

    /// Register an emitter, replacing any with the same name.
    pub fn register(&mut self, emitter: impl TargetEmitter + 'static) {
        self.emitters.retain(|e| e.name() != emitter.name());
        self.emitters.push(Box::new(emitter));
    }

    /// Look up an emitter by target name (case-insensitive).
    pub fn get(&self, target: &str) -> Result<&dyn TargetEmitter, EmitError> {
        let target_lower = target.to_lowercase();
        self.emitters
            .iter()
            .find(|e| e.name() == target_lower)
            .map(|e| e.as_ref())
            .ok_or_else(|| EmitError::UnsupportedTarget {
                target: target.to_string(),
                supported: self.names(),
            })
    }

    /// Check if a target is registered.
    pub fn contains(&self, target: &str) -> bool {
        self.get(target).is_ok()
    }

    /// Registered target names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.emitters.iter().map(|e| e.name()).collect()
    }

    /// Registered emitters in registration order.
    pub fn emitters(&self) -> impl Iterator<Item = &dyn TargetEmitter> {
        self.emitters.iter().map(|e| e.as_ref())
    }

    /// Emit a component for the named target.
    pub fn emit(&self, target: &str, ir: &ComponentIr) -> Result<EmittedArtifact, EmitError> {
        self.get(target)?.emit(ir)
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
