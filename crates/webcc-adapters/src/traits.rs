//! Trait definitions for target emitters.

use crate::ir::{ComponentIr, EmittedArtifact, TargetFiles};

/// Errors that can occur during emission.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Unsupported target '{target}' (supported: {})", .supported.join(", "))]
    UnsupportedTarget {
        target: String,
        supported: Vec<&'static str>,
    },

    #[error("Template error: {0}")]
    Template(String),
}

/// Trait for framework-specific emitters.
pub trait TargetEmitter: Send + Sync {
    /// Target identifier used for lookup (e.g., "react", "vue")
    fn name(&self) -> &'static str;

    /// Human-readable framework name (e.g., "React")
    fn display_name(&self) -> &'static str;

    /// Files written for a component of this target
    fn files(&self) -> TargetFiles;

    /// Expression the markup uses to render a prop value.
    fn placeholder(&self, prop: &str) -> String {
        format!("{{{}}}", prop)
    }

    /// Turn a compiled component into target source plus sidecars.
    fn emit(&self, ir: &ComponentIr) -> Result<EmittedArtifact, EmitError>;
}
