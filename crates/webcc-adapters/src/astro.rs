//! Astro component emitter.

use crate::ir::{ComponentIr, EmittedArtifact, TargetFiles};
use crate::markup::{normalize, Dialect};
use crate::props;
use crate::templates::{engine, ComponentContext};
use crate::traits::{EmitError, TargetEmitter};

/// Emits an `.astro` file: frontmatter script, template, client script.
#[derive(Debug, Default, Clone)]
pub struct AstroEmitter;

impl AstroEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TargetEmitter for AstroEmitter {
    fn name(&self) -> &'static str {
        "astro"
    }

    fn display_name(&self) -> &'static str {
        "Astro"
    }

    fn files(&self) -> TargetFiles {
        TargetFiles::with_component("index.astro")
    }

    fn emit(&self, ir: &ComponentIr) -> Result<EmittedArtifact, EmitError> {
        let context = ComponentContext {
            identifier: &ir.identifier,
            markup: normalize(&ir.markup, ir.tag.as_deref(), ir.interactive, &Dialect::ASTRO),
            styles: ir.styles.is_some(),
            script: ir.script.is_some(),
            wired: ir.is_wired(),
            props: props::format(ir.props.as_ref()),
            // The handle comes from the DOM, not a framework module.
            handle_module: "",
        };

        let source = engine()
            .render(self.name(), &context)
            .map_err(|e| EmitError::Template(e.to_string()))?;

        Ok(EmittedArtifact::from_ir(ir, source, self.files()))
    }
}
