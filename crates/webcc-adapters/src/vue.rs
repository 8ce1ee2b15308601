//! Vue single-file component emitter.

use crate::ir::{ComponentIr, EmittedArtifact, TargetFiles};
use crate::markup::{normalize, Dialect};
use crate::props;
use crate::templates::{engine, ComponentContext};
use crate::traits::{EmitError, TargetEmitter};

/// Emits a `.vue` file with script, template and style regions.
#[derive(Debug, Default, Clone)]
pub struct VueEmitter;

impl VueEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TargetEmitter for VueEmitter {
    fn name(&self) -> &'static str {
        "vue"
    }

    fn display_name(&self) -> &'static str {
        "Vue"
    }

    fn files(&self) -> TargetFiles {
        TargetFiles::with_component("index.vue")
    }

    fn placeholder(&self, prop: &str) -> String {
        format!("{{{{ {} }}}}", prop)
    }

    fn emit(&self, ir: &ComponentIr) -> Result<EmittedArtifact, EmitError> {
        let wired = ir.is_wired();
        let context = ComponentContext {
            identifier: &ir.identifier,
            markup: normalize(&ir.markup, ir.tag.as_deref(), ir.interactive, &Dialect::VUE),
            styles: ir.styles.is_some(),
            script: ir.script.is_some(),
            wired,
            props: props::format(ir.props.as_ref()),
            handle_module: "vue",
        };

        let source = engine()
            .render(self.name(), &context)
            .map_err(|e| EmitError::Template(e.to_string()))?;

        Ok(EmittedArtifact::from_ir(ir, source, self.files()))
    }
}
