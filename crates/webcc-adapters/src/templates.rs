//! Named component templates, one per target.

use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::props::FormattedProps;

/// Values a component template is rendered with.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentContext<'a> {
    /// Component identifier
    pub identifier: &'a str,
    /// Markup already normalized for the target dialect
    pub markup: String,
    /// Whether a stylesheet sidecar exists
    pub styles: bool,
    /// Whether a script sidecar exists
    pub script: bool,
    /// Whether the root element is bound to a handle
    pub wired: bool,
    /// Formatted prop schema
    pub props: Option<FormattedProps>,
    /// Module providing the element handle primitive
    pub handle_module: &'a str,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with every target template registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        // Output is source code, not HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template("react", JSX_TEMPLATE)
            .expect("Failed to add react template");
        env.add_template("astro", ASTRO_TEMPLATE)
            .expect("Failed to add astro template");
        env.add_template("preact", JSX_TEMPLATE)
            .expect("Failed to add preact template");
        env.add_template("vue", VUE_TEMPLATE)
            .expect("Failed to add vue template");

        Self { env }
    }

    /// Render the named target template.
    pub fn render(&self, target: &str, context: &ComponentContext) -> Result<String, minijinja::Error> {
        self.env.get_template(target)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared engine instance.
pub fn engine() -> &'static TemplateEngine {
    static ENGINE: LazyLock<TemplateEngine> = LazyLock::new(TemplateEngine::new);
    &ENGINE
}

const JSX_TEMPLATE: &str = r#"// This component was auto-generated from a WebC template
{% if styles %}
import "./index.css";
{% endif %}
{% if script %}
import "./web-component.js";
{% endif %}
{% if wired %}
import { useRef } from "{{ handle_module }}";
{% endif %}
{% if props %}

type {{ identifier }}Props = {{ props.type_decl }};
{% endif %}

export const {{ identifier }} = ({% if props %}{{ props.param_pattern }}: {{ identifier }}Props{% endif %}) => {
{% if wired %}
  const wc = useRef(null);

{% endif %}
  return (
    <>
      {{ markup }}
    </>
  );
};

export default {{ identifier }};
"#;

const ASTRO_TEMPLATE: &str = r#"---
// This component was auto-generated from a WebC template
{% if styles %}
import "./index.css";
{% endif %}
{% if props %}

type {{ identifier }}Props = {{ props.type_decl }};
const {{ props.param_pattern }} = Astro.props as {{ identifier }}Props;
{% endif %}
---

{{ markup }}
{% if script %}

<script>
  import "./web-component.js";
{% if wired %}

  const wc = document.querySelector("[data-wc]");
{% endif %}
</script>
{% endif %}
"#;

const VUE_TEMPLATE: &str = r#"<!-- This component was auto-generated from a WebC template -->
<script setup lang="ts">
{% if script %}
import "./web-component.js";
{% endif %}
{% if wired %}
import { ref } from "{{ handle_module }}";
{% endif %}

defineOptions({ name: "{{ identifier }}" });
{% if props %}

type {{ identifier }}Props = {{ props.type_decl }};
const {{ props.param_pattern }} = defineProps<{{ identifier }}Props>();
{% endif %}
{% if wired %}

const wc = ref(null);
{% endif %}
</script>

<template>
  {{ markup }}
</template>
{% if styles %}

<style src="./index.css"></style>
{% endif %}
"#;
