//! Component intermediate representation and emitted artifacts.

use crate::script::guard_script;

/// Identifier used when a source path does not yield a component name.
pub const FALLBACK_IDENTIFIER: &str = "Component";

/// Declared props: prop name -> type name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropSchema {
    entries: Vec<(String, String)>,
}

impl PropSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prop declaration.
    pub fn push(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.entries.push((name.into(), type_name.into()));
    }

    /// Iterate over `(name, type)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    /// Declared prop names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for PropSchema {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, t)| (n.into(), t.into()))
                .collect(),
        }
    }
}

/// A compiled, framework-agnostic component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentIr {
    /// Compiled markup, not yet normalized for any dialect
    pub markup: String,

    /// First aggregated stylesheet
    pub styles: Option<String>,

    /// Aggregated client script
    pub script: Option<String>,

    /// Whether the component carries a client script that needs wiring
    pub interactive: bool,

    /// PascalCase component name (never empty)
    pub identifier: String,

    /// Lowercase tag name, absent when the name could not be derived
    pub tag: Option<String>,

    /// Declared prop schema
    pub props: Option<PropSchema>,
}

impl ComponentIr {
    /// Create a static component with the fallback identifier.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            styles: None,
            script: None,
            interactive: false,
            identifier: FALLBACK_IDENTIFIER.to_string(),
            tag: None,
            props: None,
        }
    }

    /// Set identifier and tag. An empty identifier falls back to `Component`.
    pub fn with_name(mut self, identifier: impl Into<String>, tag: Option<String>) -> Self {
        let identifier = identifier.into();
        self.identifier = if identifier.is_empty() {
            FALLBACK_IDENTIFIER.to_string()
        } else {
            identifier
        };
        self.tag = tag;
        self
    }

    pub fn with_styles(mut self, styles: Option<String>) -> Self {
        self.styles = styles;
        self
    }

    /// Attach the client script. Interactivity follows script presence.
    pub fn with_script(mut self, script: Option<String>) -> Self {
        self.interactive = script.is_some();
        self.script = script;
        self
    }

    pub fn with_props(mut self, props: Option<PropSchema>) -> Self {
        self.props = props;
        self
    }

    /// Whether the root tag gets a binding and the component holds an element handle.
    ///
    /// Requires both the interactive flag and a derived tag.
    pub fn is_wired(&self) -> bool {
        self.interactive && self.tag.is_some()
    }
}

/// Fixed file names a target writes into a component directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFiles {
    /// Component source file (e.g., "index.tsx")
    pub component: &'static str,

    /// Stylesheet sidecar
    pub styles: &'static str,

    /// Client script sidecar
    pub script: &'static str,
}

impl TargetFiles {
    /// File names with the shared stylesheet and script sidecars.
    pub const fn with_component(component: &'static str) -> Self {
        Self {
            component,
            styles: "index.css",
            script: "web-component.js",
        }
    }
}

/// Output of a target emitter, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedArtifact {
    /// Full component source for the target framework
    pub source: String,

    /// Verbatim stylesheet text
    pub styles: Option<String>,

    /// Client script wrapped in the runtime guard
    pub script: Option<String>,

    /// Component identifier, names the output directory
    pub identifier: String,

    /// File names for this target
    pub files: TargetFiles,
}

impl EmittedArtifact {
    /// Assemble an artifact from rendered source and the IR's sidecars.
    pub fn from_ir(ir: &ComponentIr, source: String, files: TargetFiles) -> Self {
        Self {
            source,
            styles: ir.styles.clone(),
            script: ir.script.as_deref().map(guard_script),
            identifier: ir.identifier.clone(),
            files,
        }
    }
}
