//! Source component -> IR.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use webcc_adapters::{derive, ComponentIr, DerivedName, PropSchema, FALLBACK_IDENTIFIER};

use crate::compiler::{CompileError, CompiledTemplate, TemplateCompiler};
use crate::props::{load_props, placeholders};

/// Source file extension for WebC components.
pub const SOURCE_EXTENSION: &str = "webc";

/// Marker for a script that registers a custom element.
const DEFINE_CALL: &str = "customElements.define";

/// Assemble the IR from a compiled template.
///
/// The component is interactive exactly when the aggregated script is
/// non-empty. A script that registers a custom element gets its markup
/// wrapped in the component's own tag so the element can upgrade.
pub fn build_ir(path: &Path, compiled: CompiledTemplate, props: Option<PropSchema>) -> ComponentIr {
    let name = derive_path(path);
    if name.is_none() {
        tracing::debug!(
            "No component name in {}, falling back to {}",
            path.display(),
            FALLBACK_IDENTIFIER
        );
    }

    let styles = compiled
        .stylesheets
        .first()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let script = Some(compiled.scripts.join("\n").trim().to_string()).filter(|s| !s.is_empty());

    let mut markup = compiled.markup.trim().to_string();

    let ir = match name {
        Some(name) => {
            if script.as_deref().is_some_and(|s| s.contains(DEFINE_CALL)) {
                markup = format!("<{tag}>\n  {markup}\n</{tag}>", tag = name.tag);
            }
            ComponentIr::new(markup).with_name(name.identifier, Some(name.tag))
        }
        None => ComponentIr::new(markup),
    };

    ir.with_styles(styles).with_script(script).with_props(props)
}

/// Identifier a source path compiles to, and so its output directory name.
pub fn component_identifier(path: &Path) -> String {
    derive_path(path)
        .map(|name| name.identifier)
        .unwrap_or_else(|| FALLBACK_IDENTIFIER.to_string())
}

fn derive_path(path: &Path) -> Option<DerivedName> {
    derive(&path.to_string_lossy().replace('\\', "/"))
}

/// Read, compile and assemble one component.
///
/// `placeholder` renders a prop as a markup expression for the chosen target.
pub async fn compile_component<F>(
    compiler: &dyn TemplateCompiler,
    source: &Path,
    props_path: Option<&Path>,
    placeholder: F,
) -> Result<ComponentIr, CompileError>
where
    F: Fn(&str) -> String,
{
    let content = tokio::fs::read_to_string(source)
        .await
        .map_err(|e| CompileError::SourceRead {
            path: source.to_path_buf(),
            source: e,
        })?;

    let props = match props_path {
        Some(path) => Some(load_props(path).await?),
        None => None,
    };

    let data = props.as_ref().map(|p| placeholders(p, &placeholder));
    let compiled = compiler.compile(source, &content, data.as_ref())?;

    tracing::debug!(
        "Compiled {} ({} stylesheets, {} scripts)",
        source.display(),
        compiled.stylesheets.len(),
        compiled.scripts.len()
    );

    Ok(build_ir(source, compiled, props))
}

/// Find every component source below a directory, sorted by path.
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    if !dir.is_dir() {
        return Err(CompileError::SourceRead {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut sources: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION))
        .collect();

    sources.sort();
    Ok(sources)
}
