//! Template compiler contract and the built-in bundler-mode compiler.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Prop name -> markup placeholder expression.
pub type PlaceholderData = Vec<(String, String)>;

/// Output of compiling one source component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledTemplate {
    /// Markup with style and script blocks removed
    pub markup: String,

    /// Aggregated stylesheets, in source order
    pub stylesheets: Vec<String>,

    /// Aggregated client scripts, in source order
    pub scripts: Vec<String>,

    /// Component sources that took part in the compilation
    pub resolved_components: Vec<PathBuf>,
}

/// Errors that can occur while compiling a component.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Failed to read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read props file {}: {source}", .path.display())]
    PropsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse props file {}: {message}", .path.display())]
    PropsParse { path: PathBuf, message: String },

    #[error("Failed to compile {}: {message}", .path.display())]
    Template { path: PathBuf, message: String },
}

/// Compiles source component text into markup plus aggregated assets.
pub trait TemplateCompiler: Send + Sync {
    /// Compile already-read source content.
    ///
    /// # Arguments
    /// * `path` - Path of the source component
    /// * `content` - Source text
    /// * `data` - Placeholders to substitute for declared props
    fn compile(
        &self,
        path: &Path,
        content: &str,
        data: Option<&PlaceholderData>,
    ) -> Result<CompiledTemplate, CompileError>;
}

/// Bundler-mode compiler: hoists `<style>` and `<script>` blocks out of the
/// markup and substitutes `{{ prop }}` tokens.
#[derive(Debug, Default, Clone)]
pub struct BundleCompiler;

static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>(.*?)</style>").expect("Invalid style block regex")
});

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>").expect("Invalid script block regex")
});

static OPEN_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(style|script)(?:[\s/>]|$)").expect("Invalid open block regex")
});

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_$][\w$]*)\s*\}\}").expect("Invalid placeholder regex")
});

impl BundleCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCompiler for BundleCompiler {
    fn compile(
        &self,
        path: &Path,
        content: &str,
        data: Option<&PlaceholderData>,
    ) -> Result<CompiledTemplate, CompileError> {
        let stylesheets = extract_blocks(&STYLE_RE, content);
        let scripts = extract_blocks(&SCRIPT_RE, content);

        let markup = STYLE_RE.replace_all(content, "");
        let markup = SCRIPT_RE.replace_all(&markup, "");

        if let Some(open) = OPEN_BLOCK_RE.captures(&markup) {
            return Err(CompileError::Template {
                path: path.to_path_buf(),
                message: format!("unterminated <{}> block", open[1].to_lowercase()),
            });
        }

        let markup = match data {
            Some(data) => substitute(&markup, data),
            None => markup.into_owned(),
        };

        Ok(CompiledTemplate {
            markup,
            stylesheets,
            scripts,
            resolved_components: vec![path.to_path_buf()],
        })
    }
}

/// Collect trimmed, non-empty block bodies.
fn extract_blocks(re: &Regex, content: &str) -> Vec<String> {
    re.captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Replace `{{ name }}` tokens for known props; unknown tokens stay as written.
fn substitute(markup: &str, data: &PlaceholderData) -> String {
    PLACEHOLDER_RE
        .replace_all(markup, |caps: &Captures| {
            let name = &caps[1];
            data.iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
