//! Compile command.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use tokio::task::JoinSet;
use webcc_adapters::{ComponentIr, EmittedArtifact, EmitterRegistry};
use webcc_compiler::{
    compile_component, component_identifier, discover_sources, BundleCompiler, TemplateCompiler,
};
use webcc_output::{ArtifactWriter, WrittenArtifact};

use crate::config::ConfigFile;

#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Target framework to compile the WebC component to
    pub target: Option<String>,

    /// Path to the WebC component, or a directory of components
    #[arg(short, long)]
    pub source: PathBuf,

    /// Path to the output directory to write files to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the component's props JSON schema file
    #[arg(short, long)]
    pub props: Option<PathBuf>,

    /// Dry run: print the compiled parts instead of writing files
    #[arg(short, long)]
    pub debug: bool,
}

/// How a compile run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Components written
    Compiled(usize),
    /// Components compiled and printed only
    DryRun(usize),
    /// Target not registered; nothing compiled or written
    UnsupportedTarget,
}

/// Run the compile command.
pub async fn run(args: CompileArgs, config: &ConfigFile) -> Result<Outcome> {
    let target = args
        .target
        .clone()
        .or_else(|| config.compile.target.clone())
        .context("No target given. Pass one (e.g. `webcc compile react`) or set [compile] target")?;

    let registry = Arc::new(EmitterRegistry::default());
    let emitter = match registry.get(&target) {
        Ok(emitter) => emitter,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", unsupported_message(&registry));
            return Ok(Outcome::UnsupportedTarget);
        }
    };

    let sources = if args.source.is_dir() {
        if args.props.is_some() {
            anyhow::bail!("--props applies to a single component, not a directory of sources");
        }
        discover_sources(&args.source)?
    } else {
        vec![args.source.clone()]
    };

    let compiler: Arc<dyn TemplateCompiler> = Arc::new(BundleCompiler::new());

    if args.debug {
        for source in &sources {
            tracing::info!("Debugging [{}]", source.display());
            let ir = compile_component(compiler.as_ref(), source, args.props.as_deref(), |p| {
                emitter.placeholder(p)
            })
            .await?;
            let artifact = emitter.emit(&ir)?;
            println!("{}", debug_dump(&ir, &artifact, emitter.display_name()));
        }
        return Ok(Outcome::DryRun(sources.len()));
    }

    let output = args
        .output
        .clone()
        .or_else(|| config.compile.output.clone())
        .context("--output is required unless --debug is set")?;

    ensure_distinct_outputs(&sources)?;

    tracing::info!(
        "Compiling {} component(s) to {}...",
        sources.len(),
        emitter.display_name()
    );

    let total = sources.len();
    let mut tasks = JoinSet::new();
    for source in sources {
        let registry = Arc::clone(&registry);
        let compiler = Arc::clone(&compiler);
        let target = target.clone();
        let props = args.props.clone();
        let output = output.clone();

        tasks.spawn(async move {
            let result = compile_one(
                compiler.as_ref(),
                &registry,
                &target,
                &source,
                props.as_deref(),
                &output,
            )
            .await;
            (source, result)
        });
    }

    let mut failures = 0;
    while let Some(joined) = tasks.join_next().await {
        let (source, result) = joined.context("Compilation task panicked")?;
        match result {
            Ok(written) => {
                tracing::info!("{} -> {}", source.display(), written.dir.display());
            }
            Err(e) => {
                tracing::error!("Failed to compile {}: {:#}", source.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} component(s) failed to compile", failures, total);
    }

    tracing::info!("WebC to {} compilation successful!", emitter.display_name());
    Ok(Outcome::Compiled(total))
}

/// Fail when two sources would write the same component directory.
fn ensure_distinct_outputs(sources: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<String, &PathBuf> = HashMap::new();
    for source in sources {
        let identifier = component_identifier(source);
        if let Some(first) = seen.get(&identifier) {
            anyhow::bail!(
                "{} and {} both compile to component {}; rename one of them",
                first.display(),
                source.display(),
                identifier
            );
        }
        seen.insert(identifier, source);
    }
    Ok(())
}

/// Compile, emit and write a single component.
async fn compile_one(
    compiler: &dyn TemplateCompiler,
    registry: &EmitterRegistry,
    target: &str,
    source: &Path,
    props: Option<&Path>,
    output: &Path,
) -> Result<WrittenArtifact> {
    let emitter = registry.get(target)?;
    let ir = compile_component(compiler, source, props, |p| emitter.placeholder(p)).await?;
    let artifact = emitter.emit(&ir)?;
    let written = ArtifactWriter::new()
        .write(&artifact, output)
        .await
        .with_context(|| format!("Failed to write {}", ir.identifier))?;
    Ok(written)
}

/// Message listing the supported targets.
fn unsupported_message(registry: &EmitterRegistry) -> String {
    let targets = registry
        .emitters()
        .map(|e| format!("- {}", e.display_name()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Sorry, webcc currently only supports the following targets:\n{}",
        targets
    )
}

/// Intermediate parts and emitted source for a dry run.
fn debug_dump(ir: &ComponentIr, artifact: &EmittedArtifact, framework: &str) -> String {
    let js = ir.script.as_deref().unwrap_or("No JavaScript");
    let css = ir.styles.as_deref().unwrap_or("No CSS");

    format!(
        "----HTML----\n{}\n-----JS-----\n{}\n----CSS-----\n{}\n{:-^12}\n{}\n------------",
        ir.markup,
        js,
        css,
        framework.to_uppercase(),
        artifact.source
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(target: &str, source: PathBuf, output: Option<PathBuf>) -> CompileArgs {
        CompileArgs {
            target: Some(target.to_string()),
            source,
            output,
            props: None,
            debug: false,
        }
    }

    const GREETING: &str = r#"<p>Hello</p>
<script>
  class MyGreeting extends HTMLElement {}
  customElements.define("my-greeting", MyGreeting);
</script>
"#;

    #[tokio::test]
    async fn unsupported_target_touches_nothing() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("hero.webc");
        fs::write(&source, "<p>Hi</p>").unwrap();
        let output = temp.path().join("out");

        let outcome = run(
            args("svelte", source, Some(output.clone())),
            &ConfigFile::default(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::UnsupportedTarget);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn compiles_interactive_component() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("my-greeting.webc");
        fs::write(&source, GREETING).unwrap();
        let output = temp.path().join("out");

        let outcome = run(
            args("React", source, Some(output.clone())),
            &ConfigFile::default(),
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Compiled(1));

        let dir = output.join("components").join("MyGreeting");
        let component = fs::read_to_string(dir.join("index.tsx")).unwrap();
        assert!(component.contains("<my-greeting ref={wc}>"));
        assert!(component.contains("export default MyGreeting;"));

        let script = fs::read_to_string(dir.join("web-component.js")).unwrap();
        assert!(script.contains("(\"customElements\" in window)"));
        assert!(script.contains("customElements.define(\"my-greeting\", MyGreeting);"));
        assert!(!dir.join("index.css").exists());
    }

    #[tokio::test]
    async fn compiles_directory_batch() {
        let temp = tempdir().unwrap();
        let components = temp.path().join("components");
        fs::create_dir_all(&components).unwrap();
        fs::write(components.join("hero.webc"), "<h1 class=\"big\">Hi</h1>").unwrap();
        fs::write(components.join("site-footer.webc"), "<footer></footer>").unwrap();
        let output = temp.path().join("out");

        let outcome = run(
            args("vue", components, Some(output.clone())),
            &ConfigFile::default(),
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Compiled(2));

        assert!(output.join("components/Hero/index.vue").exists());
        assert!(output.join("components/SiteFooter/index.vue").exists());
    }

    #[tokio::test]
    async fn rejects_sources_sharing_an_identifier() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("a")).unwrap();
        fs::create_dir_all(src.join("b")).unwrap();
        fs::write(src.join("a/card.webc"), "<p>FROM_A</p>").unwrap();
        fs::write(src.join("b/card.webc"), "<p>FROM_B</p>").unwrap();
        let output = temp.path().join("out");

        let err = run(args("react", src, Some(output.clone())), &ConfigFile::default())
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("a/card.webc"));
        assert!(err.contains("b/card.webc"));
        assert!(err.contains("Card"));
        assert!(!output.exists());
    }

    #[test]
    fn fallback_identifiers_collide() {
        let sources = vec![PathBuf::from("x/.webc"), PathBuf::from("y/.webc")];
        let err = ensure_distinct_outputs(&sources).unwrap_err().to_string();
        assert!(err.contains("Component"));

        let distinct = vec![PathBuf::from("x/hero.webc"), PathBuf::from("x/site-footer.webc")];
        assert!(ensure_distinct_outputs(&distinct).is_ok());
    }

    #[tokio::test]
    async fn compiles_astro_component() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("my-greeting.webc");
        fs::write(&source, GREETING).unwrap();
        let output = temp.path().join("out");

        let outcome = run(
            args("astro", source, Some(output.clone())),
            &ConfigFile::default(),
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Compiled(1));

        let dir = output.join("components").join("MyGreeting");
        let component = fs::read_to_string(dir.join("index.astro")).unwrap();
        assert!(component.contains("<my-greeting data-wc>"));
        assert!(component.contains(r#"import "./web-component.js";"#));
        assert!(dir.join("web-component.js").exists());
    }

    #[tokio::test]
    async fn falls_back_to_configured_output_and_target() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("hero.webc");
        fs::write(&source, "<p>Hi</p>").unwrap();

        let mut config = ConfigFile::default();
        config.compile.output = Some(temp.path().join("dist"));
        config.compile.target = Some("preact".to_string());

        let compile_args = CompileArgs {
            target: None,
            ..args("unused", source, None)
        };
        let outcome = run(compile_args, &config).await.unwrap();

        assert_eq!(outcome, Outcome::Compiled(1));
        assert!(temp.path().join("dist/components/Hero/index.tsx").exists());
    }

    #[tokio::test]
    async fn requires_output_unless_debug() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("hero.webc");
        fs::write(&source, "<p>Hi</p>").unwrap();

        let result = run(args("react", source.clone(), None), &ConfigFile::default()).await;
        assert!(result.is_err());

        let dry = CompileArgs {
            debug: true,
            ..args("react", source, None)
        };
        let outcome = run(dry, &ConfigFile::default()).await.unwrap();
        assert_eq!(outcome, Outcome::DryRun(1));
    }

    #[test]
    fn lists_supported_targets() {
        let message = unsupported_message(&EmitterRegistry::default());
        assert!(message.ends_with("- React\n- Astro\n- Preact\n- Vue"));
    }

    #[test]
    fn dump_labels_missing_parts() {
        let ir = ComponentIr::new("<p>Hi</p>").with_name("Hero", Some("hero".to_string()));
        let artifact = EmitterRegistry::default().emit("react", &ir).unwrap();

        let dump = debug_dump(&ir, &artifact, "React");
        assert!(dump.contains("No JavaScript"));
        assert!(dump.contains("No CSS"));
        assert!(dump.contains("---REACT----"));
    }
}
