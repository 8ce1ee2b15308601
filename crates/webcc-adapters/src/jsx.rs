//! JSX function-component emitters (React, Preact).

use crate::ir::{ComponentIr, EmittedArtifact, TargetFiles};
use crate::markup::{normalize, Dialect};
use crate::props;
use crate::templates::{engine, ComponentContext};
use crate::traits::{EmitError, TargetEmitter};

/// Emits a function component returning a JSX fragment.
#[derive(Debug, Clone)]
pub struct JsxEmitter {
    name: &'static str,
    display_name: &'static str,
    dialect: Dialect,
    handle_module: &'static str,
}

impl JsxEmitter {
    /// React: `className=`, `useRef` from "react".
    pub fn react() -> Self {
        Self {
            name: "react",
            display_name: "React",
            dialect: Dialect::REACT,
            handle_module: "react",
        }
    }

    /// Preact: `class=`, `useRef` from "preact/hooks".
    pub fn preact() -> Self {
        Self {
            name: "preact",
            display_name: "Preact",
            dialect: Dialect::PREACT,
            handle_module: "preact/hooks",
        }
    }
}

impl TargetEmitter for JsxEmitter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn files(&self) -> TargetFiles {
        TargetFiles::with_component("index.tsx")
    }

    fn emit(&self, ir: &ComponentIr) -> Result<EmittedArtifact, EmitError> {
        let wired = ir.is_wired();
        let context = ComponentContext {
            identifier: &ir.identifier,
            markup: normalize(&ir.markup, ir.tag.as_deref(), ir.interactive, &self.dialect),
            styles: ir.styles.is_some(),
            script: ir.script.is_some(),
            wired,
            props: props::format(ir.props.as_ref()),
            handle_module: self.handle_module,
        };

        let source = engine()
            .render(self.name, &context)
            .map_err(|e| EmitError::Template(e.to_string()))?;

        Ok(EmittedArtifact::from_ir(ir, source, self.files()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::PropSchema;
    use pretty_assertions::assert_eq;

    fn greeting() -> ComponentIr {
        ComponentIr::new("<my-greeting><p>Hello</p></my-greeting>")
            .with_name("MyGreeting", Some("my-greeting".to_string()))
            .with_script(Some(
                "customElements.define(\"my-greeting\", MyGreeting);".to_string(),
            ))
    }

    #[test]
    fn emits_static_component() {
        let ir = ComponentIr::new("<p>Hi</p>").with_name("Hero", Some("hero".to_string()));
        let artifact = JsxEmitter::react().emit(&ir).unwrap();

        assert!(artifact.source.contains("export const Hero = () => {"));
        assert!(artifact.source.contains("export default Hero;"));
        assert!(artifact.source.contains("<p>Hi</p>"));
        assert!(!artifact.source.contains("className"));
        assert!(!artifact.source.contains("import"));
        assert_eq!(artifact.styles, None);
        assert_eq!(artifact.script, None);
        assert_eq!(artifact.identifier, "Hero");
        assert_eq!(artifact.files.component, "index.tsx");
    }

    #[test]
    fn imports_styles_when_present() {
        let ir = ComponentIr::new(r#"<h1 class="title">Hi</h1>"#)
            .with_name("Hero", Some("hero".to_string()))
            .with_styles(Some(".title { color: red; }".to_string()));
        let artifact = JsxEmitter::react().emit(&ir).unwrap();

        assert!(artifact.source.contains(r#"import "./index.css";"#));
        assert!(artifact.source.contains(r#"<h1 className="title">Hi</h1>"#));
        assert_eq!(artifact.styles.as_deref(), Some(".title { color: red; }"));
    }

    #[test]
    fn wires_interactive_component() {
        let artifact = JsxEmitter::react().emit(&greeting()).unwrap();

        assert!(artifact.source.contains(r#"import "./web-component.js";"#));
        assert!(artifact.source.contains(r#"import { useRef } from "react";"#));
        assert!(artifact.source.contains("const wc = useRef(null);"));
        assert!(artifact
            .source
            .contains("<my-greeting ref={wc}><p>Hello</p></my-greeting>"));

        let script = artifact.script.unwrap();
        assert!(script.contains("(\"customElements\" in window)"));
        assert!(script.contains("customElements.define(\"my-greeting\", MyGreeting);"));
    }

    #[test]
    fn untagged_script_imports_runtime_without_wiring() {
        let ir = ComponentIr::new("<div>x</div>").with_script(Some("run();".to_string()));
        let artifact = JsxEmitter::react().emit(&ir).unwrap();

        assert!(artifact.source.contains("export const Component = () => {"));
        assert!(artifact.source.contains(r#"import "./web-component.js";"#));
        assert!(!artifact.source.contains("useRef"));
        assert!(!artifact.source.contains("ref={wc}"));
        assert!(artifact.script.is_some());
    }

    #[test]
    fn emits_typed_props() {
        let schema: PropSchema = [("name", "string"), ("count", "number")]
            .into_iter()
            .collect();
        let ir = ComponentIr::new("<p>{name}</p>")
            .with_name("Greet", Some("greet".to_string()))
            .with_props(Some(schema));
        let artifact = JsxEmitter::react().emit(&ir).unwrap();

        assert!(artifact
            .source
            .contains("type GreetProps = {name: string; count: number;};"));
        assert!(artifact
            .source
            .contains("export const Greet = ({ name, count }: GreetProps) => {"));
    }

    #[test]
    fn placeholders_are_jsx_expressions() {
        assert_eq!(JsxEmitter::react().placeholder("name"), "{name}");
    }

    #[test]
    fn preact_keeps_class_and_uses_hooks_module() {
        let ir = greeting().with_styles(Some("p {}".to_string()));
        let ir = ComponentIr {
            markup: r#"<my-greeting><p class="x">Hello</p></my-greeting>"#.to_string(),
            ..ir
        };
        let artifact = JsxEmitter::preact().emit(&ir).unwrap();

        assert!(artifact.source.contains(r#"<p class="x">"#));
        assert!(artifact
            .source
            .contains(r#"import { useRef } from "preact/hooks";"#));
        assert!(artifact.source.contains("<my-greeting ref={wc}>"));
    }
}
