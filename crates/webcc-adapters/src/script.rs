//! Runtime guard for client scripts.

/// Wrap a client script so it only runs where custom elements are available.
///
/// The script text is embedded verbatim.
pub fn guard_script(script: &str) -> String {
    format!(
        r#"if (typeof window !== "undefined" && ("customElements" in window)) {{
{script}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_script_verbatim() {
        let script = "customElements.define(\"x-greet\", XGreet);";
        let guarded = guard_script(script);

        assert!(guarded.starts_with(
            "if (typeof window !== \"undefined\" && (\"customElements\" in window)) {"
        ));
        assert!(guarded.contains(script));
        assert!(guarded.ends_with("}\n"));
    }

    #[test]
    fn keeps_multiline_scripts_intact() {
        let script = "class A extends HTMLElement {\n  connectedCallback() {}\n}";
        assert!(guard_script(script).contains(script));
    }
}
