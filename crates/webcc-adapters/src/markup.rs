//! Markup normalization for target templating dialects.
//!
//! Both rewrites are plain substring replacements over the whole fragment.
//! They do not parse markup, so a `class=` inside text content or another
//! attribute value is rewritten too. Input is compiler output, not
//! arbitrary user text.

/// Attribute spellings for a target's templating dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Replacement for the `class=` attribute key
    pub class_attr: &'static str,

    /// Attribute binding the root element to the component's handle
    pub binding_attr: &'static str,
}

impl Dialect {
    /// React JSX: `className=` and `ref={wc}`.
    pub const REACT: Dialect = Dialect {
        class_attr: "className=",
        binding_attr: "ref={wc}",
    };

    /// Preact JSX keeps `class=`.
    pub const PREACT: Dialect = Dialect {
        class_attr: "class=",
        binding_attr: "ref={wc}",
    };

    /// Astro templates keep `class=`; the client script finds the root by
    /// a data attribute.
    pub const ASTRO: Dialect = Dialect {
        class_attr: "class=",
        binding_attr: "data-wc",
    };

    /// Vue templates: `class=` and a string template ref.
    pub const VUE: Dialect = Dialect {
        class_attr: "class=",
        binding_attr: r#"ref="wc""#,
    };
}

/// Normalize compiled markup for a dialect.
///
/// When `interactive` is set and a tag is given, each bare opening `<tag>`
/// gets the dialect's binding attribute. Closing tags, self-closed tags and
/// opening tags that already carry attributes are left alone.
pub fn normalize(markup: &str, tag: Option<&str>, interactive: bool, dialect: &Dialect) -> String {
    let mut result = markup.replace("class=", dialect.class_attr);

    if interactive {
        if let Some(tag) = tag {
            result = result.replace(
                &format!("<{}>", tag),
                &format!("<{} {}>", tag, dialect.binding_attr),
            );
        }
    }

    result
}
