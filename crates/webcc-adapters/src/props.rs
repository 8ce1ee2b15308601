//! Prop schema formatting for typed component signatures.

use serde::Serialize;

use crate::ir::PropSchema;

/// Prop schema arranged as a type literal and a destructuring pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedProps {
    /// Inline type literal: `{a: string; b: number;}`
    pub type_decl: String,

    /// Parameter pattern: `{ a, b }`
    pub param_pattern: String,
}

/// Format a prop schema. Types are passed through without validation.
pub fn format(props: Option<&PropSchema>) -> Option<FormattedProps> {
    let props = props?;

    let fields = props
        .iter()
        .map(|(name, type_name)| format!("{}: {};", name, type_name))
        .collect::<Vec<_>>()
        .join(" ");

    let names = props.names().collect::<Vec<_>>().join(", ");

    Some(FormattedProps {
        type_decl: format!("{{{}}}", fields),
        param_pattern: format!("{{ {} }}", names),
    })
}
