//! WebC template compilation into framework-agnostic component IR.
//!
//! This crate reads source components and optional props schema files and
//! produces the [`ComponentIr`](webcc_adapters::ComponentIr) that target
//! emitters consume.

pub mod compiler;
pub mod pipeline;
pub mod props;

pub use compiler::{BundleCompiler, CompileError, CompiledTemplate, PlaceholderData, TemplateCompiler};
pub use pipeline::{
    build_ir, compile_component, component_identifier, discover_sources, SOURCE_EXTENSION,
};
pub use props::{load_props, parse_props, placeholders};
