//! Target framework emitters for compiled WebC components.
//!
//! This crate turns a framework-agnostic component IR into source files for
//! React, Astro, Preact or Vue, plus the stylesheet and guarded client script that
//! sit next to them.

pub mod astro;
pub mod ir;
pub mod jsx;
pub mod markup;
pub mod naming;
pub mod props;
pub mod registry;
pub mod script;
pub mod templates;
pub mod traits;
pub mod vue;

pub use astro::AstroEmitter;
pub use ir::{ComponentIr, EmittedArtifact, PropSchema, TargetFiles, FALLBACK_IDENTIFIER};
pub use jsx::JsxEmitter;
pub use markup::{normalize, Dialect};
pub use naming::{derive, DerivedName};
pub use props::FormattedProps;
pub use registry::EmitterRegistry;
pub use script::guard_script;
pub use traits::{EmitError, TargetEmitter};
pub use vue::VueEmitter;
