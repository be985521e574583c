//! # Pagekit Model
//!
//! Data types shared by every Pagekit crate: the component instance tree,
//! style source descriptors, and the flat style store.

pub mod document;
pub mod instance;
pub mod json;
pub mod style;

pub use document::{Document, DocumentError};
pub use instance::ComponentInstance;
pub use style::{
    split_style_key, style_key, style_key_prefix, MemoryStyleStore, StyleSource,
    StyleSourceKind, StyleStore, STYLE_KEY_SEPARATOR,
};
