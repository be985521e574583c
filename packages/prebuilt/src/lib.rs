//! # Pagekit Prebuilt
//!
//! Capture live instances as reusable "prebuilt" components.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ instance tree                │   │ style store                  │
//! │ (nodes reference style ids)  │   │ ("<id>:<property>" → value)  │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                 ↓                                  ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ collector: pre-order walk → style ids                           │
//! │ capture:   dedupe ids, resolve sources + entries, copy subtree  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ registry: records + linked instance ids, written through to     │
//! │           key-value storage after every mutation                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_common::FileStorage;
//! use pagekit_prebuilt::PrebuiltRegistry;
//!
//! let mut registry = PrebuiltRegistry::load(FileStorage::new(".pagekit"))?;
//!
//! // Capture a subtree together with the styles it references
//! let record_id = registry.add("Card", &card, &doc.styles).id().to_string();
//!
//! // UI overlays highlight linked instances
//! assert!(registry.is_linked(&card.id));
//!
//! registry.rename(&record_id, "Product card");
//! registry.remove(&record_id);
//! ```

pub mod capture;
pub mod collector;
pub mod errors;
pub mod record;
pub mod registry;

pub use capture::{capture, capture_at};
pub use collector::{collect_style_ids, collect_unique_style_ids};
pub use errors::PrebuiltError;
pub use record::{CapturedStyle, PrebuiltRecord};
pub use registry::{PrebuiltRegistry, PrebuiltState, STORAGE_KEY};
