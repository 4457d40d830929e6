//! LookML object model built from `lookml-parser` output.
//!
//! # Architecture
//!
//! ```text
//! parser JSON
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ construct + validate
//! Model / Explore / ExploreView / View / fields
//!   ↓ resolve source views, propagate custom labels
//! LookmlDocument
//! ```

pub mod dto;
pub mod loader;

mod document;
mod explore;
mod field;
mod model;
mod view;

pub use document::LookmlDocument;
pub use explore::{Explore, ExploreView};
pub use field::{Dimension, DimensionGroup, Field, Measure};
pub use model::Model;
pub use view::View;
