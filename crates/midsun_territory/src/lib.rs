//! Territory definitions: model and JSON loader.
//!
//! A territory is a unique id, a display name, optional notes, and one or
//! more labeled (lat, lon) anchor points, optionally grouped into named
//! components for multi-region territories. The loader validates structure
//! only; numeric range checks belong to the coverage solver.

pub mod error;
pub mod loader;
pub mod model;

pub use error::LoadError;
pub use loader::{iter_territories, load_territory};
pub use model::{AnchorPoint, Territory};
