//! Core data model definitions shared across Wayfarer crates.
//!
//! Everything in here is plain data: item identifiers, display items, geo
//! coordinates, slides and the seamless three-copy sequence, and the snap
//! point table used by the panel controller. Behaviour lives in
//! `wayfarer-motion`.

pub mod error;
pub mod geo;
pub mod ids;
pub mod item;
pub mod panel;
pub mod slide;

pub use error::{ModelError, Result as ModelResult};
pub use geo::{GeoPoint, Region};
pub use ids::ItemId;
pub use item::DisplayItem;
pub use panel::{PanelState, SnapPoints};
pub use slide::{SeamlessSequence, Slide, chunk_into_slides};
