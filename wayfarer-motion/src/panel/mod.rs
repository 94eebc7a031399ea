//! Three-position snapping panel synchronized with a companion map.

pub mod animator;
pub mod controller;
pub mod gesture;
pub mod types;

pub use animator::SnapAnimator;
pub use controller::SnapPanelController;
pub use gesture::{DragOutcome, DragSession};
pub use types::{CompanionView, PanelSurface};
