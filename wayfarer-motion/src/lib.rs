//! Headless interaction state machines for travel-booking screens.
//!
//! Two engines live here, both driven by a host view that forwards viewport
//! and gesture events and renders what the engine reports back:
//!
//! - [`CarouselEngine`]: an auto-advancing, seamlessly looping slide
//!   carousel that pauses while the user drags and resumes after a quiet
//!   period.
//! - [`SnapPanelController`]: a draggable panel resting at one of three snap
//!   points, kept in sync with a companion map through a single selection.
//!
//! Deferred work goes through [`timer::TimerDriver`]. Each engine owns at most
//! one [`timer::TimerHandle`]; a fired timer whose id does not match the live
//! handle is stale and ignored.

pub mod carousel;
pub mod error;
pub mod panel;
pub mod selection;
pub mod timer;

pub use carousel::{
    CarouselEngine, CarouselEvent, CarouselHost, CarouselPhase, run_carousel,
};
pub use error::{MotionError, Result as MotionResult};
pub use panel::{CompanionView, DragSession, PanelSurface, SnapPanelController};
pub use selection::{SelectionChange, SelectionSync};
pub use timer::{
    ManualTimers, TimerDriver, TimerFired, TimerHandle, TimerId, TimerSpec,
    TokioTimers,
};

pub use wayfarer_config::{CarouselTuning, MotionConfig, PanelTuning};
pub use wayfarer_model::{DisplayItem, ItemId, PanelState, SnapPoints};
