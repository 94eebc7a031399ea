//! Auto-advancing seamless carousel
//!
//! The host renders the slides three times over (see
//! [`wayfarer_model::SeamlessSequence`]) and hands the engine a scroll handle.
//! The engine owns the logical index, the single advance/settle/resume timer,
//! and the order in which "animate forward, wait for it to settle, jump back
//! invisibly, rearm" happens.

pub mod engine;
pub mod messages;
pub mod runtime;
pub mod types;

pub use engine::CarouselEngine;
pub use messages::CarouselEvent;
pub use runtime::run_carousel;
pub use types::{CarouselHost, CarouselPhase};
