//! Host events for carousel interactions

/// Viewport and gesture events a host forwards to its carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    DragStart,
    /// Drag released with the scroll position it ended at.
    DragEnd { offset: f32 },
    /// Content offset reported by the scrollable.
    ContentOffset(f32),
    /// Data length changed; the engine reinitializes.
    Resize { slide_count: usize },
    /// Viewport width changed.
    PageWidth(f32),
    /// Host view unmounted.
    Unmount,
}
