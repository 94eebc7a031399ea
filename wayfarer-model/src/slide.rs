//! Slides and the seamless (three-copy) sequence rendered by carousels.
//!
//! A carousel with `N` slides renders `3N` pages: the slides repeated three
//! times. Logical positions live in the middle and trailing copies, so an
//! advance past the last real slide lands on a pixel-identical duplicate of
//! the first one and the engine can jump back without a visible seam.

use std::ops::Index;

use crate::DisplayItem;

/// Number of copies of the slide set in the rendered sequence.
pub const SEAMLESS_COPIES: usize = 3;

/// An ordered chunk of up to `K` display items shown as one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// Items in display order.
    pub items: Vec<DisplayItem>,
}

impl Slide {
    /// Number of items on this slide.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for a slide without items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group `items` into slides of `per_slide` items. The last slide may be
/// short. `per_slide == 0` yields no slides.
pub fn chunk_into_slides(items: &[DisplayItem], per_slide: usize) -> Vec<Slide> {
    if per_slide == 0 {
        return Vec::new();
    }
    items
        .chunks(per_slide)
        .map(|chunk| Slide {
            items: chunk.to_vec(),
        })
        .collect()
}

/// The rendered `3N` sequence. Rendered positions are resolved through a
/// lookup (`rendered % N`) instead of cloning the slides three times.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeamlessSequence {
    slides: Vec<Slide>,
}

impl SeamlessSequence {
    /// Sequence over `slides` (`N = slides.len()`).
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Chunk `items` into slides and wrap them.
    pub fn from_items(items: &[DisplayItem], per_slide: usize) -> Self {
        Self::new(chunk_into_slides(items, per_slide))
    }

    /// Number of real slides (`N`).
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of rendered pages (`3N`).
    pub fn rendered_len(&self) -> usize {
        self.slides.len() * SEAMLESS_COPIES
    }

    /// True when there are no slides, so nothing can advance.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Logical slide shown at a rendered position, or `None` when the
    /// position is outside `[0, 3N)`.
    pub fn logical_slide(&self, rendered: usize) -> Option<usize> {
        if rendered >= self.rendered_len() {
            return None;
        }
        Some(rendered % self.slides.len())
    }

    /// Slide content at a rendered position.
    pub fn slide_at(&self, rendered: usize) -> Option<&Slide> {
        self.logical_slide(rendered).map(|i| &self.slides[i])
    }

    /// True when both rendered positions show the same content, i.e. a jump
    /// between them is invisible.
    pub fn is_duplicate_pair(&self, a: usize, b: usize) -> bool {
        match (self.logical_slide(a), self.logical_slide(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// The `N` real slides.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Iterate the full rendered sequence front to back.
    pub fn rendered(&self) -> impl Iterator<Item = &Slide> + '_ {
        (0..self.rendered_len()).filter_map(move |i| self.slide_at(i))
    }
}

impl Index<usize> for SeamlessSequence {
    type Output = Slide;

    fn index(&self, rendered: usize) -> &Self::Output {
        match self.slide_at(rendered) {
            Some(slide) => slide,
            None => panic!(
                "rendered index {rendered} out of range for {} pages",
                self.rendered_len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<DisplayItem> {
        (0..n)
            .map(|i| DisplayItem::new(format!("item-{i}"), format!("Item {i}")))
            .collect()
    }

    #[test]
    fn chunking_keeps_order_and_short_tail() {
        let slides = chunk_into_slides(&items(7), 3);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].len(), 3);
        assert_eq!(slides[2].len(), 1);
        assert_eq!(slides[2].items[0].id.as_str(), "item-6");
    }

    #[test]
    fn zero_chunk_size_yields_nothing() {
        assert!(chunk_into_slides(&items(4), 0).is_empty());
        assert!(SeamlessSequence::from_items(&items(4), 0).is_empty());
    }

    #[test]
    fn seamless_sequence_repeats_three_times() {
        let seq = SeamlessSequence::from_items(&items(6), 2);
        assert_eq!(seq.slide_count(), 3);
        assert_eq!(seq.rendered_len(), 9);
        assert_eq!(seq.rendered().count(), 9);

        // Start of the middle copy and start of the trailing copy match the
        // very first slide.
        assert_eq!(seq[0], seq[3]);
        assert_eq!(seq[3], seq[6]);
        assert!(seq.is_duplicate_pair(6, 3));
        assert!(!seq.is_duplicate_pair(5, 3));
        assert_eq!(seq.logical_slide(9), None);
    }
}
