//! Single source of truth for the highlighted item.
//!
//! Both the list and the companion map render their highlight from one
//! [`SelectionSync`]. Every change is reported as a [`SelectionChange`] naming
//! the id to unhighlight and the id to highlight, so each view can apply it
//! and end up with at most one highlighted element.

use wayfarer_model::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSync {
    current: Option<ItemId>,
}

/// The delta a view applies to its highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<ItemId>,
    pub current: Option<ItemId>,
}

impl SelectionSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ItemId> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Replace the selection. Returns `None` when nothing changed.
    pub fn select(&mut self, id: Option<ItemId>) -> Option<SelectionChange> {
        if self.current == id {
            return None;
        }
        let previous = std::mem::replace(&mut self.current, id);
        Some(SelectionChange {
            previous,
            current: self.current.clone(),
        })
    }

    pub fn clear(&mut self) -> Option<SelectionChange> {
        self.select(None)
    }
}

impl SelectionChange {
    /// Apply the change to a view's highlight setter: the previous id is
    /// unhighlighted before the new one is highlighted.
    pub fn apply_to<F>(&self, mut set_highlight: F)
    where
        F: FnMut(&ItemId, bool),
    {
        if let Some(previous) = &self.previous {
            set_highlight(previous, false);
        }
        if let Some(current) = &self.current {
            set_highlight(current, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn reselecting_is_not_a_change() {
        let mut sync = SelectionSync::new();
        assert!(sync.select(Some("a".into())).is_some());
        assert!(sync.select(Some("a".into())).is_none());
        assert!(sync.is_selected(&"a".into()));
    }

    #[test]
    fn applying_changes_keeps_a_single_highlight() {
        let mut sync = SelectionSync::new();
        let mut highlighted = BTreeSet::new();

        for id in ["x", "y", "z", "y"] {
            let change = sync.select(Some(id.into())).expect("changed");
            change.apply_to(|id, on| {
                if on {
                    highlighted.insert(id.clone());
                } else {
                    highlighted.remove(id);
                }
            });
            assert_eq!(highlighted.len(), 1);
            assert!(highlighted.contains(&ItemId::from(id)));
        }

        sync.clear()
            .expect("cleared")
            .apply_to(|id, _| {
                highlighted.remove(id);
            });
        assert!(highlighted.is_empty());
        assert_eq!(sync.current(), None);
    }
}
