//! Display items supplied by the host.

use std::collections::BTreeMap;

use crate::{GeoPoint, ItemId};

/// One entry of the read-only collection the host screen supplies
/// (a hotel, a destination, an experience...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayItem {
    /// Selection key shared by list and map.
    pub id: ItemId,
    /// Headline shown on the card.
    pub title: String,
    /// Image reference (URL or asset key). Loading and placeholders are the
    /// host's business.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Free-form card details (price, rating...), rendered by the host.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: BTreeMap<String, String>,
    /// Position on the companion map, when the item has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<GeoPoint>,
}

impl DisplayItem {
    /// Item with no image, metadata or location.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            metadata: BTreeMap::new(),
            location: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Place the item on the companion map.
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Add one metadata entry, replacing an existing key.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
