//! Feed item catalog
//!
//! The catalog is the ordered, read-only list of cards shown by the Campus
//! Buzz feed. Order is navigation order. A catalog is never empty and item
//! ids are unique, so any index produced by wraparound arithmetic is valid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Errors that can occur while building a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no items
    #[error("Catalog must contain at least one item")]
    Empty,

    /// Two items share an id
    #[error("Duplicate feed item id: {0}")]
    DuplicateId(String),

    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A single card in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Unique identifier
    pub id: String,

    /// Image reference (URI)
    pub image_ref: String,

    /// Card subheading
    pub title: String,

    /// Text shown on the card
    pub short_text: String,

    /// Extended text shown in the details panel
    pub long_text: String,
}

impl FeedItem {
    /// Create a new feed item
    pub fn new(
        id: impl Into<String>,
        image_ref: impl Into<String>,
        title: impl Into<String>,
        short_text: impl Into<String>,
        long_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            title: title.into(),
            short_text: short_text.into(),
            long_text: long_text.into(),
        }
    }
}

/// Ordered, non-empty collection of feed items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<FeedItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(items: Vec<FeedItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<FeedItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The built-in sample feed
    pub fn sample() -> Self {
        Self {
            items: sample_items(),
        }
    }

    /// Number of items (always at least one)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by position
    pub fn get(&self, index: usize) -> Option<&FeedItem> {
        self.items.get(index)
    }

    /// Position of the item with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Iterate items in navigation order
    pub fn iter(&self) -> impl Iterator<Item = &FeedItem> {
        self.items.iter()
    }

    /// All items as a slice
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_items() -> Vec<FeedItem> {
    vec![
        FeedItem::new(
            "1",
            "https://picsum.photos/seed/picsum/400/600",
            "A Beautiful Subheading 1",
            "This is some good text that will completely occupy the available space. \
             It can be a description, a story, or any other relevant information.",
            "This is the extended content for the first event. It provides a much more \
             detailed description, including background information, key speakers, agenda, \
             and what attendees can expect. This section is designed to be scrolled through, \
             offering a comprehensive overview for those who want to \"know more.\" It can \
             contain multiple paragraphs, bullet points, and other rich text elements to fully \
             inform the user about the event. The goal is to provide all necessary details \
             without cluttering the initial card view.",
        ),
        FeedItem::new(
            "2",
            "https://picsum.photos/seed/picsum/400/601",
            "Another Great Title 2",
            "Here is some more interesting content for the second card. \
             It provides additional details and context.",
            "This is the extended content for the second event. Dive deeper into the \
             specifics of this gathering. Learn about the innovative ideas that will be \
             discussed, the networking opportunities available, and the impact this event \
             aims to achieve. We believe in providing transparent and thorough information to \
             help you make the most of your experience. Scroll down to uncover all the layers \
             of this exciting opportunity.",
        ),
        FeedItem::new(
            "3",
            "https://picsum.photos/seed/picsum/400/602",
            "Third Card's Charm 3",
            "The third card brings new perspectives and information, \
             keeping the user engaged with fresh content.",
            "This is the extended content for the third event. Explore the unique charm and \
             offerings of this particular event. From interactive workshops to inspiring \
             keynotes, there's something for everyone. Our aim is to foster a vibrant \
             community and facilitate meaningful connections. Read on to discover why this \
             event is a must-attend for enthusiasts and professionals alike.",
        ),
        FeedItem::new(
            "4",
            "https://picsum.photos/seed/picsum/400/603",
            "Fourth Time's the Charm 4",
            "This is the fourth card, continuing the series with more \
             captivating images and descriptive text.",
            "This is the extended content for the fourth event. Concluding our series with a \
             bang, this event promises to be unforgettable. Featuring cutting-edge \
             presentations and collaborative sessions, it's designed to push boundaries and \
             inspire future leaders. Get ready for an immersive experience that combines \
             learning, innovation, and fun. All the details you need are right here, just a \
             scroll away.",
        ),
    ]
}
