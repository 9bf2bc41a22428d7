//! Rendering boundary: what a card renderer receives.
//!
//! Layout ends with a [`CardSheet`] per card: the placements in drawing
//! order plus the border to stroke. Turning a sheet into pixels belongs to a
//! [`CardRenderer`]; the crate ships [`SvgRenderer`] as a reference
//! implementation that references symbol images by path.
//!
//! ## Key Types
//!
//! - `CardSheet`: everything needed to draw one card
//! - `Border`: outline shape, stroke width, and inset
//! - `CardRenderer`: sheet + symbol assets → output artifact
//! - `CardSink`: where rendered cards are written (directory, ZIP archive, memory)

pub mod export;
pub mod svg;

use serde::{Deserialize, Serialize};

use crate::core::config::{BorderStyle, CORNER_RADIUS, MARGIN};
use crate::core::{DeckConfig, SymbolId};
use crate::error::Result;
use crate::layout::Placement;

pub use export::{
    card_file_name, export_deck, CardSink, DirectorySink, Manifest, MemorySink, ZipSink,
    ARCHIVE_FILE, MANIFEST_FILE,
};
pub use svg::SvgRenderer;

/// Outline stroked around a card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    /// Stroke width in pixels.
    pub width: u32,
    /// Inset from the card edge.
    pub margin: f64,
    /// Corner radius for [`BorderStyle::RoundedRect`].
    pub corner_radius: f64,
}

impl Border {
    #[must_use]
    pub fn new(style: BorderStyle, width: u32) -> Self {
        Self {
            style,
            width,
            margin: MARGIN,
            corner_radius: CORNER_RADIUS,
        }
    }

    /// Border for a configuration, or `None` when the thickness is zero.
    #[must_use]
    pub fn from_config(config: &DeckConfig) -> Option<Self> {
        (config.border_thickness > 0).then(|| Self::new(config.border_style, config.border_thickness))
    }
}

/// One laid-out card, ready for a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSheet {
    /// 0-based position in the deck.
    pub index: usize,
    /// Side length of the square card.
    pub card_size: f64,
    pub border: Option<Border>,
    /// Symbols to draw, in order.
    pub placements: Vec<Placement>,
    /// Symbols free packing could not fit on this card.
    pub dropped: Vec<SymbolId>,
}

impl CardSheet {
    /// Output file name following the `card_<n>` convention.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        card_file_name(self.index, extension)
    }
}

/// Turns a card sheet into an artifact.
///
/// `assets[i]` is the image source for symbol `i`.
pub trait CardRenderer {
    type Output;

    /// File extension of the produced artifact.
    fn extension(&self) -> &'static str;

    fn render(&self, sheet: &CardSheet, assets: &[String]) -> Result<Self::Output>;
}
