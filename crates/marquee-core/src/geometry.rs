//! Geometry snapshots consumed by the pagination engine.
//!
//! Layout is owned by the presentation layer. The engine only reads it through
//! [`GeometryProvider`], and re-reads on every request because card widths and
//! the viewport may change between calls (for example on resize).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One card in the horizontally scrollable track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardGeometry {
    /// Rendered width
    pub width: f64,
    /// Distance from the scrollable origin of the track (includes the track padding)
    pub left_offset: f64,
}

impl CardGeometry {
    pub fn new(width: f64, left_offset: f64) -> Self {
        Self { width, left_offset }
    }

    /// Offset of the card's trailing edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.left_offset + self.width
    }
}

/// The scrollable container holding the cards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportGeometry {
    pub client_width: f64,
    pub scroll_width: f64,
    pub scroll_left: f64,
    /// Fixed spacing between adjacent cards
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub padding_left: f64,
}

impl ViewportGeometry {
    /// Largest valid `scroll_left`
    #[inline]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Live geometry source for a card track
pub trait GeometryProvider {
    fn card_geometries(&self) -> Vec<CardGeometry>;

    fn viewport_geometry(&self) -> ViewportGeometry;
}

/// A fixed geometry snapshot, loaded from JSON or built from card widths
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticLayout {
    pub viewport: ViewportGeometry,
    #[serde(default)]
    pub cards: Vec<CardGeometry>,
}

impl StaticLayout {
    /// Lay out `count` cards of equal width left to right
    pub fn uniform(count: usize, width: f64, gap: f64, padding_left: f64, client_width: f64) -> Self {
        Self::from_widths(&vec![width; count], gap, padding_left, client_width)
    }

    /// Lay out cards of the given widths left to right, separated by `gap`.
    ///
    /// The track is padded by `padding_left` on both sides, so the last card can
    /// be scrolled flush with the viewport's trailing edge.
    pub fn from_widths(widths: &[f64], gap: f64, padding_left: f64, client_width: f64) -> Self {
        let mut cards = Vec::with_capacity(widths.len());
        let mut offset = padding_left;

        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                offset += gap;
            }
            cards.push(CardGeometry::new(width, offset));
            offset += width;
        }

        Self {
            viewport: ViewportGeometry {
                client_width,
                scroll_width: (offset + padding_left).max(client_width),
                scroll_left: 0.0,
                gap,
                padding_left,
            },
            cards,
        }
    }

    pub fn with_scroll_left(mut self, scroll_left: f64) -> Self {
        self.viewport.scroll_left = scroll_left;
        self
    }

    pub fn set_scroll_left(&mut self, scroll_left: f64) {
        self.viewport.scroll_left = scroll_left;
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject non-finite numbers and negative sizes
    pub fn validate(&self) -> Result<()> {
        let vp = &self.viewport;
        let fields = [
            ("client_width", vp.client_width),
            ("scroll_width", vp.scroll_width),
            ("scroll_left", vp.scroll_left),
            ("gap", vp.gap),
            ("padding_left", vp.padding_left),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidLayout(format!("viewport {} is not finite", name)));
            }
        }
        if vp.client_width < 0.0 || vp.scroll_width < 0.0 || vp.gap < 0.0 {
            return Err(Error::InvalidLayout("viewport sizes must be non-negative".to_string()));
        }

        for (i, card) in self.cards.iter().enumerate() {
            if !card.width.is_finite() || !card.left_offset.is_finite() {
                return Err(Error::InvalidLayout(format!("card {} has a non-finite value", i)));
            }
            if card.width < 0.0 {
                return Err(Error::InvalidLayout(format!("card {} has negative width", i)));
            }
        }

        Ok(())
    }
}

impl GeometryProvider for StaticLayout {
    fn card_geometries(&self) -> Vec<CardGeometry> {
        self.cards.clone()
    }

    fn viewport_geometry(&self) -> ViewportGeometry {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout_offsets() {
        let layout = StaticLayout::uniform(3, 100.0, 10.0, 16.0, 210.0);
        let offsets: Vec<f64> = layout.cards.iter().map(|c| c.left_offset).collect();
        assert_eq!(offsets, vec![16.0, 126.0, 236.0]);
        // 16 + 320 + 16
        assert!((layout.viewport.scroll_width - 352.0).abs() < f64::EPSILON);
        assert!((layout.viewport.max_scroll() - 142.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_track_has_no_scroll_range() {
        let layout = StaticLayout::uniform(1, 50.0, 10.0, 0.0, 300.0);
        assert_eq!(layout.viewport.max_scroll(), 0.0);
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "viewport": { "client_width": 210, "scroll_width": 540, "scroll_left": 0, "gap": 10 },
            "cards": [
                { "width": 100, "left_offset": 0 },
                { "width": 100, "left_offset": 110 }
            ]
        }"#;
        let layout = StaticLayout::from_json_str(json).unwrap();
        assert_eq!(layout.card_geometries().len(), 2);
        assert_eq!(layout.viewport_geometry().padding_left, 0.0);
    }

    #[test]
    fn test_negative_width_rejected() {
        let mut layout = StaticLayout::uniform(2, 100.0, 10.0, 0.0, 210.0);
        layout.cards[1].width = -1.0;
        assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            StaticLayout::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }
}
