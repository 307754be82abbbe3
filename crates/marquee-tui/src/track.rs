//! Terminal geometry for the card track, measured in cells

use marquee_core::geometry::{CardGeometry, GeometryProvider, StaticLayout, ViewportGeometry};

/// Live layout of the carousel track
#[derive(Debug, Clone, Default)]
pub struct TrackLayout {
    pub card_widths: Vec<u16>,
    pub gap: u16,
    pub padding: u16,
    /// Inner width of the carousel panel
    pub viewport_width: u16,
    /// Current horizontal scroll offset (mirrors the animator)
    pub scroll_left: f64,
}

impl TrackLayout {
    pub fn new(card_widths: Vec<u16>, gap: u16, padding: u16) -> Self {
        Self {
            card_widths,
            gap,
            padding,
            viewport_width: 0,
            scroll_left: 0.0,
        }
    }

    fn snapshot(&self) -> StaticLayout {
        let widths: Vec<f64> = self.card_widths.iter().map(|&w| f64::from(w)).collect();
        StaticLayout::from_widths(
            &widths,
            f64::from(self.gap),
            f64::from(self.padding),
            f64::from(self.viewport_width),
        )
        .with_scroll_left(self.scroll_left)
    }

    pub fn max_scroll(&self) -> f64 {
        self.snapshot().viewport.max_scroll()
    }
}

impl GeometryProvider for TrackLayout {
    fn card_geometries(&self) -> Vec<CardGeometry> {
        self.snapshot().cards
    }

    fn viewport_geometry(&self) -> ViewportGeometry {
        self.snapshot().viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_tracks_viewport_changes() {
        let mut track = TrackLayout::new(vec![20, 20, 20], 2, 1);
        track.viewport_width = 30;
        // 1 + 20*3 + 2*2 + 1 = 66
        assert_eq!(track.max_scroll(), 36.0);

        track.viewport_width = 80;
        assert_eq!(track.max_scroll(), 0.0);
        assert_eq!(track.card_geometries()[2].left_offset, 45.0);
    }
}
