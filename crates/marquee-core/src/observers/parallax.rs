use crate::config::ObserverConfig;

/// Which axes a parallax layer moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxMode {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl ParallaxMode {
    /// Case-insensitive; anything unrecognised falls back to horizontal
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "vertical" => ParallaxMode::Vertical,
            "both" => ParallaxMode::Both,
            _ => ParallaxMode::Horizontal,
        }
    }
}

/// A layer translated in proportion to its distance from the viewport centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub mode: ParallaxMode,
    pub strength_x: f64,
    pub strength_y: f64,
}

impl Default for ParallaxLayer {
    fn default() -> Self {
        Self {
            mode: ParallaxMode::Horizontal,
            strength_x: 0.6,
            strength_y: 0.0,
        }
    }
}

impl ParallaxLayer {
    pub fn from_config(config: &ObserverConfig) -> Self {
        Self {
            mode: ParallaxMode::parse(&config.parallax_mode),
            strength_x: finite_or(config.parallax_strength_x, 0.6),
            strength_y: finite_or(config.parallax_strength_y, 0.0),
        }
    }

    /// Translation `(x, y)` for an element at `element_top` (relative to the
    /// viewport) with the given height
    pub fn offset(&self, element_top: f64, element_height: f64, viewport_height: f64) -> (i32, i32) {
        let center = element_top + element_height / 2.0;
        let distance = viewport_height / 2.0 - center;

        let tx = (distance * self.strength_x).round() as i32;
        let ty = (distance * self.strength_y).round() as i32;

        match self.mode {
            ParallaxMode::Horizontal => (tx, 0),
            ParallaxMode::Vertical => (0, ty),
            ParallaxMode::Both => (tx, ty),
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
