/// Display-sync side effect run whenever the active slide changes
pub trait SlideDisplay {
    /// Deactivate `previous` (if any) and its indicator, activate `current`.
    /// Calling this twice with the same index must leave the same visible state.
    fn show(&mut self, previous: Option<usize>, current: usize);
}

impl SlideDisplay for () {
    fn show(&mut self, _previous: Option<usize>, _current: usize) {}
}

/// Active flags for each slide and its indicator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideStrip {
    slides: Vec<bool>,
    indicators: Vec<bool>,
}

impl SlideStrip {
    pub fn new(slide_count: usize) -> Self {
        Self::with_indicators(slide_count, slide_count)
    }

    /// Indicator count may differ from slide count; missing indicators are skipped
    pub fn with_indicators(slide_count: usize, indicator_count: usize) -> Self {
        Self {
            slides: vec![false; slide_count],
            indicators: vec![false; indicator_count],
        }
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|&active| active)
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slides.get(index).copied().unwrap_or(false)
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl SlideDisplay for SlideStrip {
    fn show(&mut self, _previous: Option<usize>, current: usize) {
        self.slides.iter_mut().for_each(|s| *s = false);
        self.indicators.iter_mut().for_each(|i| *i = false);

        if let Some(slide) = self.slides.get_mut(current) {
            *slide = true;
            if let Some(indicator) = self.indicators.get_mut(current) {
                *indicator = true;
            }
        }
    }
}
