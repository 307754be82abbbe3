#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVisibility {
    Visible,
    Hidden,
}

/// Show/hide-on-scroll for a fixed navbar
#[derive(Debug, Clone)]
pub struct NavbarObserver {
    last_y: f64,
    hide_margin: f64,
    visibility: NavbarVisibility,
}

impl NavbarObserver {
    pub fn new(hide_margin: f64) -> Self {
        Self {
            last_y: 0.0,
            hide_margin,
            visibility: NavbarVisibility::Visible,
        }
    }

    pub fn visibility(&self) -> NavbarVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == NavbarVisibility::Visible
    }

    /// Feed a new scroll position. Scrolling down past the navbar (plus the
    /// margin) hides it; any upward scroll shows it again.
    pub fn observe(&mut self, y: f64, navbar_height: f64) -> NavbarVisibility {
        if y > self.last_y && y > navbar_height + self.hide_margin {
            self.visibility = NavbarVisibility::Hidden;
        } else if y < self.last_y {
            self.visibility = NavbarVisibility::Visible;
        }
        self.last_y = y;
        self.visibility
    }
}

impl Default for NavbarObserver {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_visible_near_top() {
        let mut navbar = NavbarObserver::default();
        assert_eq!(navbar.observe(5.0, 3.0), NavbarVisibility::Visible);
        assert_eq!(navbar.observe(13.0, 3.0), NavbarVisibility::Visible);
    }

    #[test]
    fn test_hides_down_shows_up() {
        let mut navbar = NavbarObserver::default();
        assert_eq!(navbar.observe(20.0, 3.0), NavbarVisibility::Hidden);
        assert_eq!(navbar.observe(40.0, 3.0), NavbarVisibility::Hidden);
        assert_eq!(navbar.observe(39.0, 3.0), NavbarVisibility::Visible);
    }

    #[test]
    fn test_same_position_keeps_state() {
        let mut navbar = NavbarObserver::default();
        navbar.observe(50.0, 3.0);
        assert_eq!(navbar.observe(50.0, 3.0), NavbarVisibility::Hidden);
    }
}
