//! Scroll-position observers.
//!
//! Stateless-ish reactions to a page scroll signal: the navbar hides while
//! scrolling down and reappears when scrolling up, and parallax layers shift
//! with their distance from the viewport centre. Both are recomputed at most
//! once per refresh tick through [`FrameCoalescer`].

mod coalesce;
mod navbar;
mod parallax;

pub use coalesce::FrameCoalescer;
pub use navbar::{NavbarObserver, NavbarVisibility};
pub use parallax::{ParallaxLayer, ParallaxMode};
