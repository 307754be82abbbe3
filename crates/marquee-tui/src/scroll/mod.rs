//! Smooth horizontal scrolling for the card track.
//!
//! [`ScrollAnimator`] is the track's [`ScrollSink`](marquee_core::ScrollSink):
//! pagination commands start or redirect a [`Tween`] that the frame loop
//! samples through [`ScrollAnimator::update`].

mod animation;
mod easing;

pub use animation::{frame_interval, ScrollAnimator, Tween};
pub use easing::EasingTypeExt;
