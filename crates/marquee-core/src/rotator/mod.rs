mod display;
mod machine;
mod service;
mod timer;

pub use display::{SlideDisplay, SlideStrip};
pub use machine::{Interaction, RotatorState, SlideRotator};
pub use service::{RotatorCommand, RotatorEvent, RotatorHandle, RotatorService};
pub use timer::{DeadlineTimer, TimerFacility, TimerHandle};
