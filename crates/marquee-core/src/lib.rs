pub mod config;
pub mod error;
pub mod geometry;
pub mod observers;
pub mod pagination;
pub mod rotator;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::{CardGeometry, GeometryProvider, StaticLayout, ViewportGeometry};
pub use pagination::{Carousel, Direction, PageWindow, PaginationEngine, ScrollCommand, ScrollSink};
pub use rotator::{RotatorService, RotatorState, SlideRotator};
