use std::path::Path;

use anyhow::Result;

use marquee_core::pagination::ScrollBehavior;
use marquee_core::{AppConfig, Carousel, Direction, PaginationEngine, ScrollCommand, StaticLayout};

pub fn run(config: &AppConfig, layout_path: &Path, prev: bool) -> Result<()> {
    let layout = StaticLayout::from_json_file(layout_path)?;
    let mut carousel = Carousel::new(
        layout,
        Vec::<ScrollCommand>::new(),
        PaginationEngine::from_config(&config.carousel),
    );

    let direction = if prev {
        Direction::Backward
    } else {
        Direction::Forward
    };

    match carousel.scroll_by_card(direction) {
        Some(command) => println!("{}", describe(&command)),
        None => println!("Layout has no cards; nothing to step."),
    }

    Ok(())
}

/// Human-readable form of a scroll command
pub fn describe(command: &ScrollCommand) -> String {
    let behavior = |b: &ScrollBehavior| match b {
        ScrollBehavior::Smooth => "smooth",
        ScrollBehavior::Instant => "instant",
    };
    match command {
        ScrollCommand::To { left, behavior: b } => format!("scroll to {} ({})", left, behavior(b)),
        ScrollCommand::By { delta, behavior: b } => format!("scroll by {:+} ({})", delta, behavior(b)),
    }
}
