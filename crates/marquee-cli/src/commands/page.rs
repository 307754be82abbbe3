use std::path::Path;

use anyhow::Result;
use serde_json::json;

use marquee_core::{AppConfig, Carousel, Direction, PaginationEngine, ScrollCommand, StaticLayout};

use super::step::describe;

pub fn run(config: &AppConfig, layout_path: &Path, prev: bool, as_json: bool) -> Result<()> {
    let layout = StaticLayout::from_json_file(layout_path)?;
    let card_count = layout.cards.len();
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
    let window = carousel.page_window();
    let target_index = {
        let layout = carousel.geometry();
        carousel
            .engine()
            .page_target_index(direction, &layout.cards, &layout.viewport)
    };
    let command = carousel.advance(direction);

    if as_json {
        let target_left = match command {
            Some(ScrollCommand::To { left, .. }) => Some(left),
            _ => None,
        };
        let output = json!({
            "start_index": window.start_index,
            "visible_count": window.visible_count,
            "direction": if prev { "backward" } else { "forward" },
            "target_index": target_index,
            "target_left": target_left,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if card_count == 0 {
        println!("Layout has no cards; nothing to page.");
        return Ok(());
    }

    println!(
        "Visible: cards {}-{} of {}",
        window.start_index,
        window.start_index + window.visible_count - 1,
        card_count
    );
    if let Some(target_index) = target_index {
        println!("Target card: {}", target_index);
    }
    if let Some(command) = command {
        println!("Command: {}", describe(&command));
    }

    Ok(())
}
