use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::warn;

use marquee_core::rotator::{RotatorCommand, RotatorEvent};
use marquee_core::{AppConfig, RotatorService};

pub async fn run(config: &AppConfig, slides: Option<usize>) -> Result<()> {
    let slide_count = slides.unwrap_or(config.content.slides.len());
    let titles: Vec<String> = (0..slide_count)
        .map(|i| {
            config
                .content
                .slides
                .get(i)
                .map(|s| s.title.clone())
                .unwrap_or_else(|| format!("Slide {}", i + 1))
        })
        .collect();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RotatorEvent>();
    let (service, handle) = RotatorService::new(slide_count, &config.rotator);
    let service = service.with_event_sender(event_tx);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let service_task = tokio::spawn(service.run(shutdown_rx));

    println!(
        "Rotating {} slides every {} ms. Commands: n, p, <index>, pause, resume, quit",
        slide_count, config.rotator.auto_delay_ms
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => {
                let RotatorEvent::SlideChanged { previous, current } = event;
                let title = titles.get(current).map(String::as_str).unwrap_or("");
                match previous {
                    Some(previous) => println!("[{} -> {}] {}", previous, current, title),
                    None => println!("[{}] {}", current, title),
                }
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    break;
                };
                let command = match line.trim() {
                    "" => continue,
                    "q" | "quit" => break,
                    "n" | "next" => RotatorCommand::Next,
                    "p" | "prev" => RotatorCommand::Prev,
                    "pause" => RotatorCommand::Pause,
                    "resume" => RotatorCommand::Resume,
                    other => match other.parse::<usize>() {
                        Ok(index) => RotatorCommand::JumpTo(index),
                        Err(_) => {
                            warn!("Unknown command: '{}'", other);
                            continue;
                        }
                    },
                };
                if !handle.send(command) {
                    break;
                }
            }
        }
    }

    let _ = shutdown_tx.send(true);
    service_task.await?;
    Ok(())
}
