use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::display::SlideDisplay;
use super::machine::{Interaction, SlideRotator};
use super::timer::DeadlineTimer;
use crate::config::RotatorConfig;

/// Commands accepted by a running rotator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorCommand {
    Next,
    Prev,
    JumpTo(usize),
    Pause,
    Resume,
    Interaction(Interaction),
}

/// Events emitted by the rotator to notify the UI of changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotatorEvent {
    /// The active slide changed (or was re-shown)
    SlideChanged { previous: Option<usize>, current: usize },
}

/// Publishes the active index on a watch channel and optional event stream
struct ChannelDisplay {
    index_tx: watch::Sender<usize>,
    event_tx: Option<mpsc::UnboundedSender<RotatorEvent>>,
}

impl SlideDisplay for ChannelDisplay {
    fn show(&mut self, previous: Option<usize>, current: usize) {
        self.index_tx.send_replace(current);

        if let Some(ref tx) = self.event_tx {
            if tx.send(RotatorEvent::SlideChanged { previous, current }).is_err() {
                warn!("Failed to send rotator event: receiver dropped");
            }
        }
    }
}

/// Cloneable control surface for a running [`RotatorService`]
#[derive(Debug, Clone)]
pub struct RotatorHandle {
    commands: mpsc::UnboundedSender<RotatorCommand>,
    index: watch::Receiver<usize>,
}

impl RotatorHandle {
    /// Send a command; returns false once the service has stopped
    pub fn send(&self, command: RotatorCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Read-only observable of the active slide index
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn current_index(&self) -> usize {
        *self.index.borrow()
    }
}

/// Runs a slide rotator on the tokio clock
pub struct RotatorService {
    rotator: SlideRotator<DeadlineTimer, ChannelDisplay>,
    commands: mpsc::UnboundedReceiver<RotatorCommand>,
}

impl RotatorService {
    /// Create a service and its control handle
    pub fn new(slide_count: usize, config: &RotatorConfig) -> (Self, RotatorHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (index_tx, index_rx) = watch::channel(0);

        let display = ChannelDisplay {
            index_tx,
            event_tx: None,
        };
        let rotator = SlideRotator::from_config(slide_count, config, DeadlineTimer::new(), display);

        let service = Self {
            rotator,
            commands: command_rx,
        };
        let handle = RotatorHandle {
            commands: command_tx,
            index: index_rx,
        };
        (service, handle)
    }

    /// Set the event sender for UI notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<RotatorEvent>) -> Self {
        self.rotator.display_mut().event_tx = Some(tx);
        self
    }

    fn apply(&mut self, command: RotatorCommand) {
        debug!(?command, "rotator command");
        match command {
            RotatorCommand::Next => self.rotator.next(),
            RotatorCommand::Prev => self.rotator.prev(),
            RotatorCommand::JumpTo(index) => self.rotator.jump_to(index),
            RotatorCommand::Pause => self.rotator.pause(),
            RotatorCommand::Resume => self.rotator.resume(),
            RotatorCommand::Interaction(interaction) => self.rotator.handle(interaction),
        }
    }

    /// Run until the shutdown signal, then destroy the rotator
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if self.rotator.slide_count() == 0 {
            info!("Rotator disabled: no slides");
        } else {
            info!(slides = self.rotator.slide_count(), "Rotator started");
        }

        let mut commands_open = true;

        loop {
            let deadline = self.rotator.timer().next_deadline();

            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Rotator received shutdown signal");
                        break;
                    }
                }

                command = self.commands.recv(), if commands_open => {
                    match command {
                        Some(command) => self.apply(command),
                        None => {
                            debug!("All rotator handles dropped; autoplay continues");
                            commands_open = false;
                        }
                    }
                }

                _ = wait_until(deadline) => {
                    if let Some(handle) = self.rotator.timer_mut().take_due(Instant::now()) {
                        self.rotator.on_timer_fired(handle);
                    }
                }
            }
        }

        self.rotator.destroy();
        info!("Rotator stopped");
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    const DELAY_MS: u64 = 5000;

    fn config() -> RotatorConfig {
        RotatorConfig {
            auto_delay_ms: DELAY_MS,
            autoplay: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance() {
        let (service, handle) = RotatorService::new(3, &config());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(service.run(shutdown_rx));

        assert_eq!(handle.current_index(), 0);
        sleep(Duration::from_millis(DELAY_MS + 1)).await;
        assert_eq!(handle.current_index(), 1);
        sleep(Duration::from_millis(DELAY_MS)).await;
        assert_eq!(handle.current_index(), 2);
        sleep(Duration::from_millis(DELAY_MS)).await;
        assert_eq!(handle.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_holds_slide() {
        let (service, handle) = RotatorService::new(3, &config());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(service.run(shutdown_rx));

        sleep(Duration::from_millis(DELAY_MS - 1000)).await;
        assert!(handle.send(RotatorCommand::Pause));
        sleep(Duration::from_millis(DELAY_MS * 4)).await;
        assert_eq!(handle.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_arms_single_timer() {
        let (service, handle) = RotatorService::new(3, &config());
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(service.run(shutdown_rx));

        handle.send(RotatorCommand::Interaction(Interaction::PointerEnter));
        handle.send(RotatorCommand::Interaction(Interaction::PointerLeave));
        handle.send(RotatorCommand::Resume);

        // Exactly one advance inside one delay window after resume
        sleep(Duration::from_millis(DELAY_MS + 1)).await;
        assert_eq!(handle.current_index(), 1);
        sleep(Duration::from_millis(DELAY_MS - 2)).await;
        assert_eq!(handle.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_and_manual_commands() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (service, handle) = RotatorService::new(3, &config());
        let service = service.with_event_sender(tx);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(service.run(shutdown_rx));

        handle.send(RotatorCommand::JumpTo(2));
        handle.send(RotatorCommand::JumpTo(7));
        handle.send(RotatorCommand::Next);

        assert_eq!(
            rx.recv().await,
            Some(RotatorEvent::SlideChanged {
                previous: Some(0),
                current: 2
            })
        );
        assert_eq!(
            rx.recv().await,
            Some(RotatorEvent::SlideChanged {
                previous: Some(2),
                current: 0
            })
        );

        // Manual navigation paused autoplay
        sleep(Duration::from_millis(DELAY_MS * 3)).await;
        assert_eq!(handle.current_index(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_mutations() {
        let (service, handle) = RotatorService::new(3, &config());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(service.run(shutdown_rx));
        let mut index = handle.subscribe();

        shutdown_tx.send(true).unwrap();
        let result = timeout(Duration::from_secs(1), task).await;
        assert!(result.is_ok());

        sleep(Duration::from_millis(DELAY_MS * 3)).await;
        assert_eq!(*index.borrow_and_update(), 0);
        // The publisher is gone, so no further change can ever arrive
        assert!(index.changed().await.is_err());
        assert!(!handle.send(RotatorCommand::Next));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_service_is_idle() {
        let (service, handle) = RotatorService::new(0, &config());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(service.run(shutdown_rx));

        handle.send(RotatorCommand::Next);
        sleep(Duration::from_millis(DELAY_MS * 2)).await;
        assert_eq!(handle.current_index(), 0);

        shutdown_tx.send(true).unwrap();
        assert!(timeout(Duration::from_secs(1), task).await.is_ok());
    }
}
