//! slide16 terminal front-end.
//!
//! The concrete render collaborator and input source for the engine:
//! arrow keys or WASD slide the board, `r` restarts, `q` or Esc quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use slide16_core::{Direction, GameController};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod view;

use view::TerminalView;

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so they don't fight the board.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting slide16");

    let view = TerminalView::new()?;
    let mut controller = GameController::new(view);

    // Synchronous loop: each key event is fully processed (slide, merge,
    // spawn, terminal check, render) before the next one is read.
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let direction = match key.code {
                    KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
                    KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
                    KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
                    KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
                    KeyCode::Char('r') => {
                        controller.restart();
                        debug!("session restarted");
                        continue;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    // Unrecognized input is a no-op.
                    _ => None,
                };
                if let Some(direction) = direction {
                    let events = controller.handle_direction(direction);
                    debug!(?direction, events = events.len(), "direction handled");
                }
            }
            Event::Resize(_, _) => controller.refresh(),
            _ => {}
        }
    }

    info!("Goodbye");
    Ok(())
}
