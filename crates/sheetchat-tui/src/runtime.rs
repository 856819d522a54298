use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Async stream of terminal events
    let mut event_stream = EventStream::new();

    // Tick interval for draining worker updates between key presses
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    while app.running {
        app.drain_updates();

        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            if app.pending_quit {
                                // Second Ctrl+C quits immediately
                                app.quit();
                            } else {
                                // First Ctrl+C arms the quit warning
                                app.pending_quit = true;
                            }
                        } else {
                            // Any other key clears pending quit state
                            app.pending_quit = false;
                            handle_key(app, key);
                        }
                    }
                }
            }

            _ = tick_interval.tick() => {}
        }
    }
    Ok(())
}
