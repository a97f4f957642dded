use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the interactive quote screen until the user quits.
///
/// Redraws after every key, resize, tick and published state change.
pub async fn run(app: &mut App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(tick_rate);
    let mut state_rx = app.subscribe();
    app.start();

    loop {
        state_rx.borrow_and_update();
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => app.on_key(key),
                Some(AppEvent::Resize(cols, rows)) => {
                    tracing::debug!(cols, rows, "Terminal resized");
                }
                Some(AppEvent::Tick) => {}
                None => break,
            },
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    events.stop();
    drop(guard);
    Ok(())
}
