use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler, TICK_RATE};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// The synchronous draw-and-dispatch loop. Returns when the user quits or
/// the event channel dies.
pub fn run(app: &mut App, events: &EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    // A persisted token routes straight past the login screen.
    app.on_session_changed();

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui reflows from the fresh frame size on the next draw
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::CatalogChanged) => app.on_catalog_changed(),
            Ok(AppEvent::SessionChanged) => app.on_session_changed(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
