use crate::ui::app::{App, Focus, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // A login alert blocks everything behind it until dismissed.
    if app.has_alert() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_alert();
        }
        return;
    }

    match app.screen() {
        Screen::Login => handle_login_key(app, key),
        Screen::Products => handle_products_key(app, key),
        Screen::Details => handle_details_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_login_field(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.login_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.login_input(ch),
        _ => {}
    }
}

fn handle_products_key(app: &mut App, key: KeyEvent) {
    if app.focus() == Focus::Search {
        match key.code {
            KeyCode::Esc => app.leave_search(),
            KeyCode::Enter => app.submit_search(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_input(ch)
            }
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.pop_details(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
