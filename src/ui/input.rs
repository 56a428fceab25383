use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen, Tab};
use crate::ui::books::BooksIntent;
use crate::ui::home::HomeIntent;
use crate::ui::login::LoginIntent;
use crate::ui::register::RegisterIntent;

/// Route one key press to the active screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // An open notice swallows everything until dismissed.
    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    match app.screen() {
        Screen::Login => login_keys(app, key),
        Screen::Register => register_keys(app, key),
        Screen::Tabs => tabs_keys(app, key),
    }
}

fn login_keys(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.show_register();
        return;
    }
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_login(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn register_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.show_login(),
        KeyCode::Enter => app.submit_registration(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_register(RegisterIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_register(RegisterIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_register(RegisterIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_register(RegisterIntent::Input(ch)),
        _ => {}
    }
}

fn tabs_keys(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Tab) {
        app.toggle_tab();
        return;
    }
    match app.tab() {
        Tab::Home => home_keys(app, key),
        Tab::Books => books_keys(app, key),
    }
}

fn home_keys(app: &mut App, key: KeyEvent) {
    if app.home().menu_open {
        match key.code {
            // The menu holds a single entry: Logout.
            KeyCode::Enter => {
                app.dispatch_home(HomeIntent::CloseMenu);
                app.logout();
            }
            KeyCode::Esc => app.dispatch_home(HomeIntent::CloseMenu),
            _ if is_ctrl_char(key, 'p') => app.dispatch_home(HomeIntent::CloseMenu),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'p') {
        app.dispatch_home(HomeIntent::ToggleMenu);
        return;
    }
    match key.code {
        KeyCode::Right => app.dispatch_home(HomeIntent::ActionNext),
        KeyCode::Left => app.dispatch_home(HomeIntent::ActionPrev),
        KeyCode::Enter => app.activate_quick_action(),
        _ => {}
    }
}

fn books_keys(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.refresh_catalog();
        return;
    }
    match key.code {
        KeyCode::Up => app.dispatch_books(BooksIntent::SelectPrev),
        KeyCode::Down => app.dispatch_books(BooksIntent::SelectNext),
        KeyCode::Left => app.dispatch_books(BooksIntent::CategoryPrev),
        KeyCode::Right => app.dispatch_books(BooksIntent::CategoryNext),
        KeyCode::Esc => app.dispatch_books(BooksIntent::QueryClear),
        KeyCode::Enter => app.add_to_cart(),
        KeyCode::Backspace => app.dispatch_books(BooksIntent::QueryBackspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_books(BooksIntent::QueryInput(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}
