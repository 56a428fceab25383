//! Shared fixtures for integration tests.

#![allow(dead_code)]

use paperback::catalog::Book;
use paperback::data::BookStore;
use paperback::ui::app::App;
use paperback::ui::login::LoginIntent;
use paperback::ui::register::RegisterIntent;

/// The six-book sample catalog the mock backend serves.
pub fn sample_catalog() -> Vec<Book> {
    BookStore::default()
        .catalog()
        .expect("built-in catalog always loads")
}

pub fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

/// Type into the login form, `Tab`bing between the two fields.
pub fn fill_login(app: &mut App, email: &str, password: &str) {
    for ch in email.chars() {
        app.dispatch_login(LoginIntent::Input(ch));
    }
    app.dispatch_login(LoginIntent::FocusNext);
    for ch in password.chars() {
        app.dispatch_login(LoginIntent::Input(ch));
    }
}

/// Type into the registration form, `Tab`bing through all four fields.
pub fn fill_registration(
    app: &mut App,
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) {
    for (idx, text) in [full_name, email, password, confirm].iter().enumerate() {
        if idx > 0 {
            app.dispatch_register(RegisterIntent::FocusNext);
        }
        for ch in text.chars() {
            app.dispatch_register(RegisterIntent::Input(ch));
        }
    }
}
