mod common;

use common::{fill_login, fill_registration};
use paperback::data::DataEvent;
use paperback::ui::app::{App, Screen, Tab};
use paperback::ui::books::CatalogPhase;
use paperback::ui::home::DashboardPhase;
use paperback::validation::FieldId;

#[test]
fn rejected_login_shows_field_errors_and_stays_put() {
    let mut app = App::new();
    fill_login(&mut app, "not-an-email", "123");
    app.submit_login();

    assert_eq!(app.screen(), Screen::Login);
    assert!(!app.login_form().submitting);
    assert_eq!(
        app.login_form().errors.get(FieldId::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        app.login_form().errors.get(FieldId::Password),
        Some("Password must be at least 6 characters long")
    );
}

#[test]
fn sign_in_round_trip_lands_on_home_with_a_session() {
    let mut app = App::new();
    fill_login(&mut app, "jane.doe@example.com", "abcdef");
    app.submit_login();
    assert!(app.login_form().submitting);

    // Simulated backend reply.
    app.on_data(DataEvent::LoginAccepted {
        email: "jane.doe@example.com".to_string(),
    });

    assert_eq!(app.screen(), Screen::Tabs);
    assert_eq!(app.tab(), Tab::Home);
    assert_eq!(
        app.session().map(|s| s.display_name.as_str()),
        Some("Jane Doe")
    );
    assert_eq!(app.notice().map(|n| n.body.as_str()), Some("Login successful!"));
    assert_eq!(app.home().phase, DashboardPhase::Loading);
}

#[test]
fn registration_round_trip_returns_to_sign_in() {
    let mut app = App::new();
    app.show_register();
    fill_registration(
        &mut app,
        "Jane Doe",
        "jane@example.com",
        "Abcdefgh1",
        "Abcdefgh1",
    );
    app.submit_registration();
    assert!(app.register_form().submitting);

    app.on_data(DataEvent::RegistrationAccepted);

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(
        app.notice().map(|n| n.body.as_str()),
        Some("Account created successfully! Please sign in.")
    );
    // The form is empty for the next visit.
    assert!(app.register_form().fields.full_name.is_empty());
}

#[test]
fn invalid_registration_never_reaches_the_backend_reply_stage() {
    let mut app = App::new();
    app.show_register();
    fill_registration(&mut app, "J", "jane@example.com", "weakpass", "weakpass");
    app.submit_registration();

    assert!(!app.register_form().submitting);
    assert!(app
        .register_form()
        .errors
        .get(FieldId::FullName)
        .is_some());
    assert!(app.register_form().errors.get(FieldId::Password).is_some());
}

#[test]
fn logout_returns_to_sign_in_and_forgets_everything() {
    let mut app = App::new();
    fill_login(&mut app, "jane@example.com", "abcdef");
    app.submit_login();
    app.on_data(DataEvent::LoginAccepted {
        email: "jane@example.com".to_string(),
    });
    app.dismiss_notice();

    app.select_tab(Tab::Books);
    assert!(app.books().is_loading());

    app.logout();
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.session().is_none());
    assert_eq!(app.books().phase, CatalogPhase::Idle);
    assert_eq!(app.home().phase, DashboardPhase::Idle);
}
