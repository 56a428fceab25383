use crate::ui::app::{App, Screen, Tab};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notice::render_notice;
use crate::ui::views;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let user = app.session().map(|s| s.display_name.as_str());
    frame.render_widget(
        Header::new().widget(app.screen(), app.tab(), user),
        header,
    );

    match app.screen() {
        Screen::Login => views::login::render(frame, body, app),
        Screen::Register => views::register::render(frame, body, app),
        Screen::Tabs => match app.tab() {
            Tab::Home => views::home::render(frame, body, app),
            Tab::Books => views::books::render(frame, body, app),
        },
    }

    frame.render_widget(
        Footer::new().widget(footer, app.screen(), app.tab()),
        footer,
    );

    // Notices sit above everything, including the profile menu.
    if let Some(notice) = app.notice() {
        render_notice(frame, notice);
    }
}
