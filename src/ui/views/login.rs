use crate::ui::app::App;
use crate::ui::layout::centered_column;
use crate::ui::login::LoginFocus;
use crate::ui::theme::{ACCENT, MUTED_TEXT};
use crate::ui::views::form::{render_submit_row, render_text_field, TextField, FIELD_HEIGHT};
use crate::validation::FieldId;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FORM_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let column = centered_column(body, FORM_WIDTH);
    let form = app.login_form();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1), // submit
            Constraint::Length(1),
            Constraint::Length(1), // sign-up link
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Book Store",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Welcome back! Please sign in to your account",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        rows[2],
    );

    render_text_field(
        frame,
        rows[4],
        TextField {
            label: "Email",
            value: &form.fields.email,
            placeholder: "Enter your email",
            focused: form.focus == LoginFocus::Email,
            error: form.errors.get(FieldId::Email),
            masked: false,
        },
    );
    render_text_field(
        frame,
        rows[5],
        TextField {
            label: "Password",
            value: &form.fields.password,
            placeholder: "Enter your password",
            focused: form.focus == LoginFocus::Password,
            error: form.errors.get(FieldId::Password),
            masked: true,
        },
    );

    render_submit_row(frame, rows[6], "Sign In", "Signing In...", form.submitting);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Don't have an account? Sign Up with Ctrl+N",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        rows[8],
    );
}
