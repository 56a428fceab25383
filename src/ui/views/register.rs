use crate::ui::app::App;
use crate::ui::layout::centered_column;
use crate::ui::register::RegisterFocus;
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
    let form = app.register_form();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1), // submit
            Constraint::Length(1),
            Constraint::Length(1), // sign-in link
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Join BookStore",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Create your account to start exploring books",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        rows[2],
    );

    render_text_field(
        frame,
        rows[4],
        TextField {
            label: "Full Name",
            value: &form.fields.full_name,
            placeholder: "Enter your full name",
            focused: form.focus == RegisterFocus::FullName,
            error: form.errors.get(FieldId::FullName),
            masked: false,
        },
    );
    render_text_field(
        frame,
        rows[5],
        TextField {
            label: "Email",
            value: &form.fields.email,
            placeholder: "Enter your email",
            focused: form.focus == RegisterFocus::Email,
            error: form.errors.get(FieldId::Email),
            masked: false,
        },
    );
    render_text_field(
        frame,
        rows[6],
        TextField {
            label: "Password",
            value: &form.fields.password,
            placeholder: "Create a strong password",
            focused: form.focus == RegisterFocus::Password,
            error: form.errors.get(FieldId::Password),
            masked: true,
        },
    );
    render_text_field(
        frame,
        rows[7],
        TextField {
            label: "Confirm Password",
            value: &form.fields.confirm_password,
            placeholder: "Confirm your password",
            focused: form.focus == RegisterFocus::ConfirmPassword,
            error: form.errors.get(FieldId::ConfirmPassword),
            masked: true,
        },
    );

    render_submit_row(
        frame,
        rows[8],
        "Create Account",
        "Creating Account...",
        form.submitting,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Already have an account? Sign In with Esc",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        rows[10],
    );
}
