use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginFormState, LoginFocus};
use crate::ui::mvi::Reducer;
use crate::validation::validate_login;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.submitting && !matches!(intent, LoginIntent::Reset) {
            return state;
        }

        let mut state = state;
        match intent {
            LoginIntent::Input(ch) => {
                // Editing a field clears its displayed error immediately.
                state.errors.clear(state.focus.field_id());
                field_mut(&mut state).push(ch);
            }
            LoginIntent::Backspace => {
                state.errors.clear(state.focus.field_id());
                field_mut(&mut state).pop();
            }
            LoginIntent::FocusNext => state.focus = state.focus.next(),
            LoginIntent::FocusPrev => state.focus = state.focus.prev(),
            LoginIntent::Submit => {
                state.errors = validate_login(&state.fields);
                state.submitting = state.errors.is_valid();
            }
            LoginIntent::Reset => state = LoginFormState::default(),
        }
        state
    }
}

fn field_mut(state: &mut LoginFormState) -> &mut String {
    match state.focus {
        LoginFocus::Email => &mut state.fields.email,
        LoginFocus::Password => &mut state.fields.password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldId;

    fn type_str(mut state: LoginFormState, text: &str) -> LoginFormState {
        for ch in text.chars() {
            state = LoginReducer::reduce(state, LoginIntent::Input(ch));
        }
        state
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let state = type_str(LoginFormState::default(), "a@b.com");
        assert_eq!(state.fields.email, "a@b.com");
        assert!(state.fields.password.is_empty());

        let state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        let state = type_str(state, "secret");
        assert_eq!(state.fields.password, "secret");
    }

    #[test]
    fn submit_with_empty_fields_reports_both_errors() {
        let state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Submit);
        assert!(!state.submitting);
        assert_eq!(state.errors.get(FieldId::Email), Some("Email is required"));
        assert_eq!(
            state.errors.get(FieldId::Password),
            Some("Password is required")
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Submit);
        let state = LoginReducer::reduce(state, LoginIntent::Input('a'));
        assert_eq!(state.errors.get(FieldId::Email), None);
        assert!(state.errors.get(FieldId::Password).is_some());
    }

    #[test]
    fn backspace_also_clears_the_error() {
        let state = type_str(LoginFormState::default(), "x");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        let state = LoginReducer::reduce(state, LoginIntent::Backspace);
        assert_eq!(state.errors.get(FieldId::Email), None);
        assert!(state.fields.email.is_empty());
    }

    #[test]
    fn valid_submit_marks_submitting() {
        let state = type_str(LoginFormState::default(), "a@b.com");
        let state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        let state = type_str(state, "abcdef");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(state.submitting);
        assert!(state.errors.is_valid());
    }

    #[test]
    fn input_is_ignored_while_submitting() {
        let state = type_str(LoginFormState::default(), "a@b.com");
        let state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        let state = type_str(state, "abcdef");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);

        let state = LoginReducer::reduce(state, LoginIntent::Input('z'));
        assert_eq!(state.fields.password, "abcdef");

        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(state.submitting);
    }

    #[test]
    fn reset_clears_everything_even_mid_submit() {
        let state = type_str(LoginFormState::default(), "a@b.com");
        let state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        let state = type_str(state, "abcdef");
        let state = LoginReducer::reduce(state, LoginIntent::Submit);
        let state = LoginReducer::reduce(state, LoginIntent::Reset);
        assert_eq!(state, LoginFormState::default());
    }
}
