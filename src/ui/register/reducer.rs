use crate::ui::mvi::Reducer;
use crate::ui::register::intent::RegisterIntent;
use crate::ui::register::state::{RegisterFocus, RegisterFormState};
use crate::validation::validate_registration;

pub struct RegisterReducer;

impl Reducer for RegisterReducer {
    type State = RegisterFormState;
    type Intent = RegisterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.submitting && !matches!(intent, RegisterIntent::Reset) {
            return state;
        }

        let mut state = state;
        match intent {
            RegisterIntent::Input(ch) => {
                state.errors.clear(state.focus.field_id());
                field_mut(&mut state).push(ch);
            }
            RegisterIntent::Backspace => {
                state.errors.clear(state.focus.field_id());
                field_mut(&mut state).pop();
            }
            RegisterIntent::FocusNext => state.focus = state.focus.next(),
            RegisterIntent::FocusPrev => state.focus = state.focus.prev(),
            RegisterIntent::Submit => {
                state.errors = validate_registration(&state.fields);
                state.submitting = state.errors.is_valid();
            }
            RegisterIntent::Reset => state = RegisterFormState::default(),
        }
        state
    }
}

fn field_mut(state: &mut RegisterFormState) -> &mut String {
    match state.focus {
        RegisterFocus::FullName => &mut state.fields.full_name,
        RegisterFocus::Email => &mut state.fields.email,
        RegisterFocus::Password => &mut state.fields.password,
        RegisterFocus::ConfirmPassword => &mut state.fields.confirm_password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldId;

    fn type_str(mut state: RegisterFormState, text: &str) -> RegisterFormState {
        for ch in text.chars() {
            state = RegisterReducer::reduce(state, RegisterIntent::Input(ch));
        }
        state
    }

    fn filled_form() -> RegisterFormState {
        let state = type_str(RegisterFormState::default(), "Ada Lovelace");
        let state = RegisterReducer::reduce(state, RegisterIntent::FocusNext);
        let state = type_str(state, "ada@example.com");
        let state = RegisterReducer::reduce(state, RegisterIntent::FocusNext);
        let state = type_str(state, "Abcdefgh1");
        let state = RegisterReducer::reduce(state, RegisterIntent::FocusNext);
        type_str(state, "Abcdefgh1")
    }

    #[test]
    fn typing_follows_focus_through_all_fields() {
        let state = filled_form();
        assert_eq!(state.fields.full_name, "Ada Lovelace");
        assert_eq!(state.fields.email, "ada@example.com");
        assert_eq!(state.fields.password, "Abcdefgh1");
        assert_eq!(state.fields.confirm_password, "Abcdefgh1");
    }

    #[test]
    fn submit_on_empty_form_flags_every_field() {
        let state = RegisterReducer::reduce(RegisterFormState::default(), RegisterIntent::Submit);
        assert!(!state.submitting);
        assert_eq!(state.errors.iter().count(), 4);
    }

    #[test]
    fn editing_clears_only_the_edited_fields_error() {
        let state = RegisterReducer::reduce(RegisterFormState::default(), RegisterIntent::Submit);
        let state = RegisterReducer::reduce(state, RegisterIntent::FocusNext);
        let state = RegisterReducer::reduce(state, RegisterIntent::Input('a'));
        assert_eq!(state.errors.get(FieldId::Email), None);
        assert!(state.errors.get(FieldId::FullName).is_some());
        assert!(state.errors.get(FieldId::Password).is_some());
        assert!(state.errors.get(FieldId::ConfirmPassword).is_some());
    }

    #[test]
    fn valid_submit_marks_submitting() {
        let state = RegisterReducer::reduce(filled_form(), RegisterIntent::Submit);
        assert!(state.submitting);
        assert!(state.errors.is_valid());
    }

    #[test]
    fn mismatched_confirm_blocks_submission() {
        let state = filled_form();
        let state = RegisterReducer::reduce(state, RegisterIntent::Input('x'));
        let state = RegisterReducer::reduce(state, RegisterIntent::Submit);
        assert!(!state.submitting);
        assert_eq!(
            state.errors.get(FieldId::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn reset_returns_to_the_default_state() {
        let state = RegisterReducer::reduce(filled_form(), RegisterIntent::Submit);
        let state = RegisterReducer::reduce(state, RegisterIntent::Reset);
        assert_eq!(state, RegisterFormState::default());
    }
}
