//! Form validation: pure checks over raw field values.
//!
//! Validators never fail and never mutate their inputs; they return a
//! field-keyed error map, and an empty map means the form may be submitted.
//! Clearing a displayed error when the user edits a field is the owning
//! screen's job, not something that happens here.

mod email;
mod fields;
mod login;
mod register;

pub use email::is_valid_email;
pub use fields::{FieldErrors, FieldId};
pub use login::{validate_login, LoginFields};
pub use register::{validate_registration, RegistrationFields};
