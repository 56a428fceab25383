//! Per-screen rendering. Views are read-only over the app state; all
//! mutation goes through intents.

pub mod books;
pub mod form;
pub mod home;
pub mod login;
pub mod register;
