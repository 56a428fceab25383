mod intent;
mod reducer;
mod state;

pub use intent::RegisterIntent;
pub use reducer::RegisterReducer;
pub use state::{RegisterFocus, RegisterFormState};
