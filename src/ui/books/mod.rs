mod intent;
mod reducer;
mod state;

pub use intent::BooksIntent;
pub use reducer::BooksReducer;
pub use state::{BooksState, CatalogPhase};
