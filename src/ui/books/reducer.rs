use crate::catalog::filter_catalog;
use crate::ui::books::intent::BooksIntent;
use crate::ui::books::state::{BooksState, CatalogPhase};
use crate::ui::mvi::Reducer;

pub struct BooksReducer;

impl Reducer for BooksReducer {
    type State = BooksState;
    type Intent = BooksIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            BooksIntent::LoadStarted { generation } => {
                // A refresh keeps the current list on screen while the new
                // snapshot is in flight.
                state.phase = CatalogPhase::Loading;
                state.generation = generation;
            }
            BooksIntent::CatalogLoaded { generation, result } => {
                if generation != state.generation {
                    return state;
                }
                match result {
                    Ok(books) => {
                        state.books = books;
                        state.phase = CatalogPhase::Ready;
                        refilter(&mut state);
                    }
                    Err(message) => state.phase = CatalogPhase::Failed(message),
                }
            }
            BooksIntent::QueryInput(ch) => {
                state.query.push(ch);
                refilter(&mut state);
            }
            BooksIntent::QueryBackspace => {
                state.query.pop();
                refilter(&mut state);
            }
            BooksIntent::QueryClear => {
                state.query.clear();
                refilter(&mut state);
            }
            BooksIntent::CategoryNext => {
                state.category = state.category.next();
                refilter(&mut state);
            }
            BooksIntent::CategoryPrev => {
                state.category = state.category.prev();
                refilter(&mut state);
            }
            BooksIntent::SelectNext => {
                if state.selected + 1 < state.visible.len() {
                    state.selected += 1;
                }
            }
            BooksIntent::SelectPrev => {
                state.selected = state.selected.saturating_sub(1);
            }
        }
        state
    }
}

// Re-run the filter engine and reset the cursor to the top of the new list.
fn refilter(state: &mut BooksState) {
    state.visible = filter_catalog(&state.books, &state.query, state.category);
    state.selected = 0;
}
