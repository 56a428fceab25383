mod common;

use common::{sample_catalog, titles};
use paperback::catalog::{Category, CategoryFilter};
use paperback::ui::books::{BooksIntent, BooksReducer, BooksState, CatalogPhase};
use paperback::ui::mvi::Reducer;

fn loaded() -> BooksState {
    let state = BooksReducer::reduce(
        BooksState::default(),
        BooksIntent::LoadStarted { generation: 1 },
    );
    BooksReducer::reduce(
        state,
        BooksIntent::CatalogLoaded {
            generation: 1,
            result: Ok(sample_catalog()),
        },
    )
}

fn type_query(mut state: BooksState, text: &str) -> BooksState {
    for ch in text.chars() {
        state = BooksReducer::reduce(state, BooksIntent::QueryInput(ch));
    }
    state
}

#[test]
fn first_load_shows_the_whole_catalog() {
    let state = loaded();
    assert_eq!(state.phase, CatalogPhase::Ready);
    assert_eq!(state.visible.len(), 6);
    assert_eq!(state.visible, state.books);
}

#[test]
fn search_narrows_as_the_user_types() {
    let state = type_query(loaded(), "gat");
    assert_eq!(titles(&state.visible), ["The Great Gatsby"]);

    // Deleting back to nothing restores everything.
    let mut state = state;
    for _ in 0.."gat".len() {
        state = BooksReducer::reduce(state, BooksIntent::QueryBackspace);
    }
    assert_eq!(state.visible.len(), 6);
}

#[test]
fn category_and_query_compose() {
    let mut state = loaded();
    // Cycle right once: All -> Fiction.
    state = BooksReducer::reduce(state, BooksIntent::CategoryNext);
    assert_eq!(state.category, CategoryFilter::Only(Category::Fiction));
    assert_eq!(state.visible.len(), 2);

    let state = type_query(state, "mockingbird");
    assert_eq!(titles(&state.visible), ["To Kill a Mockingbird"]);
}

#[test]
fn no_results_is_an_ordinary_state() {
    let state = type_query(loaded(), "zz-nothing");
    assert_eq!(state.phase, CatalogPhase::Ready);
    assert!(state.visible.is_empty());
    assert!(state.selected_book().is_none());
}

#[test]
fn overlapping_loads_resolve_to_the_newest_generation() {
    // Two loads race: the reply for generation 1 lands after generation 2
    // was requested, then generation 2's reply lands.
    let state = BooksReducer::reduce(
        BooksState::default(),
        BooksIntent::LoadStarted { generation: 1 },
    );
    let state = BooksReducer::reduce(state, BooksIntent::LoadStarted { generation: 2 });

    let state = BooksReducer::reduce(
        state,
        BooksIntent::CatalogLoaded {
            generation: 1,
            result: Ok(vec![]),
        },
    );
    assert_eq!(state.phase, CatalogPhase::Loading);

    let state = BooksReducer::reduce(
        state,
        BooksIntent::CatalogLoaded {
            generation: 2,
            result: Ok(sample_catalog()),
        },
    );
    assert_eq!(state.phase, CatalogPhase::Ready);
    assert_eq!(state.books.len(), 6);
}

#[test]
fn refresh_failure_keeps_the_stale_catalog_visible() {
    let state = loaded();
    let state = BooksReducer::reduce(state, BooksIntent::LoadStarted { generation: 2 });
    let state = BooksReducer::reduce(
        state,
        BooksIntent::CatalogLoaded {
            generation: 2,
            result: Err("Failed to load books".to_string()),
        },
    );
    assert!(matches!(state.phase, CatalogPhase::Failed(_)));
    assert_eq!(state.visible.len(), 6);
}

#[test]
fn selection_follows_the_visible_list() {
    let mut state = loaded();
    state = BooksReducer::reduce(state, BooksIntent::SelectNext);
    state = BooksReducer::reduce(state, BooksIntent::SelectNext);
    assert_eq!(state.selected_book().map(|b| b.title.as_str()), Some("Steve Jobs"));

    // Narrowing the list resets the cursor to the top match.
    let state = type_query(state, "sapiens");
    assert_eq!(state.selected_book().map(|b| b.title.as_str()), Some("Sapiens"));
}
