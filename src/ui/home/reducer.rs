use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::{DashboardPhase, HomeState, QUICK_ACTIONS};
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            HomeIntent::LoadStarted => state.phase = DashboardPhase::Loading,
            HomeIntent::DashboardLoaded { featured, stats } => {
                state.featured = featured;
                state.stats = stats;
                state.phase = DashboardPhase::Ready;
            }
            HomeIntent::ActionNext => {
                state.action_focus = (state.action_focus + 1) % QUICK_ACTIONS.len();
            }
            HomeIntent::ActionPrev => {
                state.action_focus =
                    (state.action_focus + QUICK_ACTIONS.len() - 1) % QUICK_ACTIONS.len();
            }
            HomeIntent::ToggleMenu => state.menu_open = !state.menu_open,
            HomeIntent::CloseMenu => state.menu_open = false,
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReadingStats;

    #[test]
    fn dashboard_load_fills_stats_and_featured() {
        let state = HomeReducer::reduce(HomeState::default(), HomeIntent::LoadStarted);
        assert_eq!(state.phase, DashboardPhase::Loading);

        let state = HomeReducer::reduce(
            state,
            HomeIntent::DashboardLoaded {
                featured: vec![],
                stats: ReadingStats {
                    total_books: 1247,
                    read_books: 23,
                    favorite_genre: "Science Fiction".to_string(),
                },
            },
        );
        assert_eq!(state.phase, DashboardPhase::Ready);
        assert_eq!(state.stats.total_books, 1247);
    }

    #[test]
    fn action_focus_wraps_both_ways() {
        let state = HomeReducer::reduce(HomeState::default(), HomeIntent::ActionPrev);
        assert_eq!(state.action_focus, QUICK_ACTIONS.len() - 1);

        let state = HomeReducer::reduce(state, HomeIntent::ActionNext);
        assert_eq!(state.action_focus, 0);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let state = HomeReducer::reduce(HomeState::default(), HomeIntent::ToggleMenu);
        assert!(state.menu_open);
        let state = HomeReducer::reduce(state, HomeIntent::CloseMenu);
        assert!(!state.menu_open);
        let state = HomeReducer::reduce(state, HomeIntent::CloseMenu);
        assert!(!state.menu_open);
    }
}
