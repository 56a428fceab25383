//! Unidirectional state management for the UI layer.
//!
//! Every screen keeps its state in a plain value, describes what can happen
//! to it as an intent enum, and folds intents into new states through a pure
//! reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers may call into the pure engines (catalog filtering, form
//! validation) but never touch channels, clocks, or the terminal; those
//! live in the [`App`](crate::ui::app::App) aggregate that dispatches
//! intents.

/// Marker for intent types: user actions, backend replies, navigation.
pub trait Intent: Send + 'static {}

/// Marker for screen state types.
///
/// States are immutable values: reducers consume the old one and hand back
/// a new one, and `PartialEq` lets callers detect that nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Folds intents into states.
///
/// `reduce` is the only place a screen's state transitions happen, and it
/// must stay a pure function of its two arguments.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
