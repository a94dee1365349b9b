//! Unidirectional data flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is the only place state transitions happen; everything
//! with a side effect (provider calls, clipboard) lives outside it and
//! reacts to the transitions it produces.

/// Marker trait for state objects: cloneable, comparable, complete
/// enough to render a view from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and system events.
pub trait Intent: Send + 'static {}

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
