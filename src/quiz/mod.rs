//! Quiz core: data model, session state and the transition reducer.

mod intent;
mod reducer;
mod state;
mod types;

pub use intent::QuizIntent;
pub use reducer::{QuizReducer, FALLBACK_ARCHETYPE, FALLBACK_FEEDBACK};
pub use state::{Phase, SessionState};
pub use types::{Question, QuizResult};
