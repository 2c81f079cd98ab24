//! Model-View-Intent (MVI) architecture primitives.
//!
//! Both the resource stores and the page-local UI state (editors, confirm
//! prompts) are driven through these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a partition of app state
//! - **Intent**: User actions or settlement events from the API worker
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
#[macro_export]
macro_rules! dispatch_mvi {
    ($target:expr, $reducer:ty, $intent:expr) => {
        $target = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $target),
            $intent,
        );
    };
}
