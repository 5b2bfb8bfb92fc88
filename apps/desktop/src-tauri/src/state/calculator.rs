//! # Calculator State
//!
//! Holds the live calculator for the window.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because Tauri commands can run
//! concurrently and each key press must see the result of the previous one.
//!
//! ## Key Press Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Session                                   │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           State Change          │
//! │  ───────────────          ─────────────           ────────────          │
//! │                                                                         │
//! │  Click "7" ──────────────► press_key("7") ──────► reduce(AddDigit 7)    │
//! │                                                                         │
//! │  Typed action ───────────► dispatch_action() ───► reduce(action)        │
//! │                                                                         │
//! │  Window opens ───────────► get_calculator() ────► (read only)           │
//! │                                                                         │
//! │  NOTE: reduce() builds a new state; the lock is held only to swap it.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calc_core::{reduce, Action, CalculatorState, DisplayOptions, DisplayView};
use serde::{Deserialize, Serialize};

/// What every calculator command sends back to the frontend.
///
/// ```json
/// {
///   "state": { "currentOperand": "3", "previousOperand": "1234", "operation": "+", "overwrite": false },
///   "display": { "previousOperand": "1,234", "operation": "+", "currentOperand": "3" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    /// Raw reducer state
    pub state: CalculatorState,

    /// Formatted output rows
    pub display: DisplayView,
}

impl CalculatorResponse {
    pub fn from_state(state: &CalculatorState, options: &DisplayOptions) -> Self {
        CalculatorResponse {
            state: state.clone(),
            display: DisplayView::render(state, options),
        }
    }
}

/// Tauri-managed calculator state.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    state: Arc<Mutex<CalculatorState>>,
}

impl CalculatorSession {
    /// Creates a session with the initial (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let empty = session.with_state(|s| s.is_empty());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorState) -> R,
    {
        f(&self.lock())
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&self, action: Action) -> CalculatorState {
        let mut state = self.lock();
        let next = reduce(&state, action);
        *state = next.clone();
        next
    }

    // The state is replaced whole on every dispatch, so a panic elsewhere
    // cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, CalculatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
