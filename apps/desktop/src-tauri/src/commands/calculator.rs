//! # Calculator Commands
//!
//! Tauri commands that drive the calculator.
//!
//! ## Key Press Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Key Press Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Button  │────►│ parse_key│────►│  reduce  │────►│  render  │       │
//! │  │  label   │     │ (Action) │     │ (state)  │     │ (display)│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                  unknown label                                          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 VALIDATION_ERROR ─────────► (state untouched)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use calc_core::{keypad_buttons, parse_key, Action, KeypadButton};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CalculatorResponse, CalculatorSession, ConfigState};

/// Gets the current calculator state and its rendered rows.
///
/// ## Returns
/// `invoke('get_calculator') → { state: {...}, display: {...} }`
#[tauri::command]
pub fn get_calculator(
    session: State<'_, CalculatorSession>,
    config: State<'_, ConfigState>,
) -> CalculatorResponse {
    debug!("get_calculator command");
    current(&session, &config)
}

/// Applies a typed action.
///
/// ## Example
/// ```text
/// invoke('dispatch_action', {
///   action: { type: 'choose-operation', payload: { operation: '÷' } }
/// })
/// ```
#[tauri::command]
pub fn dispatch_action(
    session: State<'_, CalculatorSession>,
    config: State<'_, ConfigState>,
    action: Action,
) -> CalculatorResponse {
    debug!(?action, "dispatch_action command");
    dispatch(&session, &config, action)
}

/// Applies the action bound to a keypad button.
///
/// ## Errors
/// - `VALIDATION_ERROR`: the label is not one of the keypad buttons
#[tauri::command]
pub fn press_key(
    session: State<'_, CalculatorSession>,
    config: State<'_, ConfigState>,
    label: String,
) -> Result<CalculatorResponse, ApiError> {
    debug!(label = %label, "press_key command");
    press(&session, &config, &label)
}

/// Gets the button grid, row by row.
///
/// ## Returns
/// `invoke('get_keypad') → [{ label: 'AC', wide: true }, { label: 'DEL', wide: false }, ...]`
///
/// Each `label` is what `press_key` expects back.
#[tauri::command]
pub fn get_keypad() -> Vec<KeypadButton> {
    debug!("get_keypad command");
    keypad_buttons()
}

fn current(session: &CalculatorSession, config: &ConfigState) -> CalculatorResponse {
    session.with_state(|state| CalculatorResponse::from_state(state, &config.display))
}

fn dispatch(
    session: &CalculatorSession,
    config: &ConfigState,
    action: Action,
) -> CalculatorResponse {
    let state = session.dispatch(action);
    CalculatorResponse::from_state(&state, &config.display)
}

fn press(
    session: &CalculatorSession,
    config: &ConfigState,
    label: &str,
) -> Result<CalculatorResponse, ApiError> {
    let action = parse_key(label)?;
    Ok(dispatch(session, config, action))
}
