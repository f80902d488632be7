//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum TdError {
    /// A transition refers to a state outside of the table.
    #[error("State {state} is out of range (number of states = {n_states})")]
    StateOutOfRange {
        /// The offending state id.
        state: usize,
        /// The number of states of the table.
        n_states: usize,
    },

    /// A transition refers to an action outside of the table.
    #[error("Action {action} is out of range (number of actions = {n_actions})")]
    ActionOutOfRange {
        /// The offending action id.
        action: usize,
        /// The number of actions of the table.
        n_actions: usize,
    },

    /// The number of steps must be at least 1.
    #[error("Invalid number of steps: {0}")]
    InvalidStepCount(usize),

    /// The learning rate must be positive and finite.
    #[error("Invalid learning rate: {0}")]
    InvalidLearningRate(f64),

    /// The discount factor must be in `[0, 1]`.
    #[error("Invalid discount factor: {0}")]
    InvalidDiscountFactor(f64),

    /// The exploitation probability must be in `[0, 1]`.
    #[error("Invalid epsilon: {0}")]
    InvalidEpsilon(f64),

    /// Tables need at least one state and one action.
    #[error("Empty table: {n_states} states, {n_actions} actions")]
    EmptyTable {
        /// Requested number of states.
        n_states: usize,
        /// Requested number of actions.
        n_actions: usize,
    },

    /// The behavior policy cannot have produced the recorded action.
    #[error("Behavior policy gives zero probability to action {action} in state {state}")]
    ZeroBehaviorProbability {
        /// State of the transition.
        state: usize,
        /// Action of the transition.
        action: usize,
    },

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}

/// Result type of the library.
pub type Result<T> = std::result::Result<T, TdError>;
