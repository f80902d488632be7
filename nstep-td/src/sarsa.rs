//! Off-policy n-step SARSA.
mod base;
mod config;
pub use base::{off_policy_n_step_sarsa, NStepSarsa, SarsaOutput};
pub use config::{NStepSarsaConfig, TargetPolicy, DEFAULT_EPSILON};
