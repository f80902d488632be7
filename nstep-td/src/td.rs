//! On-policy n-step TD prediction.
mod base;
mod config;
pub use base::{on_policy_n_step_td, NStepTd};
pub use config::NStepTdConfig;
