#![warn(missing_docs)]
//! Core types for tabular n-step temporal-difference learning.
//!
//! This crate provides the pieces shared by the learning algorithms in `nstep-td`:
//!
//! * [`Trajectory`] and [`Transition`], batches of experience collected beforehand,
//! * value tables built on [`ndarray`] and their initialization with [`FillMode`],
//! * the [`Policy`] trait with [`Greedy`] and [`EpsilonGreedy`] policies,
//! * [`record`], for reporting per-episode statistics.
pub mod error;
pub mod record;
pub mod table;

mod policy;
pub use policy::{validate_epsilon, EpsilonGreedy, EpsilonGreedyPolicy, Greedy, GreedyPolicy, Policy};

mod trajectory;
pub use trajectory::{Trajectory, Transition};

pub use error::{Result, TdError};
pub use table::FillMode;
