#![warn(missing_docs)]
//! Tabular n-step temporal-difference learning from batches of trajectories.
//!
//! * [`NStepTd`] estimates the state-value function of the policy that generated
//!   the trajectories (on-policy n-step TD prediction).
//! * [`NStepSarsa`] estimates the action-value function of a target policy from
//!   trajectories of a behavior policy (off-policy n-step SARSA), weighting each
//!   update by an importance-sampling ratio.
//!
//! Both learners share the return estimator in [`returns`] and process the
//! trajectories sequentially, mutating a single value table.
//!
//! ```rust
//! use ndarray::Array1;
//! use nstep_core::Trajectory;
//! use nstep_td::on_policy_n_step_td;
//!
//! let traj = Trajectory::from(vec![(0, 0, 1.0, 1), (1, 0, 2.0, 2), (2, 0, 3.0, 2)]);
//! let v = on_policy_n_step_td(1.0, &[traj], 1, 0.5, Array1::zeros(3)).unwrap();
//! assert_eq!(v[0], 0.5);
//! ```
pub mod returns;
pub mod sarsa;
pub mod td;

pub use sarsa::{off_policy_n_step_sarsa, NStepSarsa, NStepSarsaConfig, SarsaOutput, TargetPolicy};
pub use td::{on_policy_n_step_td, NStepTd, NStepTdConfig};
