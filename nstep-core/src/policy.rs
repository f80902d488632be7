//! Policies derived from an action-value table.
mod epsilon_greedy;
mod greedy;
use crate::error::Result;
pub use epsilon_greedy::{validate_epsilon, EpsilonGreedy, EpsilonGreedyPolicy};
pub use greedy::{Greedy, GreedyPolicy};
use rand::RngCore;

/// A policy on a finite MDP.
///
/// A policy is a mapping from a state to a distribution over actions.
/// Stochastic policies receive their random source on every call to
/// [`Policy::action`] and keep no random state of their own.
pub trait Policy {
    /// The number of actions.
    fn n_actions(&self) -> usize;

    /// Probability of taking `action` in `state`.
    fn action_prob(&self, state: usize, action: usize) -> Result<f64>;

    /// Samples an action in `state`.
    fn action(&self, state: usize, rng: &mut dyn RngCore) -> Result<usize>;
}

impl<P: Policy + ?Sized> Policy for &P {
    fn n_actions(&self) -> usize {
        (**self).n_actions()
    }

    fn action_prob(&self, state: usize, action: usize) -> Result<f64> {
        (**self).action_prob(state, action)
    }

    fn action(&self, state: usize, rng: &mut dyn RngCore) -> Result<usize> {
        (**self).action(state, rng)
    }
}
