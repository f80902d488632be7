use super::Policy;
use crate::{
    error::{Result, TdError},
    table::{check_table, greedy_action},
};
use ndarray::{ArrayBase, Data, Ix2, OwnedRepr, RawDataClone};
use rand::{Rng, RngCore};
use std::fmt;

/// Checks that `epsilon` is a probability.
pub fn validate_epsilon(epsilon: f64) -> Result<()> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(())
    } else {
        Err(TdError::InvalidEpsilon(epsilon))
    }
}

/// Epsilon-greedy policy.
///
/// With probability `epsilon` the greedy action of the action-value table is taken,
/// otherwise an action is drawn uniformly from all actions, the greedy one included.
/// Thus the probability of action `a` in state `s` is
///
/// ```text
/// epsilon * [a == argmax Q(s, .)] + (1 - epsilon) / n_actions
/// ```
///
/// The explore/exploit coin is flipped on every call of [`Policy::action`].
pub struct EpsilonGreedy<S: Data<Elem = f64>> {
    q: ArrayBase<S, Ix2>,
    epsilon: f64,
}

/// [`EpsilonGreedy`] owning its action-value table.
pub type EpsilonGreedyPolicy = EpsilonGreedy<OwnedRepr<f64>>;

impl<S: Data<Elem = f64>> EpsilonGreedy<S> {
    /// Constructs an epsilon-greedy policy over `q`, which must not be empty.
    pub fn new(q: ArrayBase<S, Ix2>, epsilon: f64) -> Result<Self> {
        validate_epsilon(epsilon)?;
        check_table(&q)?;
        Ok(Self { q, epsilon })
    }

    /// Probability of taking the greedy action without exploring.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The action-value table of the policy.
    pub fn q(&self) -> &ArrayBase<S, Ix2> {
        &self.q
    }
}

impl<S: Data<Elem = f64> + RawDataClone> Clone for EpsilonGreedy<S> {
    fn clone(&self) -> Self {
        Self {
            q: self.q.clone(),
            epsilon: self.epsilon,
        }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for EpsilonGreedy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EpsilonGreedy")
            .field("q", &self.q)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

impl<S: Data<Elem = f64>> Policy for EpsilonGreedy<S> {
    fn n_actions(&self) -> usize {
        self.q.ncols()
    }

    fn action_prob(&self, state: usize, action: usize) -> Result<f64> {
        let n_actions = self.n_actions();
        if action >= n_actions {
            return Err(TdError::ActionOutOfRange { action, n_actions });
        }
        let explore = (1.0 - self.epsilon) / n_actions as f64;
        if greedy_action(&self.q, state)? == action {
            Ok(self.epsilon + explore)
        } else {
            Ok(explore)
        }
    }

    fn action(&self, state: usize, rng: &mut dyn RngCore) -> Result<usize> {
        let best = greedy_action(&self.q, state)?;
        if rng.gen::<f64>() < self.epsilon {
            Ok(best)
        } else {
            Ok(rng.gen_range(0..self.n_actions()))
        }
    }
}
