use super::Policy;
use crate::{
    error::{Result, TdError},
    table::{check_table, greedy_action},
};
use ndarray::{ArrayBase, Data, Ix2, OwnedRepr, RawDataClone};
use rand::RngCore;
use std::fmt;

/// Deterministic policy taking the action with the largest value.
pub struct Greedy<S: Data<Elem = f64>> {
    q: ArrayBase<S, Ix2>,
}

impl<S: Data<Elem = f64> + RawDataClone> Clone for Greedy<S> {
    fn clone(&self) -> Self {
        Self { q: self.q.clone() }
    }
}

impl<S: Data<Elem = f64>> fmt::Debug for Greedy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Greedy").field("q", &self.q).finish()
    }
}

/// [`Greedy`] owning its action-value table.
pub type GreedyPolicy = Greedy<OwnedRepr<f64>>;

impl<S: Data<Elem = f64>> Greedy<S> {
    /// Constructs a greedy policy over `q`, which must not be empty.
    pub fn new(q: ArrayBase<S, Ix2>) -> Result<Self> {
        check_table(&q)?;
        Ok(Self { q })
    }

    /// The action-value table of the policy.
    pub fn q(&self) -> &ArrayBase<S, Ix2> {
        &self.q
    }
}

impl<S: Data<Elem = f64>> Policy for Greedy<S> {
    fn n_actions(&self) -> usize {
        self.q.ncols()
    }

    fn action_prob(&self, state: usize, action: usize) -> Result<f64> {
        if action >= self.n_actions() {
            return Err(TdError::ActionOutOfRange {
                action,
                n_actions: self.n_actions(),
            });
        }
        match greedy_action(&self.q, state)? == action {
            true => Ok(1.0),
            false => Ok(0.0),
        }
    }

    fn action(&self, state: usize, _rng: &mut dyn RngCore) -> Result<usize> {
        greedy_action(&self.q, state)
    }
}
