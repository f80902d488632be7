//! Tabular value functions.
//!
//! State values `V` are stored in [`Array1`] of length `n_states` and action values `Q`
//! in [`Array2`] of shape `[n_states, n_actions]`. Entries are read and written with
//! the checked accessors of this module so that ids from malformed trajectories are
//! reported as [`TdError`] instead of panicking.
use crate::error::{Result, TdError};
use ndarray::{Array1, Array2, ArrayBase, Data, DataMut, Ix1, Ix2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Initial fill of a value table.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum FillMode {
    /// All entries are 0.
    Zeros,

    /// All entries are 1.
    Ones,

    /// Entries are drawn uniformly from `[0, 1)`.
    Random,
}

impl Default for FillMode {
    fn default() -> Self {
        Self::Ones
    }
}

/// Creates an action-value table of shape `[n_states, n_actions]`.
///
/// `rng` is used only with [`FillMode::Random`].
pub fn init_table<R: Rng + ?Sized>(
    n_states: usize,
    n_actions: usize,
    fill: FillMode,
    rng: &mut R,
) -> Result<Array2<f64>> {
    if n_states == 0 || n_actions == 0 {
        return Err(TdError::EmptyTable {
            n_states,
            n_actions,
        });
    }

    let shape = (n_states, n_actions);
    Ok(match fill {
        FillMode::Zeros => Array2::zeros(shape),
        FillMode::Ones => Array2::ones(shape),
        FillMode::Random => Array2::from_shape_simple_fn(shape, || rng.gen::<f64>()),
    })
}

/// Creates a state-value table of length `n_states`.
pub fn init_state_values<R: Rng + ?Sized>(
    n_states: usize,
    fill: FillMode,
    rng: &mut R,
) -> Result<Array1<f64>> {
    let table = init_table(n_states, 1, fill, rng)?;
    Ok(table.column(0).to_owned())
}

/// Checks that `q` has at least one state and one action.
pub fn check_table<S: Data<Elem = f64>>(q: &ArrayBase<S, Ix2>) -> Result<()> {
    let (n_states, n_actions) = q.dim();
    if n_states == 0 || n_actions == 0 {
        return Err(TdError::EmptyTable {
            n_states,
            n_actions,
        });
    }
    Ok(())
}

fn check_state(state: usize, n_states: usize) -> Result<()> {
    if state < n_states {
        Ok(())
    } else {
        Err(TdError::StateOutOfRange { state, n_states })
    }
}

fn check_state_action(state: usize, action: usize, shape: &[usize]) -> Result<()> {
    check_state(state, shape[0])?;
    if action < shape[1] {
        Ok(())
    } else {
        Err(TdError::ActionOutOfRange {
            action,
            n_actions: shape[1],
        })
    }
}

/// Returns `V[state]`.
pub fn state_value<S>(v: &ArrayBase<S, Ix1>, state: usize) -> Result<f64>
where
    S: Data<Elem = f64>,
{
    check_state(state, v.len())?;
    Ok(v[state])
}

/// Returns a mutable reference to `V[state]`.
pub fn state_value_mut<S>(v: &mut ArrayBase<S, Ix1>, state: usize) -> Result<&mut f64>
where
    S: DataMut<Elem = f64>,
{
    check_state(state, v.len())?;
    Ok(&mut v[state])
}

/// Returns `Q[state, action]`.
pub fn action_value<S>(q: &ArrayBase<S, Ix2>, state: usize, action: usize) -> Result<f64>
where
    S: Data<Elem = f64>,
{
    check_state_action(state, action, q.shape())?;
    Ok(q[[state, action]])
}

/// Returns a mutable reference to `Q[state, action]`.
pub fn action_value_mut<S>(
    q: &mut ArrayBase<S, Ix2>,
    state: usize,
    action: usize,
) -> Result<&mut f64>
where
    S: DataMut<Elem = f64>,
{
    check_state_action(state, action, q.shape())?;
    Ok(&mut q[[state, action]])
}

/// Returns the action maximizing `Q[state, ·]`.
///
/// Ties are broken by the smallest action id.
pub fn greedy_action<S>(q: &ArrayBase<S, Ix2>, state: usize) -> Result<usize>
where
    S: Data<Elem = f64>,
{
    check_state(state, q.nrows())?;
    let row = q.row(state);
    let mut best = 0;
    for (a, &value) in row.iter().enumerate().skip(1) {
        if value > row[best] {
            best = a;
        }
    }
    Ok(best)
}
