//! Trajectories collected from an environment.
use serde::{Deserialize, Serialize};
use std::{iter::FromIterator, slice::Iter};

/// A transition `(s_t, a_t, r_{t+1}, s_{t+1})`.
///
/// The action is taken in `state` and produces `reward` and `next_state`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// State in which the action was taken.
    pub state: usize,

    /// Action taken.
    pub action: usize,

    /// Reward obtained by the action.
    pub reward: f64,

    /// State reached by the action.
    pub next_state: usize,
}

impl Transition {
    /// Constructs a [`Transition`].
    pub fn new(state: usize, action: usize, reward: f64, next_state: usize) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
        }
    }
}

impl From<(usize, usize, f64, usize)> for Transition {
    fn from((state, action, reward, next_state): (usize, usize, f64, usize)) -> Self {
        Self::new(state, action, reward, next_state)
    }
}

/// A finite episode, index 0 being its start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory(Vec<Transition>);

impl Trajectory {
    /// Constructs an empty trajectory.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a transition.
    pub fn push(&mut self, transition: Transition) {
        self.0.push(transition);
    }

    /// Number of transitions, `T`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the trajectory has no transitions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the transition at index `t`.
    pub fn get(&self, t: usize) -> Option<&Transition> {
        self.0.get(t)
    }

    /// Returns an iterator over the transitions.
    pub fn iter(&self) -> Iter<'_, Transition> {
        self.0.iter()
    }

    /// Undiscounted sum of the rewards in the episode.
    pub fn total_reward(&self) -> f64 {
        self.0.iter().map(|tr| tr.reward).sum()
    }

    /// Transitions as a slice.
    pub fn as_slice(&self) -> &[Transition] {
        &self.0
    }
}

impl From<Vec<Transition>> for Trajectory {
    fn from(transitions: Vec<Transition>) -> Self {
        Self(transitions)
    }
}

impl From<Vec<(usize, usize, f64, usize)>> for Trajectory {
    fn from(tuples: Vec<(usize, usize, f64, usize)>) -> Self {
        tuples.into_iter().map(Transition::from).collect()
    }
}

impl FromIterator<Transition> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Transition;
    type IntoIter = Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuples() {
        let traj = Trajectory::from(vec![(0, 1, 1.0, 1), (1, 0, -2.5, 2)]);
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.get(1), Some(&Transition::new(1, 0, -2.5, 2)));
        assert_eq!(traj.get(2), None);
        assert_eq!(traj.total_reward(), -1.5);
    }

    #[test]
    fn test_empty() {
        let traj = Trajectory::new();
        assert!(traj.is_empty());
        assert_eq!(traj.total_reward(), 0.0);
    }
}
