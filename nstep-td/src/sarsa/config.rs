//! Configuration of [`NStepSarsa`](super::NStepSarsa).
use crate::returns::validate_params;
use anyhow::Result;
use nstep_core::{validate_epsilon, FillMode, TdError};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Default probability of exploiting in the epsilon-greedy target policy.
pub const DEFAULT_EPSILON: f64 = 0.9;

/// Target policy evaluated from the trajectories.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum TargetPolicy {
    /// Epsilon-greedy with respect to the current action values.
    EpsilonGreedy,

    /// Greedy with respect to the current action values.
    Greedy,
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self::EpsilonGreedy
    }
}

/// Configuration of [`NStepSarsa`](super::NStepSarsa).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct NStepSarsaConfig {
    /// Discount factor, in `[0, 1]`.
    pub discount_factor: f64,

    /// The number of states.
    pub n_states: usize,

    /// The number of actions.
    pub n_actions: usize,

    /// Number of rewards before bootstrapping, at least 1.
    pub n_steps: usize,

    /// Step size of the updates, positive.
    pub learning_rate: f64,

    /// Probability of the greedy choice in the epsilon-greedy policies.
    pub epsilon: f64,

    /// Target policy entering the importance-sampling ratio.
    #[serde(default)]
    pub target: TargetPolicy,

    /// Initial fill of the action-value table.
    #[serde(default = "default_q_init")]
    pub q_init: FillMode,

    /// Seed of the random fill of the action-value table.
    #[serde(default)]
    pub seed: u64,
}

fn default_q_init() -> FillMode {
    FillMode::Zeros
}

impl Default for NStepSarsaConfig {
    fn default() -> Self {
        Self {
            discount_factor: 1.0,
            n_states: 1,
            n_actions: 1,
            n_steps: 1,
            learning_rate: 0.1,
            epsilon: DEFAULT_EPSILON,
            target: TargetPolicy::default(),
            q_init: default_q_init(),
            seed: 0,
        }
    }
}

impl NStepSarsaConfig {
    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f64) -> Self {
        self.discount_factor = v;
        self
    }

    /// Sets the number of states.
    pub fn n_states(mut self, v: usize) -> Self {
        self.n_states = v;
        self
    }

    /// Sets the number of actions.
    pub fn n_actions(mut self, v: usize) -> Self {
        self.n_actions = v;
        self
    }

    /// Sets the number of steps.
    pub fn n_steps(mut self, v: usize) -> Self {
        self.n_steps = v;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f64) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets epsilon.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets the target policy.
    pub fn target(mut self, v: TargetPolicy) -> Self {
        self.target = v;
        self
    }

    /// Sets the initial fill of the action-value table.
    pub fn q_init(mut self, v: FillMode) -> Self {
        self.q_init = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Checks the parameters.
    pub fn validate(&self) -> nstep_core::Result<()> {
        validate_params(self.discount_factor, self.n_steps, self.learning_rate)?;
        validate_epsilon(self.epsilon)?;
        if self.n_states == 0 || self.n_actions == 0 {
            return Err(TdError::EmptyTable {
                n_states: self.n_states,
                n_actions: self.n_actions,
            });
        }
        Ok(())
    }

    /// Constructs [`NStepSarsaConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`NStepSarsaConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
