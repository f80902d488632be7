//! Configuration of [`NStepTd`](super::NStepTd).
use crate::returns::validate_params;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`NStepTd`](super::NStepTd).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct NStepTdConfig {
    /// Discount factor, in `[0, 1]`.
    pub discount_factor: f64,

    /// Number of rewards before bootstrapping, at least 1.
    pub n_steps: usize,

    /// Step size of the updates, positive.
    pub learning_rate: f64,
}

impl Default for NStepTdConfig {
    fn default() -> Self {
        Self {
            discount_factor: 1.0,
            n_steps: 1,
            learning_rate: 0.1,
        }
    }
}

impl NStepTdConfig {
    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f64) -> Self {
        self.discount_factor = v;
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

    /// Checks the parameters.
    pub fn validate(&self) -> nstep_core::Result<()> {
        validate_params(self.discount_factor, self.n_steps, self.learning_rate)
    }

    /// Constructs [`NStepTdConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`NStepTdConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
