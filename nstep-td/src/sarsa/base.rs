//! Off-policy n-step SARSA.
use super::{NStepSarsaConfig, TargetPolicy};
use crate::returns::{importance_ratio, n_step_return};
use log::{debug, info, trace};
use ndarray::{Array2, ArrayView2};
use nstep_core::{
    record::{NullRecorder, Record, RecordValue, Recorder},
    table::{action_value, action_value_mut, init_table},
    EpsilonGreedy, EpsilonGreedyPolicy, Greedy, Policy, Result, Trajectory,
};
use rand::{rngs::StdRng, SeedableRng};

/// Result of [`NStepSarsa::learn`].
#[derive(Debug, Clone)]
pub struct SarsaOutput {
    /// Learned action values.
    pub q: Array2<f64>,

    /// Undiscounted sum of rewards of each trajectory, in input order.
    pub episode_rewards: Vec<f64>,

    /// Epsilon-greedy policy over the learned action values.
    pub policy: EpsilonGreedyPolicy,
}

/// Estimates action values of a target policy from trajectories of a behavior policy.
///
/// The mismatch between the two policies is corrected with importance sampling.
/// The target policy is derived from the action values being learned, so it moves
/// along with the updates.
#[derive(Debug, Clone)]
pub struct NStepSarsa {
    config: NStepSarsaConfig,
}

impl NStepSarsa {
    /// Constructs [`NStepSarsa`], failing on invalid parameters.
    pub fn build(config: NStepSarsaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration.
    pub fn config(&self) -> &NStepSarsaConfig {
        &self.config
    }

    /// Creates the initial action-value table.
    pub fn init_q(&self) -> Result<Array2<f64>> {
        let rng = &mut StdRng::seed_from_u64(self.config.seed);
        init_table(
            self.config.n_states,
            self.config.n_actions,
            self.config.q_init,
            rng,
        )
    }

    /// Importance-sampling ratio of the anchor `tau` with the target policy over `q`.
    fn ratio<B>(
        &self,
        traj: &Trajectory,
        tau: usize,
        q: ArrayView2<f64>,
        behavior: &B,
    ) -> Result<f64>
    where
        B: Policy + ?Sized,
    {
        let n = self.config.n_steps;
        match self.config.target {
            TargetPolicy::EpsilonGreedy => {
                let pi = EpsilonGreedy::new(q, self.config.epsilon)?;
                importance_ratio(traj, tau, n, &pi, behavior)
            }
            TargetPolicy::Greedy => importance_ratio(traj, tau, n, &Greedy::new(q)?, behavior),
        }
    }

    /// Updates `q` in place with the trajectories generated by `behavior`.
    ///
    /// Returns the undiscounted sum of rewards of each trajectory.
    pub fn update<B, R>(
        &self,
        trajs: &[Trajectory],
        behavior: &B,
        q: &mut Array2<f64>,
        recorder: &mut R,
    ) -> Result<Vec<f64>>
    where
        B: Policy + ?Sized,
        R: Recorder + ?Sized,
    {
        let gamma = self.config.discount_factor;
        let n = self.config.n_steps;
        let alpha = self.config.learning_rate;

        info!(
            "Start off-policy n-step SARSA: n = {}, gamma = {}, alpha = {}, epsilon = {}, target = {:?}, {} trajectories",
            n,
            gamma,
            alpha,
            self.config.epsilon,
            self.config.target,
            trajs.len()
        );

        let mut episode_rewards = Vec::with_capacity(trajs.len());

        for (episode, traj) in trajs.iter().enumerate() {
            let mut rhos = Vec::with_capacity(traj.len());

            for (tau, tr) in traj.iter().enumerate() {
                let rho = self.ratio(traj, tau, q.view(), behavior)?;
                let g = n_step_return(traj, gamma, n, tau, |next| {
                    action_value(&*q, next.state, next.action)
                })?;
                let value = action_value_mut(q, tr.state, tr.action)?;
                *value += alpha * rho * (g - *value);
                rhos.push(rho);
                trace!(
                    "tau = {}, (s, a) = ({}, {}), rho = {}, G = {}, Q(s, a) = {}",
                    tau,
                    tr.state,
                    tr.action,
                    rho,
                    g,
                    *value
                );
            }

            let episode_return = traj.total_reward();
            let mean_rho = match rhos.is_empty() {
                true => 0.0,
                false => rhos.iter().sum::<f64>() / rhos.len() as f64,
            };
            debug!(
                "Episode {}: {} steps, return = {}, mean importance ratio = {}",
                episode,
                traj.len(),
                episode_return,
                mean_rho
            );

            let mut record = Record::from_scalar("episode", episode as f64);
            record.insert("length", RecordValue::Scalar(traj.len() as f64));
            record.insert("episode_return", RecordValue::Scalar(episode_return));
            record.insert("mean_importance_ratio", RecordValue::Scalar(mean_rho));
            record.insert("importance_ratios", RecordValue::Array1(rhos));
            recorder.write(record);

            episode_rewards.push(episode_return);
        }

        info!("Finished off-policy n-step SARSA");
        Ok(episode_rewards)
    }

    /// Learns action values from trajectories generated by `behavior`.
    pub fn learn<B>(&self, trajs: &[Trajectory], behavior: &B) -> Result<SarsaOutput>
    where
        B: Policy + ?Sized,
    {
        self.learn_with_recorder(trajs, behavior, &mut NullRecorder::new())
    }

    /// Same as [`NStepSarsa::learn`], writing a record per trajectory to `recorder`.
    pub fn learn_with_recorder<B, R>(
        &self,
        trajs: &[Trajectory],
        behavior: &B,
        recorder: &mut R,
    ) -> Result<SarsaOutput>
    where
        B: Policy + ?Sized,
        R: Recorder + ?Sized,
    {
        let mut q = self.init_q()?;
        let episode_rewards = self.update(trajs, behavior, &mut q, recorder)?;
        let policy = EpsilonGreedy::new(q.clone(), self.config.epsilon)?;

        Ok(SarsaOutput {
            q,
            episode_rewards,
            policy,
        })
    }
}

/// Off-policy n-step SARSA with an epsilon-greedy target policy.
///
/// * `gamma` - discount factor
/// * `trajs` - trajectories generated by `behavior`
/// * `behavior` - behavior policy
/// * `n_states`, `n_actions` - size of the action-value table, initialized to zeros
/// * `n` - number of rewards before bootstrapping
/// * `alpha` - learning rate
/// * `epsilon` - probability of the greedy choice, usually [`DEFAULT_EPSILON`](super::DEFAULT_EPSILON)
#[allow(clippy::too_many_arguments)]
pub fn off_policy_n_step_sarsa<B>(
    gamma: f64,
    trajs: &[Trajectory],
    behavior: &B,
    n_states: usize,
    n_actions: usize,
    n: usize,
    alpha: f64,
    epsilon: f64,
) -> Result<SarsaOutput>
where
    B: Policy + ?Sized,
{
    let config = NStepSarsaConfig::default()
        .discount_factor(gamma)
        .n_states(n_states)
        .n_actions(n_actions)
        .n_steps(n)
        .learning_rate(alpha)
        .epsilon(epsilon);
    NStepSarsa::build(config)?.learn(trajs, behavior)
}
