//! On-policy n-step TD prediction.
use super::NStepTdConfig;
use crate::returns::n_step_return;
use log::{debug, info, trace};
use ndarray::Array1;
use nstep_core::{
    record::{NullRecorder, Record, RecordValue, Recorder},
    table::{state_value, state_value_mut},
    Result, Trajectory,
};

/// Estimates the state-value function of the policy that generated the trajectories.
///
/// Trajectories are processed in the given order and every update reads the table
/// as left by the previous ones.
#[derive(Debug, Clone)]
pub struct NStepTd {
    config: NStepTdConfig,
}

impl NStepTd {
    /// Constructs [`NStepTd`], failing on invalid parameters.
    pub fn build(config: NStepTdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration.
    pub fn config(&self) -> &NStepTdConfig {
        &self.config
    }

    /// Updates `v` in place with the trajectories.
    ///
    /// On error, updates applied before the failing one are kept.
    pub fn update<R>(
        &self,
        trajs: &[Trajectory],
        v: &mut Array1<f64>,
        recorder: &mut R,
    ) -> Result<()>
    where
        R: Recorder + ?Sized,
    {
        let NStepTdConfig {
            discount_factor: gamma,
            n_steps: n,
            learning_rate: alpha,
        } = self.config;

        info!(
            "Start n-step TD prediction: n = {}, gamma = {}, alpha = {}, {} trajectories",
            n,
            gamma,
            alpha,
            trajs.len()
        );

        for (episode, traj) in trajs.iter().enumerate() {
            let mut td_errors = Vec::with_capacity(traj.len());

            for (tau, tr) in traj.iter().enumerate() {
                let g = n_step_return(traj, gamma, n, tau, |next| state_value(&*v, next.state))?;
                let value = state_value_mut(v, tr.state)?;
                let td_error = g - *value;
                *value += alpha * td_error;
                td_errors.push(td_error);
                trace!("tau = {}, s = {}, G = {}, V(s) = {}", tau, tr.state, g, *value);
            }

            let episode_return = traj.total_reward();
            let mean_abs_td_error = match td_errors.is_empty() {
                true => 0.0,
                false => td_errors.iter().map(|e| e.abs()).sum::<f64>() / td_errors.len() as f64,
            };
            debug!(
                "Episode {}: {} steps, return = {}, mean |TD error| = {}",
                episode,
                traj.len(),
                episode_return,
                mean_abs_td_error
            );

            let mut record = Record::from_scalar("episode", episode as f64);
            record.insert("length", RecordValue::Scalar(traj.len() as f64));
            record.insert("episode_return", RecordValue::Scalar(episode_return));
            record.insert("mean_abs_td_error", RecordValue::Scalar(mean_abs_td_error));
            record.insert("td_errors", RecordValue::Array1(td_errors));
            recorder.write(record);
        }

        info!("Finished n-step TD prediction");
        Ok(())
    }

    /// Returns the state-value table obtained by updating `v` with the trajectories.
    pub fn predict(&self, trajs: &[Trajectory], v: Array1<f64>) -> Result<Array1<f64>> {
        self.predict_with_recorder(trajs, v, &mut NullRecorder::new())
    }

    /// Same as [`NStepTd::predict`], writing a record per trajectory to `recorder`.
    pub fn predict_with_recorder<R>(
        &self,
        trajs: &[Trajectory],
        mut v: Array1<f64>,
        recorder: &mut R,
    ) -> Result<Array1<f64>>
    where
        R: Recorder + ?Sized,
    {
        self.update(trajs, &mut v, recorder)?;
        Ok(v)
    }
}

/// On-policy n-step TD prediction.
///
/// * `gamma` - discount factor
/// * `trajs` - trajectories generated by the evaluated policy
/// * `n` - number of rewards before bootstrapping
/// * `alpha` - learning rate
/// * `init_v` - initial state values, one per state
pub fn on_policy_n_step_td(
    gamma: f64,
    trajs: &[Trajectory],
    n: usize,
    alpha: f64,
    init_v: Array1<f64>,
) -> Result<Array1<f64>> {
    let config = NStepTdConfig::default()
        .discount_factor(gamma)
        .n_steps(n)
        .learning_rate(alpha);
    NStepTd::build(config)?.predict(trajs, init_v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use nstep_core::{record::BufferedRecorder, TdError};

    fn self_loop_trajectory() -> Trajectory {
        Trajectory::from(vec![(0, 0, 1.0, 1), (1, 0, 2.0, 2), (2, 0, 3.0, 2)])
    }

    #[test]
    fn test_one_step_hand_computed() -> Result<()> {
        let v = on_policy_n_step_td(1.0, &[self_loop_trajectory()], 1, 0.5, Array1::zeros(3))?;
        // V(0) = 0.5 * (1 + V(1)), V(1) = 0.5 * (2 + V(2)), V(2) = 0.5 * 3
        assert_abs_diff_eq!(v[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 1.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_updates_see_previous_updates() -> Result<()> {
        // The second visit of state 0 bootstraps from V(1) updated by the first visit.
        let traj = Trajectory::from(vec![
            (0, 0, 0.0, 1),
            (1, 0, 1.0, 0),
            (0, 0, 0.0, 1),
            (1, 0, 0.0, 1),
        ]);
        let v = on_policy_n_step_td(1.0, &[traj], 1, 1.0, array![0.0, 0.0])?;
        // tau 0: V(0) = 0 + V(1) = 0
        // tau 1: V(1) = 1 + V(0) = 1
        // tau 2: V(0) = 0 + V(1) = 1
        // tau 3: V(1) = 0
        assert_eq!(v, array![1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_records() -> Result<()> {
        let td = NStepTd::build(NStepTdConfig::default().n_steps(2).learning_rate(0.5))?;
        let mut recorder = BufferedRecorder::new();
        let trajs = vec![self_loop_trajectory(), Trajectory::new()];
        td.predict_with_recorder(&trajs, Array1::zeros(3), &mut recorder)?;

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.scalars("episode_return")?, vec![6.0, 0.0]);
        assert_eq!(recorder.scalars("length")?, vec![3.0, 0.0]);
        assert_eq!(recorder.scalars("mean_abs_td_error")?[1], 0.0);

        // G = 1 + 2 + V(2), 2 + 3 and 3, all against zero-initialized values
        let mut records = recorder.iter();
        let first = records.next().unwrap();
        assert_eq!(first.get_array1("td_errors")?, vec![3.0, 5.0, 3.0]);
        assert_eq!(first.get_scalar("mean_abs_td_error")?, 11.0 / 3.0);
        assert!(records.next().unwrap().get_array1("td_errors")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_state_out_of_range() {
        let traj = Trajectory::from(vec![(0, 0, 1.0, 1), (3, 0, 1.0, 0)]);
        assert_eq!(
            on_policy_n_step_td(1.0, &[traj], 1, 0.5, Array1::zeros(2)),
            Err(TdError::StateOutOfRange {
                state: 3,
                n_states: 2
            })
        );
    }
}
