//! n-step returns and importance-sampling ratios.
//!
//! Both learners in this crate update the estimate of the transition at an anchor
//! index `tau`, once the `n` rewards following it have been observed. At time `t`
//! the anchor is `tau = t - n + 1`. Every anchor `0 <= tau < T` of an episode is
//! updated, in increasing order. The return of the anchor is
//!
//! ```text
//! G = sum_{i = tau}^{min(tau + n, T) - 1} gamma^(i - tau) r_i
//!     + gamma^n bootstrap(tau + n)        if tau + n < T
//! ```
//!
//! where `r_i` is the reward recorded at index `i` and `bootstrap` reads the value
//! table at the transition `tau + n`.
use nstep_core::{Policy, Result, TdError, Trajectory, Transition};

/// Checks the parameters shared by the learners.
pub fn validate_params(gamma: f64, n: usize, alpha: f64) -> Result<()> {
    if n < 1 {
        return Err(TdError::InvalidStepCount(n));
    }
    if !(alpha > 0.0 && alpha.is_finite()) {
        return Err(TdError::InvalidLearningRate(alpha));
    }
    if !(0.0..=1.0).contains(&gamma) {
        return Err(TdError::InvalidDiscountFactor(gamma));
    }
    Ok(())
}

/// Index one past the last reward accumulated in the return of `tau`.
#[inline]
fn window_end(trajectory: &Trajectory, tau: usize, n: usize) -> usize {
    tau.saturating_add(n).min(trajectory.len())
}

/// Computes the n-step return of the anchor `tau`.
///
/// `bootstrap` receives the transition at index `tau + n` and is called only when
/// that index is inside the trajectory. Otherwise the return is the discounted sum
/// of the remaining rewards of the episode.
pub fn n_step_return<F>(
    trajectory: &Trajectory,
    gamma: f64,
    n: usize,
    tau: usize,
    bootstrap: F,
) -> Result<f64>
where
    F: FnOnce(&Transition) -> Result<f64>,
{
    let transitions = trajectory.as_slice();
    let end = window_end(trajectory, tau, n);

    let mut g = 0.0;
    let mut discount = 1.0;
    for tr in &transitions[tau.min(end)..end] {
        g += discount * tr.reward;
        discount *= gamma;
    }

    // the window held all n rewards here, so `discount` is gamma^n
    if let Some(tr) = transitions.get(tau.saturating_add(n)) {
        g += discount * bootstrap(tr)?;
    }

    Ok(g)
}

/// Computes the importance-sampling ratio of the return of `tau`.
///
/// The ratio multiplies `target(a_i | s_i) / behavior(a_i | s_i)` over the indices
/// `tau + 1 ..= min(tau + n, T) - 1`. The action at the anchor itself is not
/// corrected. The ratio is 1 when the window is empty.
pub fn importance_ratio<P, B>(
    trajectory: &Trajectory,
    tau: usize,
    n: usize,
    target: &P,
    behavior: &B,
) -> Result<f64>
where
    P: Policy + ?Sized,
    B: Policy + ?Sized,
{
    let transitions = trajectory.as_slice();
    let end = window_end(trajectory, tau, n);
    let start = (tau + 1).min(end);

    let mut rho = 1.0;
    for tr in &transitions[start..end] {
        let b = behavior.action_prob(tr.state, tr.action)?;
        if b == 0.0 {
            return Err(TdError::ZeroBehaviorProbability {
                state: tr.state,
                action: tr.action,
            });
        }
        rho *= target.action_prob(tr.state, tr.action)? / b;
    }

    Ok(rho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};
    use nstep_core::{EpsilonGreedy, Greedy};

    fn trajectory() -> Trajectory {
        Trajectory::from(vec![
            (0, 0, 1.0, 1),
            (1, 1, 2.0, 2),
            (2, 0, 3.0, 3),
            (3, 1, 4.0, 0),
        ])
    }

    #[test]
    fn test_validate_params() {
        assert_eq!(validate_params(0.9, 3, 0.1), Ok(()));
        assert_eq!(validate_params(1.0, 1, 1.0), Ok(()));
        assert_eq!(validate_params(0.0, 1, 1e-6), Ok(()));
        assert_eq!(
            validate_params(0.9, 0, 0.1),
            Err(TdError::InvalidStepCount(0))
        );
        assert_eq!(
            validate_params(0.9, 1, 0.0),
            Err(TdError::InvalidLearningRate(0.0))
        );
        assert!(validate_params(0.9, 1, -0.5).is_err());
        assert!(validate_params(0.9, 1, f64::NAN).is_err());
        assert_eq!(
            validate_params(1.5, 1, 0.1),
            Err(TdError::InvalidDiscountFactor(1.5))
        );
        assert!(validate_params(-0.1, 1, 0.1).is_err());
    }

    #[test]
    fn test_n_step_return_with_bootstrap() -> Result<()> {
        let traj = trajectory();
        let g = n_step_return(&traj, 0.5, 2, 0, |tr| {
            assert_eq!(tr.state, 2);
            Ok(10.0)
        })?;
        // 1 + 0.5 * 2 + 0.25 * 10
        assert_abs_diff_eq!(g, 4.5, epsilon = 1e-12);

        let g = n_step_return(&traj, 0.5, 1, 2, |tr| Ok(tr.state as f64))?;
        // 3 + 0.5 * V(3)
        assert_abs_diff_eq!(g, 4.5, epsilon = 1e-12);

        // the bootstrap is discounted by gamma^3
        let g = n_step_return(&traj, 0.5, 3, 0, |_| Ok(8.0))?;
        assert_abs_diff_eq!(g, 1.0 + 1.0 + 0.75 + 0.125 * 8.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_n_step_return_truncated_at_episode_end() -> Result<()> {
        let traj = trajectory();
        let no_bootstrap = |_: &Transition| -> Result<f64> { panic!("must not bootstrap") };

        // tau + n == T
        let g = n_step_return(&traj, 0.5, 2, 2, no_bootstrap)?;
        assert_abs_diff_eq!(g, 3.0 + 0.5 * 4.0, epsilon = 1e-12);

        // n >= T gives the Monte-Carlo return
        let g = n_step_return(&traj, 0.9, 10, 0, no_bootstrap)?;
        let mc = 1.0 + 0.9 * 2.0 + 0.81 * 3.0 + 0.729 * 4.0;
        assert_abs_diff_eq!(g, mc, epsilon = 1e-12);

        let g = n_step_return(&traj, 0.9, usize::MAX, 3, no_bootstrap)?;
        assert_abs_diff_eq!(g, 4.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_bootstrap_error_is_propagated() {
        let traj = trajectory();
        let err = n_step_return(&traj, 1.0, 1, 0, |_| {
            Err(TdError::StateOutOfRange {
                state: 1,
                n_states: 1,
            })
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_importance_ratio_same_policy() -> Result<()> {
        let traj = trajectory();
        let q = array![[1.0, 0.0], [0.0, 1.0], [0.3, 0.2], [0.0, 0.0]];
        let pi = EpsilonGreedy::new(q.view(), 0.6)?;
        for n in 1..6 {
            for tau in 0..traj.len() {
                assert_eq!(importance_ratio(&traj, tau, n, &pi, &pi)?, 1.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_importance_ratio_window() -> Result<()> {
        let traj = trajectory();
        // target is greedy on actions recorded at indices 1 and 2 but not 3
        let target = Greedy::new(array![[0.0, 1.0], [0.0, 1.0], [1.0, 0.0], [1.0, 0.0]])?;
        let behavior = EpsilonGreedy::new(Array2::zeros((4, 2)), 0.0)?;

        // n = 1: empty window
        assert_eq!(importance_ratio(&traj, 0, 1, &target, &behavior)?, 1.0);
        // indices 1 and 2: (1 / 0.5) * (1 / 0.5), the anchor action is ignored
        assert_eq!(importance_ratio(&traj, 0, 3, &target, &behavior)?, 4.0);
        // indices 2 and 3: the target never takes action 1 in state 3
        assert_eq!(importance_ratio(&traj, 1, 3, &target, &behavior)?, 0.0);
        // window clipped at the end of the episode
        assert_eq!(importance_ratio(&traj, 3, 5, &target, &behavior)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_importance_ratio_zero_behavior_probability() -> Result<()> {
        let traj = trajectory();
        let target = EpsilonGreedy::new(Array2::zeros((4, 2)), 0.5)?;
        let behavior = Greedy::new(array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 0.0]])?;
        assert_eq!(
            importance_ratio(&traj, 0, 2, &target, &behavior),
            Err(TdError::ZeroBehaviorProbability {
                state: 1,
                action: 1
            })
        );
        Ok(())
    }
}
