#![allow(dead_code)]
use nstep_core::{Policy, Trajectory, Transition};
use rand::{rngs::StdRng, SeedableRng};

/// Number of states of the chain, the last one being terminal.
pub const N_STATES: usize = 5;
pub const N_ACTIONS: usize = 2;
pub const TERMINAL: usize = N_STATES - 1;
const MAX_STEPS: usize = 20;

/// Chain MDP: action 0 stays or moves back, action 1 moves forward.
/// Reaching the terminal state gives reward 1, every other step costs 0.1.
fn step(state: usize, action: usize) -> (f64, usize) {
    let next = match action {
        0 => state.saturating_sub(1),
        _ => state + 1,
    };
    let reward = if next == TERMINAL { 1.0 } else { -0.1 };
    (reward, next)
}

/// Generates trajectories with `policy`, starting from state 0.
pub fn generate<P: Policy + ?Sized>(policy: &P, n_episodes: usize, seed: u64) -> Vec<Trajectory> {
    let rng = &mut StdRng::seed_from_u64(seed);
    (0..n_episodes)
        .map(|_| {
            let mut traj = Trajectory::new();
            let mut state = 0;
            for _ in 0..MAX_STEPS {
                let action = policy.action(state, rng).unwrap();
                let (reward, next) = step(state, action);
                traj.push(Transition::new(state, action, reward, next));
                if next == TERMINAL {
                    break;
                }
                state = next;
            }
            traj
        })
        .collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
