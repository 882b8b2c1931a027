use std::cmp::max;
use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, trace, Level};

use super::diversification::final_mutation;
use super::neighbourhood::find_neighbours;
use super::tabu::{choose_best_candidate, insert_and_adjust_tabu_list};
use crate::config::constant::{RUNS, SEED, TABU_TENURE_MAX, TABU_TENURE_MIN};
use crate::domain::solution::{Improvement, Route, Solution};
use crate::domain::types::DistanceMatrix;
use crate::error::TspError;
use crate::evaluation::fitness::{find_distance, Move};
use crate::solver::construction::path_cheapest_arc;
use crate::solver::RouteSolver;

#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub max_iterations: usize,
    pub tenure_min: usize,
    pub tenure_max: usize,
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: RUNS,
            tenure_min: TABU_TENURE_MIN,
            tenure_max: TABU_TENURE_MAX,
            seed: SEED,
        }
    }
}

/// Cheapest-arc construction improved by tabu search.
#[derive(Debug, Default, Clone, Copy)]
pub struct TabuSearch {
    pub config: SolverConfig,
}

impl TabuSearch {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

struct SearchState {
    current: Vec<usize>,
    current_distance: u64,
    best: Vec<usize>,
    best_distance: u64,
    tabu_list: VecDeque<Move>,
    len_tabu_list: usize,
    stagnation: usize,
    max_stagnation: usize,
    kicked: bool,
    kicks: usize,
    improvements: Vec<Improvement>,
    rng: ChaCha8Rng,
}

impl SearchState {
    fn new(initial: Vec<usize>, distance: u64, config: &SolverConfig) -> Self {
        Self {
            best: initial.clone(),
            best_distance: distance,
            current: initial,
            current_distance: distance,
            tabu_list: VecDeque::new(),
            len_tabu_list: config.tenure_min.max(1),
            stagnation: 0,
            max_stagnation: 0,
            kicked: false,
            kicks: 0,
            improvements: vec![Improvement {
                iteration: 0,
                distance,
            }],
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    fn record_if_best(&mut self, iteration: usize) -> bool {
        if self.current_distance >= self.best_distance {
            return false;
        }

        self.best = self.current.clone();
        self.best_distance = self.current_distance;
        self.improvements.push(Improvement {
            iteration,
            distance: self.best_distance,
        });
        debug!("New best at iteration {}: {} m", iteration, self.best_distance);
        true
    }
}

/// Stagnation limit for a tour over `num_stops` stops (depot included): at least
/// 100 iterations, growing as `n^1.33`.
pub fn calculate_max_no_improvement(num_stops: usize) -> usize {
    let scaling_factor = if num_stops < 50 { 15.0 } else { 9.0 };
    max(100, (scaling_factor * (num_stops as f64).powf(1.33)) as usize)
}

/// Perform a single tabu search iteration. Returns `false` once the search should stop.
fn perform_iteration(
    iteration: usize,
    state: &mut SearchState,
    dm: &DistanceMatrix,
    max_no_improvement: usize,
    config: &SolverConfig,
) -> bool {
    let candidates = find_neighbours(&state.current, dm);
    let Some((delta, mv)) = choose_best_candidate(
        &candidates,
        &state.tabu_list,
        state.current_distance,
        state.best_distance,
    ) else {
        return false;
    };

    trace!("Iteration {}: {:?} ({:+})", iteration, mv, delta);
    mv.apply(&mut state.current);
    state.current_distance = (state.current_distance as i64 + delta) as u64;
    insert_and_adjust_tabu_list(&mut state.tabu_list, mv, state.len_tabu_list);

    if state.record_if_best(iteration) {
        state.max_stagnation = max(state.stagnation, state.max_stagnation);
        state.stagnation = 0;
        state.kicked = false;
    } else {
        state.stagnation += 1;
        if state.stagnation >= max_no_improvement {
            info!("Ended early at iteration {}", iteration);
            return false;
        }

        // Restart once per stagnation period from a perturbed copy of the best tour.
        if !state.kicked && state.stagnation >= max_no_improvement / 2 {
            state.current = state.best.clone();
            final_mutation(&mut state.current, &mut state.rng);
            state.current_distance = find_distance(&state.current, dm);
            state.tabu_list.clear();
            state.kicked = true;
            state.kicks += 1;
            debug!(
                "Stagnated for {} iterations, kicked to {} m",
                state.stagnation, state.current_distance
            );
            if state.record_if_best(iteration) {
                state.stagnation = 0;
                state.kicked = false;
            }
        }
    }

    if iteration % 20 == 0 && config.tenure_min < config.tenure_max {
        state.len_tabu_list = state.rng.gen_range(config.tenure_min..config.tenure_max);
    }

    true
}

impl RouteSolver for TabuSearch {
    fn solve(&self, dm: &DistanceMatrix, depot: usize) -> Result<Solution, TspError> {
        let initial = path_cheapest_arc(dm, depot)?;
        let initial_distance = find_distance(&initial, dm);
        let max_no_improvement = calculate_max_no_improvement(dm.len());

        let search_span = span!(Level::INFO, "tabu_search", stops = dm.len());
        let _guard = search_span.enter();
        info!(
            "Initial cheapest-arc route: {} m (max {} iterations, stop after {} without improvement)",
            initial_distance, self.config.max_iterations, max_no_improvement
        );

        let mut state = SearchState::new(initial, initial_distance, &self.config);
        let mut iterations = 0;
        for iteration in 1..=self.config.max_iterations {
            iterations = iteration;
            if !perform_iteration(iteration, &mut state, dm, max_no_improvement, &self.config) {
                break;
            }
        }

        info!(
            "Optimization complete after {} iterations: {} m ({} improvements, {} kicks, max stagnation {})",
            iterations,
            state.best_distance,
            state.improvements.len() - 1,
            state.kicks,
            max(state.stagnation, state.max_stagnation)
        );

        let route = Route {
            order: state.best,
            distance: state.best_distance,
        };
        route.validate(dm.len(), depot)?;

        Ok(Solution {
            route,
            improvements: state.improvements,
        })
    }
}
