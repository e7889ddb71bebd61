//! Standard Brownian motion (Wiener process) path generation.
//!
//! Discretizes W_t on [0, T] with N equal steps of size dt = T/N:
//! - W_0 = 0
//! - W_{t+dt} - W_t ~ N(0, dt), independent across steps and paths
//!
//! Paths are built as cumulative sums of sqrt(dt)-scaled standard-normal
//! increments, so the terminal value W_T is N(0, T) in distribution.

use crate::error::{ensure_nonzero, ensure_positive, SimResult};
use crate::rng::create_rng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

/// Standard Wiener process generator.
///
/// Stateless apart from the cached standard-normal distribution; all draws
/// come from the generator handle supplied by the caller, so two calls with
/// identically seeded handles produce identical paths.
#[derive(Debug, Clone)]
pub struct WienerProcess {
    /// Standard normal distribution for generating increments
    normal: Normal<f64>,
}

impl WienerProcess {
    /// Creates a new Wiener process generator.
    ///
    /// # Example
    /// ```
    /// use brownian_sim::WienerProcess;
    /// let process = WienerProcess::new();
    /// ```
    pub fn new() -> Self {
        Self {
            normal: Normal::new(0.0, 1.0).expect("Invalid normal distribution parameters"),
        }
    }

    /// Generates a single path of W_t over [0, `horizon`].
    ///
    /// # Arguments
    /// * `rng` - Random number generator
    /// * `horizon` - Final time T (must be positive and finite)
    /// * `n_steps` - Number of time steps N (must be at least 1)
    ///
    /// # Returns
    /// Vector of N+1 values W_0, W_dt, ..., W_T with W_0 = 0.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`](crate::SimulationError) if the
    /// horizon or step count is out of range; no draws are consumed in that
    /// case.
    ///
    /// # Example
    /// ```
    /// use brownian_sim::{rng::create_rng, WienerProcess};
    ///
    /// let process = WienerProcess::new();
    /// let mut rng = create_rng(Some(42));
    /// let path = process.sample_path(&mut rng, 1.0, 100).unwrap();
    /// assert_eq!(path.len(), 101);
    /// assert_eq!(path[0], 0.0);
    /// ```
    pub fn sample_path<R: Rng>(
        &self,
        rng: &mut R,
        horizon: f64,
        n_steps: usize,
    ) -> SimResult<Vec<f64>> {
        ensure_positive("horizon", horizon)?;
        ensure_nonzero("n_steps", n_steps)?;

        let dt = horizon / n_steps as f64;
        Ok(self.walk(rng, n_steps, dt.sqrt()))
    }

    /// Generates a batch of independent paths together with their time grid.
    ///
    /// Validation happens before the first draw: on an invalid parameter the
    /// generator state is untouched and no partial batch exists. On success
    /// exactly `n_paths * n_steps` normal draws are consumed, row by row.
    ///
    /// # Arguments
    /// * `rng` - Random number generator
    /// * `horizon` - Final time T (must be positive and finite)
    /// * `n_steps` - Number of time steps N (must be at least 1)
    /// * `n_paths` - Number of independent paths (must be at least 1)
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`](crate::SimulationError) for a
    /// non-positive or non-finite horizon, or a zero step or path count.
    pub fn sample_paths<R: Rng>(
        &self,
        rng: &mut R,
        horizon: f64,
        n_steps: usize,
        n_paths: usize,
    ) -> SimResult<WienerPaths> {
        validate(horizon, n_steps, n_paths)?;

        let dt = horizon / n_steps as f64;
        let sqrt_dt = dt.sqrt();

        let values = (0..n_paths)
            .map(|_| self.walk(rng, n_steps, sqrt_dt))
            .collect();

        Ok(WienerPaths {
            times: time_grid(horizon, n_steps),
            values,
            horizon,
        })
    }

    /// Generates a batch of paths in parallel across CPU cores.
    ///
    /// Each path draws from its own thread-local generator, so the output is
    /// not reproducible; use [`sample_paths`](Self::sample_paths) with a
    /// seeded generator when reproducibility matters.
    pub fn sample_paths_parallel(
        &self,
        horizon: f64,
        n_steps: usize,
        n_paths: usize,
    ) -> SimResult<WienerPaths> {
        validate(horizon, n_steps, n_paths)?;

        let dt = horizon / n_steps as f64;
        let sqrt_dt = dt.sqrt();

        let values = (0..n_paths)
            .into_par_iter()
            .map(|_| {
                let mut rng = rand::thread_rng();
                self.walk(&mut rng, n_steps, sqrt_dt)
            })
            .collect();

        Ok(WienerPaths {
            times: time_grid(horizon, n_steps),
            values,
            horizon,
        })
    }

    /// Cumulative sum of `n_steps` increments sqrt(dt) * Z, prefixed with 0.
    fn walk<R: Rng>(&self, rng: &mut R, n_steps: usize, sqrt_dt: f64) -> Vec<f64> {
        let mut path = Vec::with_capacity(n_steps + 1);
        path.push(0.0);

        let mut current = 0.0;
        for _ in 0..n_steps {
            // dW = sqrt(dt) * Z, where Z ~ N(0, 1)
            current += sqrt_dt * self.normal.sample(rng);
            path.push(current);
        }

        path
    }
}

impl Default for WienerProcess {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch of simulated Wiener paths and the time grid they live on.
///
/// Produced in a single generation call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct WienerPaths {
    /// Grid of N+1 times, times[k] = k * T / N
    times: Vec<f64>,
    /// One row per path, each of length N+1 with row[0] = 0
    values: Vec<Vec<f64>>,
    /// Final time T
    horizon: f64,
}

impl WienerPaths {
    /// The time grid: N+1 equally spaced values from 0 to the horizon.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The simulated paths, one row of N+1 values per path.
    pub fn paths(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Final time T of the simulation.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of time steps N.
    pub fn n_steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Number of independent paths in the batch.
    pub fn n_paths(&self) -> usize {
        self.values.len()
    }

    /// The W_T sample: the last value of every path.
    ///
    /// In distribution this is N(0, T); its empirical mean and variance are
    /// what the reporting layer compares against theory.
    pub fn terminal_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|path| *path.last().expect("paths are never empty"))
            .collect()
    }
}

/// Generates a batch of standard Brownian paths in one call.
///
/// Builds a fresh random source (seeded when `seed` is `Some`, OS entropy
/// otherwise) and returns the time grid together with the `n_paths` x
/// (`n_steps` + 1) batch. Two calls with the same parameters and the same
/// seed return bit-identical output.
///
/// # Example
/// ```
/// use brownian_sim::generate;
///
/// let run = generate(1.0, 1000, 10, Some(42)).unwrap();
/// assert_eq!(run.times().len(), 1001);
/// assert_eq!(run.paths().len(), 10);
/// ```
///
/// # Errors
/// [`SimulationError::InvalidParameter`](crate::SimulationError) if
/// `horizon <= 0`, `n_steps == 0`, or `n_paths == 0`.
pub fn generate(
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
    seed: Option<u64>,
) -> SimResult<WienerPaths> {
    let mut rng = create_rng(seed);
    WienerProcess::new().sample_paths(&mut rng, horizon, n_steps, n_paths)
}

/// Computes the quadratic variation of a path.
///
/// For a Wiener path over [0, T] the sum of squared increments converges to
/// T as the grid refines, which makes this a cheap sanity check on generated
/// paths.
pub fn quadratic_variation(path: &[f64]) -> f64 {
    path.windows(2)
        .map(|w| {
            let diff = w[1] - w[0];
            diff * diff
        })
        .sum()
}

fn validate(horizon: f64, n_steps: usize, n_paths: usize) -> SimResult<()> {
    ensure_positive("horizon", horizon)?;
    ensure_nonzero("n_steps", n_steps)?;
    ensure_nonzero("n_paths", n_paths)?;
    Ok(())
}

fn time_grid(horizon: f64, n_steps: usize) -> Vec<f64> {
    (0..=n_steps)
        .map(|k| k as f64 * horizon / n_steps as f64)
        .collect()
}
