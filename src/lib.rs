//! # Brownian Motion Simulation
//!
//! This crate generates discretized sample paths of a standard Wiener process
//! (Brownian motion) over a fixed time horizon and provides the statistics
//! used to validate the terminal distribution against theory.
//!
//! ## Modules
//!
//! - [`brownian`] - Wiener process path generation (the core)
//! - [`rng`] - Seeded or entropy-based random source construction
//! - [`stats`] - Terminal-distribution summaries, density, histogram
//! - [`error`] - Invalid-parameter errors
//!
//! ## Example
//!
//! ```rust
//! use brownian_sim::generate;
//!
//! // 10 reproducible paths of W_t on [0, 1] with 1000 steps
//! let run = generate(1.0, 1000, 10, Some(42)).unwrap();
//!
//! assert_eq!(run.times().len(), 1001);
//! assert!(run.paths().iter().all(|p| p[0] == 0.0));
//! println!("first terminal value W_T = {:.4}", run.terminal_values()[0]);
//! ```

pub mod brownian;
pub mod error;
pub mod rng;
pub mod stats;

pub use brownian::{generate, quadratic_variation, WienerPaths, WienerProcess};
pub use error::{SimResult, SimulationError};
