//! Demonstration run: simulate standard Brownian motion and compare the
//! terminal distribution against theory.
//!
//! Run with: cargo run --release

use brownian_sim::{
    generate, quadratic_variation,
    stats::{gaussian_density, Histogram, TerminalSummary},
    WienerPaths,
};

// Demonstration defaults: many paths so the terminal histogram is smooth,
// fixed seed so every run reproduces the same numbers.
const HORIZON: f64 = 1.0;
const N_STEPS: usize = 1000;
const N_PATHS: usize = 10_000;
const SEED: u64 = 42;
const N_BINS: usize = 50;
const BAR_WIDTH: usize = 40;

fn main() {
    println!("=== Standard Brownian Motion ===\n");
    println!(
        "T = {}, N = {} steps, {} paths, seed = {}\n",
        HORIZON, N_STEPS, N_PATHS, SEED
    );

    let run = generate(HORIZON, N_STEPS, N_PATHS, Some(SEED))
        .expect("demonstration parameters are valid");

    report_sample_paths(&run);
    report_terminal_distribution(&run);
}

fn report_sample_paths(run: &WienerPaths) {
    println!("--- Sample Paths ---");

    for (i, path) in run.paths().iter().take(5).enumerate() {
        let terminal = path.last().unwrap();
        let peak = path.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let trough = path.iter().cloned().fold(f64::INFINITY, f64::min);
        println!(
            "  Path {}: W_T = {:+.4}, range [{:+.4}, {:+.4}]",
            i + 1,
            terminal,
            trough,
            peak
        );
    }

    let qv = quadratic_variation(&run.paths()[0]);
    println!(
        "\nQuadratic variation of path 1: {:.4} (expected ~ {:.1})\n",
        qv,
        run.horizon()
    );
}

fn report_terminal_distribution(run: &WienerPaths) {
    println!("--- Distribution of W_T ---");

    let terminals = run.terminal_values();
    let summary = TerminalSummary::from_samples(&terminals);

    println!(
        "Empirical mean:      {:+.6} (theoretical 0, std error {:.4})",
        summary.mean, summary.std_error
    );
    println!(
        "Empirical variance:  {:.6} (theoretical {:.1})\n",
        summary.variance,
        run.horizon()
    );

    let hist = Histogram::from_samples(&terminals, N_BINS).expect("terminal sample is non-empty");

    let max_density = hist
        .densities
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);

    println!("{:>8}  {:>9}  {:>9}", "center", "empirical", "N(0, T)");
    for k in 0..hist.n_bins() {
        let center = hist.center(k);
        let empirical = hist.densities[k];
        let theoretical = gaussian_density(center, 0.0, run.horizon());
        let bar_len = (empirical / max_density * BAR_WIDTH as f64).round() as usize;

        println!(
            "{:>+8.3}  {:>9.4}  {:>9.4}  {}",
            center,
            empirical,
            theoretical,
            "#".repeat(bar_len)
        );
    }
}
