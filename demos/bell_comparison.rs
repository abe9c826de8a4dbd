//! Compares an ideal Bell-state distribution with sampled and "hardware" counts.

use qviz::figures::{difference_chart, histogram_comparison, multiple_histograms, progress_bar, ChartOptions};
use qviz::{
    compare_distributions, CountSource, MeasurementDistribution, MonarchBackend, QvizError, StatevectorSampler,
    Statevector,
};
use std::f64::consts::FRAC_1_SQRT_2;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QvizError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("--- qviz Demo: Bell State, Simulator vs Hardware ---");
    println!("{}", progress_bar(1, 3));

    // |Φ+> = (|00> + |11>)/√2
    let bell = Statevector::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2])?;
    let simulated = StatevectorSampler::with_seed(7).submit(&bell, 1000)?;
    println!("Simulated: {}", simulated);

    // Counts as they came back from a noisy device run
    let hardware = MeasurementDistribution::from_counts([("00", 480), ("01", 25), ("10", 25), ("11", 470)])?;
    println!("Hardware:  {}", hardware);

    let report = compare_distributions(&simulated, &hardware).with_name("Bell State");
    println!("\n{}", report);

    println!("\n{}", progress_bar(2, 3));
    let (left, right) = histogram_comparison(&simulated, &hardware, ("Simulator", "Hardware"), &ChartOptions::counts(""));
    println!("{}\n{}", left, right);
    println!("{}", difference_chart(&report));

    let psi_plus = MeasurementDistribution::from_counts([("00", 0), ("01", 500), ("10", 500), ("11", 0)])?;
    let grid = multiple_histograms(&[("Bell Φ⁺", &simulated), ("Bell Ψ⁺", &psi_plus)], 2, &ChartOptions::counts(""));
    println!("Grid {:?} with {} hidden cell(s)", grid.shape(), grid.hidden_cells());

    println!("\n{}", progress_bar(3, 3));
    let backend = MonarchBackend::new();
    println!("{}", backend.info());
    match backend.submit(&bell, 1000) {
        Ok(counts) => println!("Hardware counts: {}", counts),
        Err(e) => eprintln!("Hardware run skipped: {}", e),
    }

    Ok(())
}
