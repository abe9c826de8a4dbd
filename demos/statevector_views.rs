//! Decomposes a few textbook states and prints the chart data built from them.

use qviz::figures::{amplitude_chart, real_imag_charts, significant, ChartOptions};
use qviz::{decompose_statevector, QvizError, Statevector};
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

fn main() -> Result<(), QvizError> {
    tracing_subscriber::fmt::init();

    println!("--- qviz Demo: Statevector Views ---");

    // |0> + i|1>, normalized
    let plus_i = decompose_statevector(&[Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(0.0, FRAC_1_SQRT_2)])?;
    for view in &plus_i {
        println!("  {}", view);
    }

    // |-> shows a negative real amplitude, which the interference lessons rely on
    let minus = Statevector::from_real(&[FRAC_1_SQRT_2, -FRAC_1_SQRT_2])?;
    let (re, im) = real_imag_charts(&minus.decompose());
    println!("\n{}\n{}", re, im);

    // Mostly |000> with a little leakage into |011>
    let mut amps = vec![Complex::new(0.0, 0.0); 8];
    amps[0] = Complex::new(0.99995, 0.0);
    amps[3] = Complex::new(0.0, 0.01);
    let leaky = decompose_statevector(&amps)?;
    println!("{}", amplitude_chart(&leaky, &ChartOptions::amplitudes("Leaky |000⟩")));
    println!("Significant entries: {}", significant(&leaky, 0.01).len());

    // A length that cannot describe any number of qubits
    if let Err(e) = decompose_statevector(&amps[..6]) {
        println!("Rejected: {}", e);
    }

    Ok(())
}
