// File: crates/vitals-examples/src/bin/waves.rs
// Summary: Minimal example that plots sin / cos / sin 2x as the three vitals series.

use anyhow::Result;
use vitals_core::{plot_vitals, Domain, PlotOptions, PngTarget, VitalFunctions};

fn main() -> Result<()> {
    // Stand-in waves; real series functions are supplied by the caller.
    let syst = |x: f64| x.sin();
    let dias = |x: f64| x.cos();
    let pulse = |x: f64| (2.0 * x).sin();
    let fns = VitalFunctions { syst: &syst, dias: &dias, pulse: &pulse };

    let mut target = PngTarget::new("target/out/example_waves.png");
    plot_vitals(&mut target, &Domain::default(), &fns, &PlotOptions::default())?;
    println!("Wrote {}", target.path.display());
    Ok(())
}
