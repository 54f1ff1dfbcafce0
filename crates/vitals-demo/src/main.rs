// File: crates/vitals-demo/src/main.rs
// Summary: Demo renders syst/dias/pulse either from expressions of x or from a CSV of readings.

mod logger;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use vitals_core::options::AxisOptions;
use vitals_core::theme;
use vitals_core::{
    load_readings_csv, plot_vitals, readings_to_series, Domain, Expression, FlotJsonTarget, PlotOptions,
    PlotTarget, PngTarget, RenderOptions, Series, VitalFunctions,
};

#[derive(Parser)]
#[command(name = "vitals-demo")]
#[command(about = "Render syst/dias/pulse line charts to PNG (and optionally flot JSON)")]
struct Args {
    /// Plot options file (.toml or .json); defaults to the built-in vitals chart
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV of recorded readings (time, syst, dias, pulse) instead of expressions
    #[arg(short, long)]
    readings: Option<PathBuf>,

    /// Systolic series as a function of x, e.g. "sin(x)"
    #[arg(long)]
    syst: Option<String>,

    /// Diastolic series as a function of x
    #[arg(long)]
    dias: Option<String>,

    /// Pulse series as a function of x
    #[arg(long)]
    pulse: Option<String>,

    /// Domain start (inclusive)
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Domain end (exclusive)
    #[arg(long, default_value_t = 10.0)]
    end: f64,

    /// Domain step
    #[arg(long, default_value_t = 0.5)]
    step: f64,

    /// PNG output path
    #[arg(short, long, default_value = "target/out/line-chart.png")]
    out: PathBuf,

    /// Also write the flot payload (series + options) as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Theme preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = 800)]
    width: i32,

    #[arg(long, default_value_t = 400)]
    height: i32,

    /// Skip tick labels and legend
    #[arg(long)]
    no_labels: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Sends one plot call to the PNG target and, when asked, the JSON target.
struct Outputs {
    png: PngTarget,
    json: Option<FlotJsonTarget>,
}

impl PlotTarget for Outputs {
    fn plot(&mut self, series: &[Series], options: &PlotOptions) -> vitals_core::Result<()> {
        self.png.plot(series, options)?;
        if let Some(json) = self.json.as_mut() {
            json.plot(series, options)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut options = match &args.config {
        Some(path) => PlotOptions::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => PlotOptions::default(),
    };

    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        warn!(requested = %args.theme, using = theme.name, "unknown theme");
    }

    let mut png = PngTarget::new(&args.out);
    png.theme = theme;
    png.render = RenderOptions {
        width: args.width,
        height: args.height,
        draw_labels: !args.no_labels,
        ..RenderOptions::default()
    };
    let mut outputs = Outputs { png, json: args.json.clone().map(FlotJsonTarget::new) };

    if let Some(csv) = &args.readings {
        let readings = load_readings_csv(csv)
            .with_context(|| format!("failed to load CSV '{}'", csv.display()))?;
        if readings.is_empty() {
            bail!("no readings loaded from {}; check headers/delimiter", csv.display());
        }
        info!(rows = readings.len(), path = %csv.display(), "loaded readings");

        // The built-in bounds suit unit waves, not mmHg; let the data decide.
        if args.config.is_none() {
            options.xaxis = AxisOptions::auto();
            options.yaxis = AxisOptions::auto();
        }
        let series = readings_to_series(&readings);
        outputs.plot(&series, &options).context("plotting readings")?;
    } else {
        let (Some(syst), Some(dias), Some(pulse)) = (&args.syst, &args.dias, &args.pulse) else {
            bail!("pass --syst, --dias and --pulse expressions, or --readings <csv>");
        };
        let syst = Expression::parse(syst)?;
        let dias = Expression::parse(dias)?;
        let pulse = Expression::parse(pulse)?;
        let fns = VitalFunctions { syst: &syst, dias: &dias, pulse: &pulse };
        let domain = Domain::new(args.start, args.end, args.step)?;
        info!(
            start = domain.start(),
            end = domain.end(),
            step = domain.step(),
            points = domain.len(),
            "generating series"
        );
        plot_vitals(&mut outputs, &domain, &fns, &options).context("plotting vitals")?;
    }

    println!("Wrote {}", args.out.display());
    if let Some(json) = &args.json {
        println!("Wrote {}", json.display());
    }
    Ok(())
}
