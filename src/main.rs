//! Reciprocity - Reciprocity Theorem Demonstrator
//!
//! Evaluates both mirrored circuits at the given source voltages and prints
//! their readings and the reciprocity verdict.
//!
//! # Usage
//!
//! ```bash
//! reciprocity --variant ladder --va 6 --vb 6 --trials 1000 --svg-dir out/
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use reciprocity_core::{
    display::DisplayFields,
    error::{ReciprocityError, Result},
    reciprocity::MessageStyle,
    schematic::{render, SvgRenderer},
    session::{CycleReport, DEFAULT_VOLTAGE},
    solver::{practical_spread, UniformTolerance},
    CircuitSide, Demonstration, NetworkConfig, ProgramVariant,
};

/// Reciprocity theorem demonstrator for two mirrored resistor circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Program variant: "bridge" (3 resistors) or "ladder" (5 resistors)
    #[arg(long, default_value = "bridge")]
    variant: ProgramVariant,

    /// Source voltage of circuit 1 (volts)
    #[arg(long, default_value_t = DEFAULT_VOLTAGE, allow_negative_numbers = true)]
    va: f64,

    /// Source voltage of circuit 2 (volts)
    #[arg(long, default_value_t = DEFAULT_VOLTAGE, allow_negative_numbers = true)]
    vb: f64,

    /// Verdict message style: "plain" or "emphasized" (defaults to the variant's)
    #[arg(long)]
    style: Option<MessageStyle>,

    /// Component tolerance as a fraction (0.01 = ±1%)
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Seed for reproducible tolerance draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON network configuration; its topology overrides --variant
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Repeat the practical evaluation and report the resistance spread
    #[arg(long, default_value_t = 0)]
    trials: usize,

    /// Directory to write circuit1.svg and circuit2.svg into
    #[arg(long, value_name = "DIR")]
    svg_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Resolve the network
    let (variant, mut network) = match &args.config {
        Some(path) => {
            let network = NetworkConfig::from_file(path)?;
            (ProgramVariant::from(network.topology()), network)
        }
        None => (args.variant, args.variant.network()),
    };
    if let Some(tolerance) = args.tolerance {
        network = network.with_tolerance(tolerance)?;
    }

    let mut policy = variant.policy();
    if let Some(style) = args.style {
        policy = policy.with_style(style);
    }

    let mut demo = Demonstration::with_parts(
        network,
        policy,
        variant.resistance_decimals(),
        tolerance_source(args.seed),
    );

    // Same order as the page: circuit 1, then circuit 2
    let reports = vec![
        demo.on_voltage_input(CircuitSide::First, args.va),
        demo.on_voltage_input(CircuitSide::Second, args.vb),
    ];

    println!("Variant: {}", variant);
    for report in &reports {
        print_fields(report.side, &report.display);
    }
    println!("{}", demo.message());

    if args.trials > 0 {
        // Separate stream so the spread does not shift the readings above
        let mut source = tolerance_source(args.seed.map(|s| s.wrapping_add(1)));
        println!();
        for report in &reports {
            let volts = demo.voltage(report.side);
            match practical_spread(demo.solver(), volts, report.side, args.trials, &mut source) {
                Some(spread) => println!(
                    "{}: {} trials, R = {:.4}..{:.4} kΩ (mean {:.4}, max deviation {:.2}%)",
                    report.side,
                    spread.trials,
                    spread.min,
                    spread.max,
                    spread.mean,
                    spread.max_deviation * 100.0
                ),
                None => println!("{}: resistance undefined at {} V", report.side, volts),
            }
        }
    }

    if let Some(dir) = &args.svg_dir {
        write_schematics(dir, &reports)?;
    }

    Ok(())
}

fn tolerance_source(seed: Option<u64>) -> UniformTolerance {
    match seed {
        Some(seed) => UniformTolerance::seeded(seed),
        None => UniformTolerance::from_entropy(),
    }
}

fn print_fields(side: CircuitSide, fields: &DisplayFields) {
    println!();
    println!("{}", side);
    for (label, value) in fields.rows() {
        println!("  {:<28} {:>10}", label, value);
    }
}

fn write_schematics(dir: &Path, reports: &[CycleReport]) -> Result<()> {
    let write_error = |path: &Path, source| ReciprocityError::SchematicWriteError {
        path: path.display().to_string(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
    for report in reports {
        let path = dir.join(format!("circuit{}.svg", report.side.number()));
        let mut svg = SvgRenderer::default();
        render(&mut svg, &report.schematic);
        std::fs::write(&path, svg.finish()).map_err(|e| write_error(&path, e))?;
        tracing::info!(path = %path.display(), "wrote schematic");
    }
    Ok(())
}
