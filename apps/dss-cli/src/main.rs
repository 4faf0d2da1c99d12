use clap::{Parser, Subcommand};
use dss_app::{compute_matrices, run_variant, AppResult, RunOutcome};
use dss_discretize::GSeries;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dss-cli")]
#[command(about = "Discrete state-space laboratory - sampled LTI plant simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run definition file
    Validate {
        /// Path to the run definition YAML file
        run_path: PathBuf,
    },
    /// Compute and print the discrete pair {F, G}
    Matrices {
        /// Path to the run definition YAML file
        run_path: PathBuf,
    },
    /// Discretize and simulate the configured variant
    Run {
        /// Path to the run definition YAML file
        run_path: PathBuf,
        /// Directory for snapshot files and manifests
        #[arg(long, default_value = "runs")]
        out_dir: PathBuf,
        /// Output CSV file for chart samples (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { run_path } => cmd_validate(&run_path),
        Commands::Matrices { run_path } => cmd_matrices(&run_path),
        Commands::Run {
            run_path,
            out_dir,
            output,
        } => cmd_run(&run_path, &out_dir, output.as_deref()),
    }
}

fn cmd_validate(run_path: &Path) -> AppResult<()> {
    println!("Validating run definition: {}", run_path.display());
    let definition = dss_project::load_yaml(run_path)?;
    println!(
        "✓ Run definition is valid (n={}, m={}, l={})",
        definition.a.nrows(),
        definition.b.ncols(),
        definition.c.nrows()
    );
    Ok(())
}

fn cmd_matrices(run_path: &Path) -> AppResult<()> {
    let definition = dss_project::load_yaml(run_path)?;
    // The standalone matrix command keeps the convention that skips the
    // zeroth G term.
    let pair = compute_matrices(&definition, GSeries::SkipZerothTerm)?;
    println!("F ({}x{}):{}", pair.f.nrows(), pair.f.ncols(), pair.f);
    println!("G ({}x{}):{}", pair.g.nrows(), pair.g.ncols(), pair.g);
    Ok(())
}

fn cmd_run(run_path: &Path, out_dir: &Path, output: Option<&Path>) -> AppResult<()> {
    let definition = dss_project::load_yaml(run_path)?;
    println!(
        "Running variant {} (T = {} s, q = {}, k = {})",
        definition.variant, definition.sample_period, definition.order, definition.horizon
    );

    let summary = match run_variant(&definition, out_dir)? {
        RunOutcome::Completed(summary) => summary,
        RunOutcome::UnknownVariant { id } => {
            println!("Unknown variant: {id}");
            return Ok(());
        }
    };

    println!(
        "✓ Simulation completed: {} steps, snapshots in {}",
        summary.iteration_count,
        summary.snapshot_path.display()
    );

    // Build CSV of the (t, y) chart samples
    let mut csv = String::from("t,y\n");
    for (t, y) in &summary.chart {
        csv.push_str(&format!("{},{}\n", t, y));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} chart samples to {}",
            summary.chart.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
