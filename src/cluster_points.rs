use anyhow::Context;
use clap::Parser;
use general_cluster::{init_logging, seeded_rng, ClusterModel, DEFAULT_K, VIEW_MARGIN};
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Run k-means over a file of `NAME (x, y)` lines")]
struct Args {
    /// The data file to cluster.
    #[clap(value_parser)]
    input: PathBuf,

    /// The number of means.
    #[clap(short, default_value_t = DEFAULT_K)]
    k: usize,

    /// Upper bound on clustering steps.
    #[clap(short, long, default_value = "100")]
    iterations: usize,

    /// Seed for the initial means.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Also print every point with the index of its mean.
    #[clap(short, long)]
    assignments: bool,

    /// Print the data bounds widened by the viewing margin.
    #[clap(long)]
    view_bounds: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging("info");
    info!("General Cluster at your service.");

    let args = Args::parse();
    let mut model = ClusterModel::new(args.k, seeded_rng(args.seed))?;
    model
        .open_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let steps = model.run(args.iterations).context("Failed to cluster")?;
    info!("Ran {} clustering steps", steps);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, (mean, size)) in model.means().iter().zip(model.cluster_sizes()).enumerate() {
        writeln!(out, "mean {} {} points={}", i, mean, size)?;
    }
    if args.view_bounds {
        if let Some(view) = model.bounds().map(|b| b.padded(VIEW_MARGIN)) {
            writeln!(
                out,
                "view ({}, {}) ({}, {})",
                view.min_x, view.min_y, view.max_x, view.max_y
            )?;
        }
    }
    if args.assignments {
        for (point, assignment) in model.points().iter().zip(model.assignments()) {
            if let Some(i) = assignment {
                writeln!(out, "{} {}", point, i)?;
            }
        }
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
