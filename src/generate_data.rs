use anyhow::Context;
use clap::{Parser, Subcommand};
use general_cluster::{
    init_logging, seeded_rng, write_points, Coord, Eggs, Grid, Pattern, Scatter, Sine,
    DEFAULT_LABEL,
};
use log::info;
use std::io::{self, BufWriter, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Print synthetic coordinate pairs, one `LABEL (x, y)` per line")]
struct Args {
    /// Word written in front of every pair.
    #[clap(short, long, default_value = DEFAULT_LABEL)]
    label: String,

    /// Seed for the random patterns. Fresh entropy when absent.
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(subcommand)]
    pattern: Option<PatternArgs>,
}

#[derive(Subcommand, Debug)]
enum PatternArgs {
    /// Row-major grid (the default).
    Grid {
        #[clap(long, default_value = "1000")]
        width: u32,
        #[clap(long, default_value = "20")]
        height: u32,
        #[clap(long, default_value = "5", allow_hyphen_values = true)]
        offset: i64,
    },
    /// Diagonally shifted sine waves.
    Sine {
        #[clap(
            long,
            value_delimiter = ',',
            default_value = "200,400,800",
            allow_hyphen_values = true
        )]
        adders: Vec<i64>,
        #[clap(long, default_value = "1000")]
        samples: u32,
        #[clap(long, default_value = "200")]
        amplitude: f64,
        #[clap(long, default_value = "100")]
        period: f64,
    },
    /// Egg-shaped random blobs around each center.
    Eggs {
        /// `x,y`, repeatable.
        #[clap(
            long = "center",
            default_values = ["100,100", "200,100", "150,150"],
            allow_hyphen_values = true
        )]
        centers: Vec<Coord>,
        #[clap(long, default_value = "50")]
        radius: f64,
        #[clap(long, default_value = "2000")]
        samples: u32,
    },
    /// Uniform random points in a box.
    Scatter {
        #[clap(long, default_value = "0,0", allow_hyphen_values = true)]
        origin: Coord,
        #[clap(long, default_value = "100")]
        width: f64,
        #[clap(long, default_value = "100")]
        height: f64,
        #[clap(long, default_value = "1000")]
        samples: u32,
    },
}

impl From<PatternArgs> for Pattern {
    fn from(args: PatternArgs) -> Self {
        match args {
            PatternArgs::Grid {
                width,
                height,
                offset,
            } => Pattern::Grid(Grid {
                width,
                height,
                offset,
            }),
            PatternArgs::Sine {
                adders,
                samples,
                amplitude,
                period,
            } => Pattern::Sine(Sine {
                adders,
                samples,
                amplitude,
                period,
            }),
            PatternArgs::Eggs {
                centers,
                radius,
                samples,
            } => Pattern::Eggs(Eggs {
                centers,
                radius,
                samples,
            }),
            PatternArgs::Scatter {
                origin,
                width,
                height,
                samples,
            } => Pattern::Scatter(Scatter {
                origin,
                width,
                height,
                samples,
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging("warn");

    let args = Args::parse();
    let pattern = args.pattern.map(Pattern::from).unwrap_or_default();
    info!("Generating {} pattern: {:?}", pattern.name(), pattern);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = write_points(&mut out, &args.label, pattern.points(seeded_rng(args.seed)))
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    info!("Wrote {} points", written);
    Ok(())
}
