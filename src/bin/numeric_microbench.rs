use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use numeric_microbench::benches::{self, morphology, SWEEP_SIZES};
use numeric_microbench::error::BenchError;
use numeric_microbench::harness::{BenchConfig, Profile, Repetitions};
use numeric_microbench::Script;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum of a uniform random ndarray of SIZE elements.
    Sum {
        #[arg(value_name = "SIZE")]
        size: usize,
    },

    /// Generation of a uniform random ndarray of SIZE elements.
    Rand {
        #[arg(value_name = "SIZE")]
        size: usize,
    },

    /// Generation of a standard-normal random ndarray of SIZE elements.
    Randn {
        #[arg(value_name = "SIZE")]
        size: usize,
    },

    /// Hand-written summation loop over SIZE uniform values.
    LoopSum {
        #[arg(value_name = "SIZE")]
        size: usize,
    },

    /// Grayscale dilation of the Shepp-Logan phantom with a square footprint.
    ///
    /// Reports milliseconds per call and auto-calibrates unless --number is given.
    Dilate {
        /// Side length of the phantom image.
        #[arg(long, default_value_t = morphology::IMAGE_SIZE)]
        image_size: usize,

        /// Side length of the square footprint.
        #[arg(long, default_value_t = morphology::FOOTPRINT_WIDTH)]
        width: usize,
    },

    /// Time one sized script across several sizes; output is keyed by size.
    Sweep {
        #[arg(value_enum)]
        script: Script,

        #[arg(long, value_delimiter = ',', default_values_t = Vec::from(SWEEP_SIZES))]
        sizes: Vec<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "numeric-microbench")]
#[command(about = "Micro-benchmarks for numeric kernels (JSON output)")]
struct Args {
    /// Exact number of timed calls. Sized scripts default to the profile's count.
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    number: Option<u64>,

    /// Auto-calibrate the number of calls.
    #[arg(long, global = true, conflicts_with = "number")]
    auto: bool,

    /// Preset for default call count and calibration time (quick: 100 / 0.2s, full: 1000 / 1s).
    #[arg(long, value_enum, default_value_t = ProfileArg::Quick, global = true)]
    profile: ProfileArg,

    /// Seed for random input construction.
    #[arg(long, default_value_t = 0, global = true)]
    seed: u64,

    /// Where to write the JSON result. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON result.
    #[arg(long, global = true)]
    pretty: bool,

    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

impl Args {
    fn repetitions(&self, default: Repetitions) -> Repetitions {
        match (self.number, self.auto) {
            (Some(n), _) => Repetitions::Fixed(n),
            (None, true) => Repetitions::Auto,
            (None, false) => default,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .init();
}

/// Serialize the typed result directly so field and size-key order survive.
fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> Result<(), BenchError> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = BenchConfig {
        profile: args.profile.into(),
        seed: args.seed,
    };
    let sized = args.repetitions(Repetitions::Fixed(cfg.iters()));
    tracing::debug!(profile = cfg.profile.as_str(), seed = cfg.seed, "configured");

    let pretty = args.pretty;
    let json = match &args.cmd {
        Command::Sum { size } => {
            render(&benches::run(&cfg, Script::Sum, *size, sized)?, pretty)?
        }
        Command::Rand { size } => {
            render(&benches::run(&cfg, Script::Rand, *size, sized)?, pretty)?
        }
        Command::Randn { size } => {
            render(&benches::run(&cfg, Script::Randn, *size, sized)?, pretty)?
        }
        Command::LoopSum { size } => {
            render(&benches::run(&cfg, Script::LoopSum, *size, sized)?, pretty)?
        }
        Command::Dilate { image_size, width } => {
            let reps = args.repetitions(Repetitions::Auto);
            render(&morphology::run(&cfg, *image_size, *width, reps)?, pretty)?
        }
        Command::Sweep { script, sizes } => {
            render(&benches::sweep(&cfg, *script, sizes, sized)?, pretty)?
        }
    };

    if let Some(out) = &args.out {
        fs::write(out, json)?;
    } else {
        println!("{json}");
    }

    Ok(())
}
