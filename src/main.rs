use nbodies::{read_universe_file, write_universe, FrameLogger, Parameters, RunConfig, Simulator};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE_MESSAGE: &str = "Incorrect amount of arguments.\nUsage: nbodies <time> <time step> <universe file>";
const FAULTY_ARGUMENTS_MESSAGE: &str = "Faulty command line arguments were supplied.";

#[derive(Parser, Debug)]
#[command(version, allow_negative_numbers = true, about = "Simulate N bodies in a plane under Newtonian gravity")]
struct Args {
    /// Total simulated time
    time: String,
    /// Time step size
    time_step: String,
    /// Universe file: body count, radius, then `x y vx vy mass label` per line
    universe_file: PathBuf,

    /// YAML run configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Use the fixed step size in the Euler updates instead of the elapsed time
    #[arg(long)]
    fixed_step: bool,
    /// Evaluate the force pass in parallel
    #[arg(long)]
    parallel: bool,
    /// Trace every n-th frame (RUST_LOG=trace)
    #[arg(long)]
    frame_interval: Option<usize>,
}

// load here to keep main clean
fn load_run_config(args: &Args) -> Result<RunConfig> {
    let cfg = match &args.config {
        Some(path) => RunConfig::from_yaml_file(path)
            .with_context(|| format!("loading run config {}", path.display()))?,
        None => RunConfig::default(),
    };

    Ok(cfg.with_overrides(args.fixed_step, args.parallel, args.frame_interval))
}

fn run(args: Args) -> Result<()> {
    let total_time: f64 = args.time.trim().parse()
        .with_context(|| format!("time {:?} is not a number", args.time))?;
    let dt: f64 = args.time_step.trim().parse()
        .with_context(|| format!("time step {:?} is not a number", args.time_step))?;

    let cfg = load_run_config(&args)?;
    let universe = read_universe_file(&args.universe_file)
        .with_context(|| format!("loading universe {}", args.universe_file.display()))?;

    let mut simulator = Simulator::new(universe, Parameters::from_config(total_time, dt, &cfg))?;
    let mut frames = FrameLogger::new(cfg.frame_interval);
    let universe = simulator.run(&mut frames);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_universe(&mut out, universe).context("writing results")?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                eprintln!("{USAGE_MESSAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("{FAULTY_ARGUMENTS_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}
