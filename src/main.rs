// main.rs
//
// Command-line front end: compute one envelope and print its summary line,
// optionally writing the reach points as CSV for a plotting tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use armreach::enumerate::SerialEnumerationOps;
use armreach::errors::{ConfigLoadError, EnvelopeError};
use armreach::float_types::Real;
use armreach::io::write_points_csv;
use armreach::{EnvelopeConfig, MirrorPolicy, WorkEnvelope};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "armreach", version, about = "Approximate the work envelope of an equal-link robot arm")]
struct Args {
    /// YAML config file; explicit flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of joints (1-9)
    #[arg(long)]
    dof: Option<usize>,

    /// Total arm reach in cm
    #[arg(long)]
    reach: Option<Real>,

    /// Angle step in degrees
    #[arg(long)]
    increment: Option<Real>,

    /// Joint limit in degrees, each joint sweeps [-max, max]
    #[arg(long)]
    max_angle: Option<Real>,

    /// How the computed half is mirrored
    #[arg(long, value_enum)]
    mirror: Option<MirrorArg>,

    /// Worker threads (1 runs serially; default uses every core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Write reach points to this CSV file
    #[arg(short, long)]
    points: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MirrorArg {
    Duplicate,
    SinglePlane,
    SubtractZeroAngle,
}

impl From<MirrorArg> for MirrorPolicy {
    fn from(value: MirrorArg) -> Self {
        match value {
            MirrorArg::Duplicate => MirrorPolicy::Duplicate,
            MirrorArg::SinglePlane => MirrorPolicy::SinglePlane,
            MirrorArg::SubtractZeroAngle => MirrorPolicy::SubtractZeroAngle,
        }
    }
}

// Defaults of the classic 3-DOF demo arm.
const DEFAULT_CONFIG: EnvelopeConfig = EnvelopeConfig::new(3, 25.0, 10.0, 90.0);

fn build_config(args: &Args) -> Result<EnvelopeConfig, ConfigLoadError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            EnvelopeConfig::load(path)?
        },
        None => DEFAULT_CONFIG,
    };
    if let Some(dof) = args.dof {
        config.dof = dof;
    }
    if let Some(reach) = args.reach {
        config.reach = reach;
    }
    if let Some(increment) = args.increment {
        config.angle_increment = increment;
    }
    if let Some(max_angle) = args.max_angle {
        config.max_angle = max_angle;
    }
    if let Some(mirror) = args.mirror {
        config.mirror = mirror.into();
    }
    config.validate()?;
    Ok(config)
}

fn compute(args: &Args, config: &EnvelopeConfig) -> Result<WorkEnvelope, EnvelopeError> {
    match args.threads {
        Some(1) => WorkEnvelope::compute_with(config, &SerialEnumerationOps::new()),
        #[cfg(feature = "parallel")]
        Some(threads) => WorkEnvelope::compute_with(
            config,
            &armreach::enumerate::ParallelEnumerationOps::with_threads(threads),
        ),
        _ => WorkEnvelope::compute(config),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    log::info!(
        "dof={} reach={} cm increment={} deg max_angle={} deg mirror={:?}",
        config.dof,
        config.reach,
        config.angle_increment,
        config.max_angle,
        config.mirror
    );

    let envelope = compute(args, &config)?;
    let summary = envelope.summary();

    if let Some(path) = &args.points {
        let file = File::create(path)?;
        write_points_csv(summary.points(), BufWriter::new(file))?;
        log::info!("wrote {} reach points to {}", summary.unique_count, path.display());
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{summary}")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        },
    }
}

