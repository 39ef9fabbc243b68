mod plan;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cufft_bridge_core::{BindingContext, BridgeConfig, CufftStatus, LibraryProperty, LocalHost, LogLevel};
use cufft_bridge_cuda::{CufftBridge, LinkedCufft};

use crate::plan::PlanFile;

#[derive(Parser, Debug)]
#[command(name = "cufft-bridge", about = "Query the linked cuFFT library")]
struct Cli {
    /// Path to a TOML bridge configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log level (quiet, error, warning, info, debug, trace); overrides the config
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cuFFT version and library properties
    Info,
    /// Estimate the work area size of a plan described in a TOML file
    Estimate {
        /// Plan description (n, type, batch, optional layout)
        #[arg(short, long)]
        plan: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };
    let level = settle_log_level(cli.log_level, &mut config);
    env_logger::Builder::new()
        .filter_level(level.filter())
        .parse_default_env()
        .init();

    if !LinkedCufft::is_available() {
        log::warn!("no usable CUDA device; cuFFT calls will report failures");
    }
    let bridge: CufftBridge = BindingContext::with_config(LinkedCufft::new(), LocalHost, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Info => info(&bridge, &mut out)?,
        Command::Estimate { plan } => {
            log::info!("loading plan {}", plan.display());
            let plan = PlanFile::load(&plan)?;
            let ty = plan.ty.resolve()?;
            let estimate = plan::estimate(&bridge, &plan, ty)?;
            writeln!(out, "routine:   {}", estimate.routine)?;
            writeln!(out, "result:    {}", estimate.status)?;
            if estimate.status.is_success() {
                writeln!(out, "workSize:  {} bytes", estimate.work_size)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Default level for the logger. The bridge only reapplies a level that came
/// from `--log-level` or the config file, so `RUST_LOG` keeps working.
fn settle_log_level(flag: Option<LogLevel>, config: &mut BridgeConfig) -> LogLevel {
    if flag.is_some() {
        config.log_level = flag;
    }
    config.log_level.unwrap_or(LogLevel::Warning)
}

fn info(bridge: &CufftBridge, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut version = [0];
    let status = bridge.get_version(Some(&mut version[..]))?;
    report(out, "version", status, version[0])?;

    for property in LibraryProperty::ALL {
        let mut value = [0];
        let status = bridge.get_property(property.raw(), Some(&mut value[..]))?;
        report(out, property.label(), status, value[0])?;
    }
    Ok(())
}

fn report(out: &mut impl Write, label: &str, status: CufftStatus, value: i32) -> io::Result<()> {
    if status.is_success() {
        writeln!(out, "{:<10} {}", format!("{}:", label), value)
    } else {
        writeln!(out, "{:<10} unavailable ({})", format!("{}:", label), status)
    }
}
