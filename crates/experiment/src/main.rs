use std::path::PathBuf;

use adiabat_experiment::{
    DrawMode, ExperimentConfig, Observer, Record, StopBelow,
    run::{self, Event, Status},
};
use anyhow::Context;
use clap::{Parser, ValueEnum};

/// Pump gas from an intake reservoir into an outlet through a compressor.
#[derive(Debug, Parser)]
#[command(name = "adiabat", version, about)]
struct Cli {
    /// TOML experiment configuration; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of pump cycles, overriding the configuration.
    #[arg(long)]
    cycles: Option<usize>,

    /// Work available per delivery stroke in J, overriding the configuration.
    #[arg(long)]
    max_energy: Option<f64>,

    /// How the compressor draws from the intake, overriding the configuration.
    #[arg(long, value_enum)]
    draw: Option<DrawArg>,

    /// Stop once the intake pressure falls below this value in Pa.
    #[arg(long)]
    stop_below: Option<f64>,

    /// Print every Nth cycle.
    #[arg(long, default_value_t = 25)]
    every: usize,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DrawArg {
    Passive,
    OneWay,
}

impl From<DrawArg> for DrawMode {
    fn from(arg: DrawArg) -> Self {
        match arg {
            DrawArg::Passive => DrawMode::Passive,
            DrawArg::OneWay => DrawMode::OneWay,
        }
    }
}

impl Cli {
    fn config(&self) -> anyhow::Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_path(path)?,
            None => ExperimentConfig::default(),
        };

        if let Some(cycles) = self.cycles {
            config.cycles = cycles;
        }
        if let Some(max_energy) = self.max_energy {
            config.max_energy_per_cycle = max_energy;
        }
        if let Some(draw) = self.draw {
            config.draw = draw.into();
        }

        config.validate().context("invalid experiment configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let every = cli.every.max(1);
    let mut stop = cli.stop_below.map(|pressure| StopBelow { pressure });

    print_header();
    let observer = |event: &Event| {
        if event.cycle % every == 0 {
            print_row(&event.record);
        }
        stop.as_mut().and_then(|stop| stop.observe(event))
    };

    let solution = run::run(config.rig()?, &config.settings(), observer)?;

    let last = solution.last();
    if last.cycle % every != 0 {
        print_row(last);
    }

    let first = solution.first();
    match solution.status {
        Status::Complete => log::info!("finished {} cycles", solution.cycles),
        Status::StoppedByObserver => log::info!("stopped after {} cycles", solution.cycles),
    }
    log::info!(
        "intake {:.3} -> {:.3} Pa, outlet {:.3} -> {:.3} Pa",
        first.intake.pressure,
        last.intake.pressure,
        first.outlet.pressure,
        last.outlet.pressure
    );

    Ok(())
}

fn print_header() {
    println!(
        "{:>6}  {:>14} {:>12} {:>10}  {:>14} {:>12} {:>10}",
        "cycle", "intake Pa", "intake mol", "intake K", "outlet Pa", "outlet mol", "outlet K"
    );
}

fn print_row(record: &Record) {
    println!(
        "{:>6}  {:>14.3} {:>12.6} {:>10.3}  {:>14.3} {:>12.6} {:>10.3}",
        record.cycle,
        record.intake.pressure,
        record.intake.moles,
        record.intake.temperature,
        record.outlet.pressure,
        record.outlet.moles,
        record.outlet.temperature
    );
}

