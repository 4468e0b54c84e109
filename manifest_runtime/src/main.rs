//! `manifest` CLI.
//!
//! Thin shell over the runtime: parse arguments, load config, start
//! logging, print results. Errors surface as a non-zero exit status.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use manifest_engine::catalogue::PantacleKind;
use manifest_engine::domain::QuantumCode;
use manifest_engine::engine::derive_reading;
use manifest_engine::lunar::compute_lunar_phase;
use manifest_engine::request::ManifestationRequest;

use manifest_runtime::config::RuntimeConfig;
use manifest_runtime::logging::init_logging;
use manifest_runtime::report::unseal_request_with;
use manifest_runtime::report_codec::import_report_from_file;
use manifest_runtime::session::Session;

#[derive(Parser)]
#[command(name = "manifest")]
#[command(about = "Numerology, lunar phase and quantum codes from a name, a birth date and an intention")]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RequestArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Birth date as DD/MM/YYYY
    #[arg(long)]
    birth_date: String,

    /// Statement of intent
    #[arg(long)]
    intention: String,

    /// abundance | love | protection | wisdom | healing | power
    #[arg(long)]
    pantacle: Option<PantacleKind>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive and print a reading without writing anything
    Reading {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive a reading and write its report to the output directory
    Manifest {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the lunar phase for a date (today by default)
    Phase {
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the request sealed inside a report file
    Unseal {
        /// Quantum code the report was sealed with (the report's own code by default)
        #[arg(long)]
        code: Option<QuantumCode>,

        /// Report JSON written by `manifest`
        #[arg(long)]
        file: PathBuf,
    },
}

impl RequestArgs {
    fn into_request(self, config: &RuntimeConfig) -> ManifestationRequest {
        ManifestationRequest::new(&self.intention, &self.name, &self.birth_date)
            .with_pantacle(self.pantacle.unwrap_or(config.default_pantacle))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RuntimeConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config.log_level).map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Reading { request, json } => {
            let request = request.into_request(&config);
            let reading = derive_reading(&request, &Local::now().naive_local());
            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                let n = &reading.numerology;
                println!("Destiny:      {}", n.destiny_number);
                println!("Soul:         {}", n.soul_number);
                println!("Personality:  {}", n.personality_number);
                println!("Expression:   {}", n.expression_number);
                println!("Quantum code: {}", reading.quantum_code);
                println!("Lunar phase:  {:.1}°", reading.lunar_phase.degrees());
                println!("Sigil:        {}", reading.sigil.condensed_text);
                println!(
                    "Pantacle:     {} ({})",
                    reading.pantacle,
                    reading.pantacle.seal_name()
                );
            }
        }

        Commands::Manifest { request } => {
            let request = request.into_request(&config);
            let session = Session::new(config);
            let outcome = session.manifest(&request).context("writing manifestation report")?;
            println!("Quantum code: {}", outcome.report.reading.quantum_code);
            println!("Report:       {}", outcome.path.display());
            println!("SHA-256:      {}", outcome.hash);
        }

        Commands::Phase { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let phase = compute_lunar_phase(date);
            println!("{}: {:.1}° (day {} of 30)", date, phase.degrees(), phase.phase_day());
        }

        Commands::Unseal { code, file } => {
            let report = import_report_from_file(&file)
                .with_context(|| format!("reading report {}", file.display()))?;
            let code = code.unwrap_or_else(|| report.reading.quantum_code.clone());
            match unseal_request_with(&report, &code)
                .with_context(|| format!("unsealing with code {}", code))?
            {
                Some(request) => println!("{}", serde_json::to_string_pretty(&request)?),
                None => anyhow::bail!("report {} carries no sealed payload", file.display()),
            }
        }
    }

    Ok(())
}
