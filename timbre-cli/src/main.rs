use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use rust_decimal::Decimal;
use timbre_cli::{logging, rates, report, utils};
use timbre_core::{TransferTaxCalculator, TransferTaxSchedule};

/// Estimate the stamp tax owed on a property transfer.
///
/// The sale value is converted to UVT using the fiscal year's rate and taxed
/// under the three-band progressive schedule: values up to 20,000 UVT are
/// exempt, the slice up to 50,000 UVT is taxed at 1.5%, and everything above
/// that at 3% plus a fixed 450 UVT component.
#[derive(Parser, Debug)]
#[command(name = "timbre")]
#[command(version, about, long_about = None)]
struct Args {
    /// Sale value in COP (thousands separators and a $ prefix are allowed)
    value: String,

    /// Fiscal year used to resolve the UVT rate [default: current year]
    #[arg(short, long)]
    year: Option<i32>,

    /// Explicit COP-per-UVT rate; overrides --year and --rates-file
    #[arg(short, long)]
    uvt_rate: Option<Decimal>,

    /// CSV file with year,cop_per_uvt rows, consulted before the built-in table
    #[arg(short, long)]
    rates_file: Option<PathBuf>,

    /// Print the assessment as JSON instead of a text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let value = utils::parse_amount(&args.value)
        .with_context(|| format!("invalid sale value: {}", args.value))?;

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let (cop_per_uvt, source) = rates::resolve(year, args.uvt_rate, args.rates_file.as_deref())?;
    tracing::debug!(year, rate = %cop_per_uvt, source = source.as_str(), "resolved UVT rate");

    let calculator = TransferTaxCalculator::new(TransferTaxSchedule::with_cop_per_uvt(cop_per_uvt));
    let assessment = calculator
        .calculate(value)
        .context("stamp tax calculation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", report::render(&assessment));
    }

    Ok(())
}
