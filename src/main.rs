use geojson_diff::geojson::open_features;
use geojson_diff::output::Output;
use geojson_diff::{compare_collections, CompareOptions, NumberPolicy, Tolerance};
use log::{info, LevelFilter};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "geojson_diff")]
/// Compares the features of two GeoJSON files position by position
///
/// A file fails to load if any feature has a null geometry or a
/// GeometryCollection. Altitudes are ignored.
struct Opt {
    /// Decimal places coordinates are rounded to before comparison
    #[structopt(long, default_value = "7")]
    places: u32,

    /// Fractional remainder at which a value is rounded up
    #[structopt(long, default_value = "0.5")]
    round_on: f64,

    /// Largest absolute difference tolerated after rounding
    #[structopt(long, default_value = "0.000001")]
    epsilon: f64,

    /// Compare numeric properties with the coordinate tolerance
    #[structopt(long)]
    tolerant_numbers: bool,

    /// Report only the first difference per feature
    #[structopt(long)]
    fail_fast: bool,

    /// Print diagnostics as JSON lines
    #[structopt(short, long)]
    json: bool,

    /// Log verbosity, repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    #[structopt(parse(from_os_str))]
    left: PathBuf,

    #[structopt(parse(from_os_str))]
    right: PathBuf,
}

impl Opt {
    fn compare_options(&self) -> CompareOptions {
        let tolerance = Tolerance {
            places: self.places,
            round_on: self.round_on,
            epsilon: self.epsilon,
        };
        let numbers = if self.tolerant_numbers {
            NumberPolicy::Tolerant
        } else {
            NumberPolicy::Exact
        };
        CompareOptions {
            tolerance,
            numbers,
            fail_fast: self.fail_fast,
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    env_logger::Builder::new()
        .filter_level(log_level(opt.verbose))
        .format_timestamp(None)
        .init();

    let left = open_features(&opt.left)?;
    let right = open_features(&opt.right)?;
    let report = compare_collections(&left, &right, &opt.compare_options());

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if opt.json {
        report.write_json_lines(&mut writer)?;
    } else {
        report.write_text(&mut writer)?;
    }
    writer.flush()?;

    if report.is_match() {
        info!("{} features match", report.left_count);
        Ok(())
    } else {
        info!("{} of {} features differ", report.features.len(), report.left_count);
        process::exit(1);
    }
}
