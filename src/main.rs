use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use tab2geojson::observe::StdErrObserver;
use tab2geojson::pipeline::ConvertRequest;

/// Convert tabular data (CSV/TSV/Excel) into a GeoJSON FeatureCollection of
/// point features.
#[derive(Debug, Parser)]
#[command(name = "tab2geojson", version)]
struct Cli {
    /// Input file: .csv / .tsv / .tab / .xlsx / .xls (anything else is read as CSV)
    input: PathBuf,

    /// Output GeoJSON file path (overwritten if present)
    output: PathBuf,

    /// Longitude column name (default: detect from longitude/lon/lng/x)
    #[arg(long, value_name = "NAME")]
    lon: Option<String>,

    /// Latitude column name (default: detect from latitude/lat/y)
    #[arg(long, value_name = "NAME")]
    lat: Option<String>,

    /// Number of rows to convert: positive takes the first N, negative the
    /// last |N|, 0 writes an empty collection (default: all)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    nrows: Option<i64>,

    /// Report stage progress and skipped-row counts on stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut request = ConvertRequest::new(cli.input, cli.output);
    request.lon = cli.lon;
    request.lat = cli.lat;
    request.nrows = cli.nrows;
    if cli.verbose {
        request.observer = Some(Arc::new(StdErrObserver));
    }

    match request.run() {
        Ok(stats) => {
            println!(
                "Wrote {} features to: {}",
                stats.features_written,
                request.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
