use clap::Parser;

/// Count the number of complaints per borough and complaint type from a
/// given dataset within a specified date range.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "borough_complaints",
    about = "Count complaints per borough and complaint type within a date range",
    after_help = "Example: borough_complaints -i data.csv -s 2024-01-01 -e 2024-01-31 -o results.csv",
    version
)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(short = 'i', long = "input_file")]
    pub input_file: String,

    /// Start date, inclusive (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
    #[arg(short = 's', long = "start_date")]
    pub start_date: String,

    /// End date, inclusive (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
    #[arg(short = 'e', long = "end_date")]
    pub end_date: String,

    /// Path to the output CSV file; printed to stdout when omitted
    #[arg(short = 'o', long = "output_file")]
    pub output_file: Option<String>,
}
