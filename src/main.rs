// Entry point and high-level CLI flow.
//
// The pipeline is strictly linear:
// - date arguments are validated before the input file is touched,
// - schema validation runs immediately after load,
// - the output file is opened only once aggregation has succeeded,
// so a failing run never leaves partial output behind.
mod aggregate;
mod cli;
mod error;
mod loader;
mod output;
mod types;
mod util;

use clap::Parser;
use error::AppError;
use types::DateRange;

fn run(args: &cli::Args) -> Result<(), AppError> {
    let range = DateRange::from_args(&args.start_date, &args.end_date)?;

    let input_path = util::resolve_path(&args.input_file);
    let table = loader::load(&input_path, &args.input_file)?;
    let cols = loader::validate_schema(&table)?;
    let records = loader::clean(&table, cols);

    let counts = aggregate::count_complaints(&records, &range);

    match &args.output_file {
        Some(out) => {
            let out_path = util::resolve_path(out);
            output::write_csv(&out_path, &counts)?;
            let in_range: u64 = counts.iter().map(|r| r.count).sum();
            println!(
                "Processed {} rows ({} within {} to {}).\n",
                util::format_int(table.row_count()),
                util::format_int(in_range),
                args.start_date,
                args.end_date
            );
            output::preview_table_rows(&counts, 5);
            println!("(Full table exported to {})", out);
        }
        // Stdout carries nothing but the CSV body.
        None => output::write_stdout(&counts)?,
    }
    Ok(())
}

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
