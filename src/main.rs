//! Binary entry point: load the two input files, run the query pipeline,
//! print the report to stdout.

use clap::Parser;
use tracing::error;

use twitterverse::cli::{self, Cli};
use twitterverse::observability::init_logging;

fn main() {
    init_logging();
    let args = Cli::parse();

    match cli::run(&args.data_file, &args.query_file) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            error!(%err, "query failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
