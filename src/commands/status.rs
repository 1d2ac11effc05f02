//! Status command implementation

use console::style;

use crate::cli::StatusArgs;
use crate::error::Result;
use crate::progress::Spinner;
use crate::record::{self, RecordFile};

/// Run status command
pub fn run(verbose: bool, args: StatusArgs) -> Result<()> {
    let has_record = RecordFile::load(&args.prefix).is_some();

    let spinner = Spinner::new("Checking upstream");
    let outdated = record::is_outdated(&args.prefix, verbose);
    spinner.finish();

    if args.json {
        let out = serde_json::json!({ "outdated": outdated, "record": has_record });
        println!("{}", serde_json::to_string(&out)?);
    } else if !has_record {
        println!(
            "{} no install record under {}; treating as current",
            style("Unknown:").bold(),
            args.prefix.display()
        );
    } else if outdated {
        println!(
            "{} upstream has new commits",
            style("Outdated:").yellow().bold()
        );
    } else {
        println!(
            "{} installed build matches its reference",
            style("Current:").green().bold()
        );
    }

    if args.exit_code && outdated {
        std::process::exit(1);
    }

    Ok(())
}
