use argh::FromArgs;
use contacts_bot::{logger, records};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Sum the salaries of a "name,salary" file and print the total and the
/// integer average.
struct Args {
    #[argh(positional)]
    /// path to the salary file.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    logger::init_cli_logger(false);

    let summary = records::total_salary(&args.path)?;
    println!(
        "Total salary: {}, average salary: {}",
        summary.total, summary.average
    );
    Ok(())
}
