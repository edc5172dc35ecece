use anyhow::Context;
use argh::FromArgs;
use contacts_bot::{logger, records};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Parse a cats file (one "id,name,age" record per line) and print the valid
/// records as JSON. Corrupted lines are reported on stderr and skipped.
struct Args {
    #[argh(positional)]
    /// path to the cats file.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    logger::init_cli_logger(false);

    let cats = records::get_cats_info(&args.path)?;
    let json = serde_json::to_string_pretty(&cats).context("serializing cat records")?;
    println!("{json}");
    Ok(())
}
