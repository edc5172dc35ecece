use argh::FromArgs;
use contacts_bot::{logger, tree};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs)]
/// Print the structure of a directory, directories in blue and files in green.
struct Args {
    #[argh(positional)]
    /// directory to list.
    path: PathBuf,

    #[argh(switch)]
    /// disable colors.
    no_color: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logger::init_cli_logger(false);

    match tree::walk(&args.path) {
        Ok(entries) => {
            let root = tree::root_name(&args.path);
            print!("{}", tree::render(&root, &entries, !args.no_color));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
