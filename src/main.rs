use argh::FromArgs;
use contacts_bot::{Bot, BotConfig, logger};
use std::io::IsTerminal;

#[derive(FromArgs)]
/// Assistant bot keeping a phone book in memory.
/// Commands: hello, add <name> <phone>, change <name> <phone>, phone <name>, all, close/exit.
struct Args {
    #[argh(option, default = "String::from(\"Enter a command: \")")]
    /// prompt shown before each command on a terminal.
    prompt: String,

    #[argh(switch, short = 'q')]
    /// do not print the welcome banner.
    quiet: bool,

    #[argh(switch, short = 'v')]
    /// log dispatch details to stderr.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    logger::init_cli_logger(args.verbose);

    let mut bot = Bot::new(BotConfig {
        prompt: args.prompt,
        banner: !args.quiet,
    });

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bot.repl()
    } else {
        bot.run(stdin.lock(), std::io::stdout().lock())
    }
}
