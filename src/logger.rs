use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber shared by every binary of the crate.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output with `verbose`. Stdout stays reserved for program output.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "contacts_bot=debug,warn"
    } else {
        "contacts_bot=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
