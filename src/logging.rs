use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: 0 = warn, 1 = info, 2 = debug,
/// 3+ = trace, scoped to this crate.
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "jdepgraph=warn",
            1 => "jdepgraph=info",
            2 => "jdepgraph=debug",
            _ => "jdepgraph=trace",
        })
    })
}

/// Install the stderr subscriber used by the command-line tools.
/// Stdout is left for output.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
