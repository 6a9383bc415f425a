use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

/// Targets of the library and the binary.
const CRATE_TARGETS: [&str; 2] = ["macro_planner_rs", "macro_planner"];

/// Build the log filter: crate targets at `warn` (or `debug` when verbose),
/// with `RUST_LOG` directives applied as well.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };

    CRATE_TARGETS
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, target| {
            let directive: Directive = format!("{}={}", target, level)
                .parse()
                .unwrap_or_else(|_| LevelFilter::WARN.into());
            filter.add_directive(directive)
        })
}

/// Install the stderr subscriber. Call once from `main`.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
