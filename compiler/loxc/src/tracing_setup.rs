//! Log subscriber for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable that switches log output to an indented span tree.
pub const LOG_TREE_ENV: &str = "LOX_LOG_TREE";

/// Initialize the tracing subscriber.
///
/// Only installs a subscriber when `RUST_LOG` is set, so normal runs pay
/// nothing and keep stderr free for diagnostics. With `LOX_LOG_TREE` also
/// set, events are nested under their spans instead of printed flat. Safe to
/// call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = if std::env::var_os(LOG_TREE_ENV).is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
                .with_writer(std::io::stderr);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);
            (None, Some(flat))
        };

        tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .init();
    });
}
