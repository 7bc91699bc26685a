//! Diagnostic logging for the driver.
//!
//! Off unless `LOX_LOG` is set. Its value is an `EnvFilter` directive
//! string (`LOX_LOG=debug`, `LOX_LOG=lox_lexer=trace`). With
//! `LOX_LOG_TREE=1` spans render as an indented tree instead of flat
//! lines. Everything goes to stderr so token output on stdout stays clean.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("LOX_LOG") else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var("LOX_LOG_TREE").is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
