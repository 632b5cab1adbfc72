//! Tern CLI
//!
//! Script runner and REPL over [`tern_eval`]. The library half exists so the
//! binary and the integration tests share one code path.
//!
//! # Architecture
//!
//! - [`cli`]: hand-parsed command line
//! - [`commands`]: `run`, `repl`, `parse` and `lex`
//! - [`loader`]: the filesystem [`SourceLoader`](tern_eval::SourceLoader)
//!   behind `load(path)`
//! - [`report`]: ariadne rendering of parse and runtime errors

pub mod cli;
pub mod commands;
pub mod loader;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// `TERN_LOG_TREE` switches the flat `fmt` output to an indented call tree.
/// Call this once at startup. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("TERN_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
