//! Tracing subscriber setup.
//!
//! Library crates only emit events. The driver installs a subscriber when
//! `PFX_LOG` (or, failing that, `RUST_LOG`) is set, using the usual
//! `EnvFilter` directive syntax:
//!
//! ```text
//! PFX_LOG=debug pfx eval "x 2 ^ sin" --at=0,0 --at=1,0
//! PFX_LOG=pfx_parse=trace pfx info "x 1 +"
//! ```
//!
//! Output goes to stderr as an indented span tree.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. Does nothing when neither variable
/// is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = std::env::var("PFX_LOG")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true);
        // Another subscriber may already be installed (e.g. by an embedding
        // test harness); keep it.
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(tree)
            .try_init();
    });
}
