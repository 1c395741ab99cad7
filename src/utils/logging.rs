// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber at `level`.
///
/// Returns `false` if a global subscriber was already installed, which
/// makes repeated calls from tests harmless.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
