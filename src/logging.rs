// logging.rs
use tracing::Level;

/// Install the fmt subscriber. Safe to call from multiple tests; only the
/// first call wins.
pub fn init() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .try_init()
        .ok();
}

pub fn init_with_level(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .ok();
}
