/// Shared pipeline constants, injected into the CLI parser at construction time.

/// Program version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum read depth for a position to count as mapped (`gen_graph -p`).
pub const MIN_DEPTH: i64 = 5;

/// Default number of additional bases kept on either side of the CDS.
pub const CDS_INTERVAL: u64 = 0;
