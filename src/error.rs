// ⚠️ Dashboard Errors
// Startup failures are fatal and surface to the operator; nothing retries.

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias using `DashboardError`.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The listening socket could not be bound (usually: port already in use).
    #[error("failed to bind dashboard server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("dashboard server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),

    /// A caller-supplied sample lies outside the ledger bounds.
    #[error("{field} sample {value} at row {row} is outside [{min}, {max}]")]
    SampleOutOfRange {
        field: &'static str,
        row: usize,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl DashboardError {
    /// True when a bind failed because another socket holds the address.
    pub fn is_addr_in_use(&self) -> bool {
        matches!(
            self,
            DashboardError::Bind { source, .. } if source.kind() == std::io::ErrorKind::AddrInUse
        )
    }
}
