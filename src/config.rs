// ⚙️ Dashboard Configuration
// Fixed at compile time: the dashboard takes no flags, files or env vars.
// Only the log filter honours RUST_LOG (see bin/server.rs).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the dashboard listens on (mapped to external port 80 in deployment)
pub const DEFAULT_PORT: u16 = 8050;

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "cfo_dashboard=info,tower_http=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl DashboardConfig {
    /// Loopback config on an OS-assigned port (tests, local tooling)
    pub fn ephemeral() -> Self {
        DashboardConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
