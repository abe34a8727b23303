use std::net::SocketAddr;

/// Application configuration shared by the server and CLI binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the display API binds to.
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Upper bound on the single outbound page fetch.
    pub fetch_timeout_secs: u64,
    /// Browser-like `User-Agent` sent with the page fetch.
    pub user_agent: String,
}
