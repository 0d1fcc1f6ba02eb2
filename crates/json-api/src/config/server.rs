//! Listener Config

use clap::Args;

/// Where the storefront API listens.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, bracketing IPv6 literals.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> ServerRuntimeConfig {
        ServerRuntimeConfig {
            host: host.to_string(),
            port: 8000,
        }
    }

    #[test]
    fn ipv4_hosts_are_joined_directly() {
        assert_eq!(config("127.0.0.1").socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn ipv6_hosts_are_bracketed() {
        assert_eq!(config("::1").socket_addr(), "[::1]:8000");
        assert_eq!(config("[::]").socket_addr(), "[::]:8000");
    }
}
