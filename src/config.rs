use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub static CONFIG: once_cell::sync::Lazy<ServerConfig> = once_cell::sync::Lazy::new(ServerConfig::init);

pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// The listen address is fixed; only log filtering is read from the environment.
    pub fn init() -> ServerConfig {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_all_interfaces_port_8080() {
        assert_eq!(CONFIG.addr(), "0.0.0.0:8080".parse().unwrap());
    }
}
