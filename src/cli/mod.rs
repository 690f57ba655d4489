use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::connector::api::server::DEFAULT_PORT;
use crate::connector::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "repohub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bind to 0.0.0.0 instead of --host, exposing the server on all network interfaces
    #[arg(long)]
    pub public: bool,

    /// Do not send CORS headers
    #[arg(long)]
    pub no_cors: bool,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        let host = if self.public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            self.host
        };
        SocketAddr::new(host, self.port)
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::builder()
            .addr(self.listen_addr())
            .cors(!self.no_cors)
            .build()
    }
}
