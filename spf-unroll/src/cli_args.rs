use argh::FromArgs;
use std::net::SocketAddr;

fn default_server() -> SocketAddr {
    SocketAddr::from(([1, 1, 1, 1], 53))
}

#[derive(Debug, FromArgs)]
#[argh(description = "print every address a domain's SPF policy authorizes, recursively")]
pub struct CliArgs {
    #[argh(
        option,
        description = "DNS server to query, default: '1.1.1.1:53'",
        default = "default_server()"
    )]
    pub server: SocketAddr,

    #[argh(positional, description = "domains whose SPF policies to walk")]
    pub domains: Vec<String>,
}
