use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use tokio::net::UdpSocket;
use tokio::time::timeout;

use query_types::QType;

use crate::LookupError;

// https://datatracker.ietf.org/doc/html/rfc6891
//
// Plain DNS answers over UDP were once capped at 512 bytes; EDNS-aware
// servers send more, and SPF TXT answers get fat.
const MAX_RESPONSE_SIZE: usize = 4096;

// Timeout policy belongs to the transport, not the engine.
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// The seam to the external resolver: one query in, one raw answer out.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn lookup(&self, name: &str, q_type: QType) -> Result<Bytes, LookupError>;
}

/// Queries a single DNS server over UDP, one ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
    next_id: AtomicU16,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            next_id: AtomicU16::new(1),
        }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn lookup(&self, name: &str, q_type: QType) -> Result<Bytes, LookupError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request_bytes =
            dns_wire::encode_query(name, q_type.code(), id).map_err(LookupError::Submit)?;

        let local_ip: IpAddr = match self.server_addr {
            SocketAddr::V4(_) => Ipv4Addr::UNSPECIFIED.into(),
            SocketAddr::V6(_) => Ipv6Addr::UNSPECIFIED.into(),
        };
        let sock = UdpSocket::bind((local_ip, 0)).await?;

        sock.send_to(&request_bytes, self.server_addr).await?;

        let mut resp_buf = BytesMut::with_capacity(MAX_RESPONSE_SIZE);
        let response_size = timeout(RECV_TIMEOUT, sock.recv_buf(&mut resp_buf))
            .await
            .map_err(|_| LookupError::Resolver(format!("{} query for {} timed out", q_type, name)))?
            .map_err(|e| LookupError::Resolver(e.to_string()))?;
        tracing::debug!("received udp response, length: {}", response_size);

        Ok(resp_buf.freeze())
    }
}
