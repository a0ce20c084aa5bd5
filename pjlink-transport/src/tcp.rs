//! TCP transport

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use pjlink_core::constants::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, LINE_TERMINATOR, MAX_LINE_LEN,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{error::*, Transport};

/// TCP transport for PJLink projectors
pub struct TcpTransport {
    addr: String,
    port: u16,
    socket_addr: Option<SocketAddr>,
    stream: Option<BufReader<TcpStream>>,
    connect_timeout: Duration,
    read_timeout: Option<Duration>,
}

impl TcpTransport {
    /// Create new TCP transport
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            socket_addr: None,
            stream: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set read timeout per line (`None` waits indefinitely)
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Resolve address to SocketAddr
    async fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.socket_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&addr_str)
            .await
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr_str, e)))?
            .collect();

        let addr = addrs
            .first()
            .ok_or_else(|| Error::InvalidAddress(format!("No addresses found for {}", addr_str)))?;

        self.socket_addr = Some(*addr);
        Ok(*addr)
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyConnected);
        }

        let addr = self.resolve_addr().await?;

        debug!("Connecting to {}...", addr);

        let stream = timeout(self.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::ConnectionTimeout {
                addr: addr.to_string(),
                millis: self.connect_timeout.as_millis() as u64,
            })?
            .map_err(|source| Error::Connect {
                addr: addr.to_string(),
                source,
            })?;

        // Commands are tiny, send them right away
        stream.set_nodelay(true)?;

        debug!("Connected to {}", addr);

        self.stream = Some(BufReader::new(stream));
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            debug!("Disconnecting from {}...", self.remote_addr());

            // Peer may already be gone
            let _ = stream.get_mut().shutdown().await;
        }

        self.socket_addr = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?.get_mut();

        trace!("Sending {} bytes: {:?}", data.len(), String::from_utf8_lossy(data));

        stream.write_all(data).await?;
        stream.flush().await?;

        Ok(())
    }

    async fn receive_line(&mut self) -> Result<String> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        let mut buf = Vec::with_capacity(64);

        let n = match self.read_timeout {
            Some(limit) => timeout(limit, read_line(stream, &mut buf))
                .await
                .map_err(|_| Error::ReadTimeout {
                    millis: limit.as_millis() as u64,
                })??,
            None => read_line(stream, &mut buf).await?,
        };

        if buf.last() == Some(&LINE_TERMINATOR) {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf).into_owned();

        trace!("Received {} bytes: {:?}", n, line);

        Ok(line)
    }

    fn remote_addr(&self) -> String {
        self.socket_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

/// Read up to and including the next terminator, at most `MAX_LINE_LEN` bytes
async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let limit = MAX_LINE_LEN as u64 + 1;
    let n = reader.take(limit).read_until(LINE_TERMINATOR, buf).await?;

    if n as u64 == limit && buf.last() != Some(&LINE_TERMINATOR) {
        return Err(Error::LineTooLong { max: MAX_LINE_LEN });
    }

    Ok(n)
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("TCP transport dropped while still connected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_transport_create() {
        let transport = TcpTransport::new("192.168.1.201", 4352);
        assert!(!transport.is_connected());
        assert_eq!(transport.remote_addr(), "192.168.1.201:4352");
    }

    #[tokio::test]
    async fn test_tcp_transport_invalid_address() {
        let mut transport = TcpTransport::new("invalid..address", 4352)
            .with_connect_timeout(Duration::from_millis(100));

        let result = transport.connect().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().is_connection());
    }

    #[tokio::test]
    async fn test_tcp_transport_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut transport = TcpTransport::new("127.0.0.1", port);
        let err = transport.connect().await.unwrap_err();

        match err {
            Error::Connect { addr, .. } => assert_eq!(addr, format!("127.0.0.1:{port}")),
            other => panic!("Expected Connect error, got {other:?}"),
        }
        assert!(!transport.is_connected());
    }

    #[tokio::test]
    async fn test_tcp_transport_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            socket.write_all(b"PJLINK 0\r%1POWR=OK\r").await.unwrap();

            let mut buf = [0u8; 9];
            socket.read_exact(&mut buf).await.unwrap();
            buf
        });

        let mut transport = TcpTransport::new("127.0.0.1", port);
        transport.connect().await.unwrap();
        assert!(transport.is_connected());
        assert!(matches!(transport.connect().await, Err(Error::AlreadyConnected)));

        assert_eq!(transport.receive_line().await.unwrap(), "PJLINK 0");
        transport.send(b"%1POWR 1\r").await.unwrap();
        assert_eq!(transport.receive_line().await.unwrap(), "%1POWR=OK");

        assert_eq!(&server.await.unwrap(), b"%1POWR 1\r");

        // Peer closed: end of stream reads as an empty line
        assert_eq!(transport.receive_line().await.unwrap(), "");

        transport.disconnect().await.unwrap();
        assert!(!transport.is_connected());
    }

    #[tokio::test]
    async fn test_tcp_transport_read_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
            drop(socket);
        });

        let mut transport = TcpTransport::new("127.0.0.1", port)
            .with_read_timeout(Some(Duration::from_millis(100)));
        transport.connect().await.unwrap();

        let err = transport.receive_line().await.unwrap_err();
        assert!(matches!(err, Error::ReadTimeout { millis: 100 }));
        assert!(err.is_connection());

        transport.disconnect().await.unwrap();
        server.abort();
    }

    #[tokio::test]
    async fn test_tcp_transport_unterminated_flood() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let chunk = vec![b'x'; 16 * 1024];
            loop {
                if socket.write_all(&chunk).await.is_err() {
                    return;
                }
            }
        });

        let mut transport = TcpTransport::new("127.0.0.1", port).with_read_timeout(None);
        transport.connect().await.unwrap();

        let err = transport.receive_line().await.unwrap_err();
        assert!(matches!(err, Error::LineTooLong { max: MAX_LINE_LEN }));

        transport.disconnect().await.unwrap();
        server.abort();
    }

    #[tokio::test]
    async fn test_tcp_transport_line_at_limit() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut line = vec![b'x'; MAX_LINE_LEN];
            line.push(b'\r');
            socket.write_all(&line).await.unwrap();
            socket
        });

        let mut transport = TcpTransport::new("127.0.0.1", port);
        transport.connect().await.unwrap();

        assert_eq!(transport.receive_line().await.unwrap().len(), MAX_LINE_LEN);

        transport.disconnect().await.unwrap();
        drop(server.await.unwrap());
    }

    #[tokio::test]
    async fn test_tcp_transport_not_connected() {
        let mut transport = TcpTransport::new("127.0.0.1", 4352);
        assert!(matches!(transport.send(b"x").await, Err(Error::NotConnected)));
        assert!(matches!(transport.receive_line().await, Err(Error::NotConnected)));
    }
}
