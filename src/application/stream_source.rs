// Port for the upstream camera stream
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use thiserror::Error;

/// Failure classes on the stream path, mapped to distinct HTTP statuses by
/// the relay handler.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("stream transport failure: {0}")]
    Transport(String),
    #[error("camera upstream returned status {status}")]
    Upstream { status: u16 },
}

/// An open upstream image stream: unbounded in duration, consumed
/// chunk-by-chunk, never buffered whole.
pub struct ImageStream {
    pub content_type: Option<String>,
    pub body: BoxStream<'static, Result<Bytes, std::io::Error>>,
}

#[async_trait]
pub trait ImageStreamSource: Send + Sync {
    /// Establish one upstream connection for one client. Each client gets
    /// its own independent connection, torn down when the client drops.
    async fn open(&self) -> Result<ImageStream, RelayError>;
}
