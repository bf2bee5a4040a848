// MJPEG camera upstream adapter
use crate::application::stream_source::{ImageStream, ImageStreamSource, RelayError};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::header;

#[derive(Debug, Clone)]
pub struct MjpegUpstream {
    client: reqwest::Client,
    url: String,
}

impl MjpegUpstream {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ImageStreamSource for MjpegUpstream {
    async fn open(&self) -> Result<ImageStream, RelayError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "multipart/x-mixed-replace")
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RelayError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // The body is open-ended; hand it over chunk-by-chunk.
        let body = response
            .bytes_stream()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
            .boxed();

        Ok(ImageStream { content_type, body })
    }
}
