use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{MoveRequest, MoveResponse};
use thiserror::Error;
use url::Url;

/// Fixed path the game server accepts move submissions on.
pub const MOVE_ENDPOINT: &str = "/move";

#[derive(Debug, Error)]
pub enum MoveChannelError {
    #[error("invalid game server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach game server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("game server returned a malformed move response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Submission channel to the game server. Implementations answer with the
/// server's verdict; transport-level trouble (unreachable host, non-2xx
/// status, undecodable body) surfaces as an error instead.
#[async_trait]
pub trait MoveChannel: Send + Sync {
    async fn submit(&self, request: &MoveRequest) -> Result<MoveResponse, MoveChannelError>;
}

/// Production channel: JSON POST to the server's move endpoint.
#[derive(Debug)]
pub struct HttpMoveChannel {
    http: Client,
    move_url: Url,
}

impl HttpMoveChannel {
    pub fn new(server_url: &str) -> Result<Self, MoveChannelError> {
        let invalid = |source| MoveChannelError::InvalidServerUrl {
            url: server_url.to_string(),
            source,
        };
        let base = Url::parse(server_url).map_err(invalid)?;
        let move_url = base.join(MOVE_ENDPOINT).map_err(invalid)?;
        Ok(Self {
            http: Client::new(),
            move_url,
        })
    }
}

#[async_trait]
impl MoveChannel for HttpMoveChannel {
    async fn submit(&self, request: &MoveRequest) -> Result<MoveResponse, MoveChannelError> {
        let response = self
            .http
            .post(self.move_url.clone())
            .json(request)
            .send()
            .await
            .map_err(MoveChannelError::Transport)?
            .error_for_status()
            .map_err(MoveChannelError::Transport)?;

        response
            .json::<MoveResponse>()
            .await
            .map_err(MoveChannelError::MalformedResponse)
    }
}
