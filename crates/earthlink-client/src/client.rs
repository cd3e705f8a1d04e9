//! reqwest-backed implementation of the remote API port

use async_trait::async_trait;
use earthlink_common::ApiConfig;
use earthlink_core::{
    Coordinate, Credentials, Message, MessageCluster, MessageId, NewMessage, PostedMessage,
    ReactionEvent, RemoteApi, RemoteError, RemoteResult, SortOrder, UserId,
};
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::mappers::clusters_from_models;
use crate::models::{
    LoginResponse, MessageCountResponse, MessageModel, NewMessageModel, PostMessageResponse,
    ReactionModel, SignUpResponse, ValidateResponse,
};

/// EarthLink API client
///
/// Holds the bearer token obtained at login; every request made after
/// [`HttpRemote::set_token`] carries it.
#[derive(Debug)]
pub struct HttpRemote {
    http: Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl HttpRemote {
    /// Create a client for the API at `config.base_url`
    pub fn new(config: &ApiConfig) -> RemoteResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RemoteError::Transport(format!("invalid base url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Transport(format!(
                "invalid base url: {base_url}"
            )));
        }

        let mut builder =
            Client::builder().user_agent(concat!("earthlink/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(map_reqwest_error)?;

        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Build an endpoint URL; each segment is percent-encoded
    fn url<I, S>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> RemoteResult<Response> {
        let res = builder.send().await.map_err(map_reqwest_error)?;

        match res.status() {
            s if s.is_success() => Ok(res),
            StatusCode::UNAUTHORIZED => Err(RemoteError::Unauthorized),
            s => {
                let status = s.as_u16();
                let body = res.text().await.unwrap_or_default();
                Err(RemoteError::Http { status, body })
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> RemoteResult<T> {
        let res = self.send(builder).await?;
        let bytes = res.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteApi for HttpRemote {
    #[instrument(skip(self))]
    async fn messages_near(
        &self,
        at: Coordinate,
        limit: u32,
        sort: SortOrder,
    ) -> RemoteResult<Vec<MessageCluster>> {
        let url = self.url([
            "getMessagesByRadius".to_string(),
            at.latitude.to_string(),
            at.longitude.to_string(),
            limit.to_string(),
            sort.as_wire().to_string(),
        ]);
        let groups: Vec<Vec<MessageModel>> = self.send_json(self.request(Method::GET, url)).await?;
        let clusters =
            clusters_from_models(groups).map_err(|e| RemoteError::Decode(e.to_string()))?;

        debug!(clusters = clusters.len(), "Fetched nearby messages");
        Ok(clusters)
    }

    #[instrument(skip(self))]
    async fn messages_from_user(
        &self,
        user: &UserId,
        sort: SortOrder,
        search: Option<&str>,
    ) -> RemoteResult<Vec<Message>> {
        let sort = sort.as_wire().to_string();
        let url = self.url(["getMessagesFromUser", user.as_str(), sort.as_str()]);
        let mut builder = self.request(Method::GET, url);
        if let Some(term) = search.filter(|t| !t.trim().is_empty()) {
            builder = builder.query(&[("search_term", term)]);
        }

        let models: Vec<MessageModel> = self.send_json(builder).await?;
        models
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn message_count(&self, user: &UserId) -> RemoteResult<u64> {
        let url = self.url(["getNumberMessages", user.as_str()]);
        let res: MessageCountResponse = self.send_json(self.request(Method::GET, url)).await?;
        Ok(res.number_messages)
    }

    #[instrument(skip(self, message), fields(author = %message.author_id))]
    async fn post_message(&self, message: &NewMessage) -> RemoteResult<PostedMessage> {
        let url = self.url(["message"]);
        let body = NewMessageModel::from(message);
        let res: PostMessageResponse = self
            .send_json(self.request(Method::POST, url).json(&body))
            .await?;

        debug!(message_id = %res.message_id, "Message posted");
        Ok(PostedMessage {
            id: MessageId::new(res.message_id),
            status: res.message,
        })
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, id: &MessageId) -> RemoteResult<()> {
        let url = self.url(["deleteMessage", id.as_str()]);
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    #[instrument(skip(self, event), fields(message_id = %event.message_id, reaction = event.reaction.as_wire()))]
    async fn change_reaction(&self, event: &ReactionEvent) -> RemoteResult<()> {
        let url = self.url(["changeReactions"]);
        let body = ReactionModel::from(event);
        self.send(self.request(Method::POST, url).json(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> RemoteResult<String> {
        let url = self.url(["login"]);
        let res: LoginResponse = self
            .send_json(self.http.post(url).json(credentials))
            .await?;
        Ok(res.token)
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn signup(&self, credentials: &Credentials) -> RemoteResult<UserId> {
        let url = self.url(["signup"]);
        let res: SignUpResponse = self
            .send_json(self.http.post(url).json(credentials))
            .await?;
        Ok(UserId::new(res.user_id))
    }

    #[instrument(skip(self, token))]
    async fn validate_token(&self, token: &str) -> RemoteResult<UserId> {
        let url = self.url(["ping"]);
        let res: ValidateResponse = self
            .send_json(self.http.post(url).bearer_auth(token))
            .await?;
        Ok(UserId::new(res.user_id))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else if e.is_decode() {
        RemoteError::Decode(e.to_string())
    } else {
        RemoteError::Transport(e.to_string())
    }
}
