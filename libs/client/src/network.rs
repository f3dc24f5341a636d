use std::future::Future;

use reqwest::{header::ACCEPT, Client, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    endpoint::{EndPoint, HeaderType},
    response::IntoResponse,
    ClientError,
};

pub trait NetworkType: Send + Sync {
    /// Sends the endpoint and decodes the JSON body into `T`.
    fn request<E, T>(
        &self,
        endpoint: &E,
    ) -> impl Future<Output = Result<T, ClientError>> + Send
    where
        E: EndPoint + Sync,
        T: DeserializeOwned + Send;

    /// Sends the endpoint, ignoring the body of a successful response.
    fn send<E>(
        &self,
        endpoint: &E,
    ) -> impl Future<Output = Result<(), ClientError>> + Send
    where
        E: EndPoint + Sync;
}

#[derive(Debug, Clone)]
pub struct Network {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl Network {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    pub fn build_request<E: EndPoint>(
        &self,
        endpoint: &E,
    ) -> Result<Request, ClientError> {
        let mut request = self
            .client
            .request(
                endpoint.method(),
                format!("{}{}", self.base_url, endpoint.path()),
            )
            .header(ACCEPT, "application/json");

        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(&query);
        }

        if endpoint.header() == HeaderType::Authorization {
            let token = self
                .token
                .as_deref()
                .into_response("access token was not set")?;
            request = request.bearer_auth(token);
        }

        if let Some(data) = endpoint.multipart() {
            request = request.multipart(data.into_form()?);
        } else if let Some(body) = endpoint.body() {
            request = request.json(&body);
        }

        request.build().into_response("failed to build request")
    }

    async fn execute<E: EndPoint + Sync>(
        &self,
        endpoint: &E,
    ) -> Result<String, ClientError> {
        let request = self.build_request(endpoint)?;
        debug!(
            task = "send request",
            method = %request.method(),
            url = %request.url()
        );

        let response = self
            .client
            .execute(request)
            .await
            .into_response("failed to send")?;

        let status = response.status();
        let text = response.text().await.into_response("failed to get text")?;

        if !status.is_success() {
            return Err(ClientError::FailedStatusCode {
                status_code: status,
                message: text,
            });
        }

        Ok(text)
    }
}

impl NetworkType for Network {
    async fn request<E, T>(&self, endpoint: &E) -> Result<T, ClientError>
    where
        E: EndPoint + Sync,
        T: DeserializeOwned + Send,
    {
        let text = self.execute(endpoint).await?;

        serde_json::from_str::<T>(&text).into_response("failed to decode")
    }

    async fn send<E>(&self, endpoint: &E) -> Result<(), ClientError>
    where
        E: EndPoint + Sync,
    {
        self.execute(endpoint).await?;

        Ok(())
    }
}
