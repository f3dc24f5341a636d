mod timeline_detail;
mod user;

pub use timeline_detail::{TimelineDetailRepository, TimelineDetailRepositoryImpl};
pub use user::{UserRepository, UserRepositoryImpl};

#[cfg(test)]
pub(crate) mod fake {
    use std::{collections::HashMap, sync::Mutex};

    use reqwest::StatusCode;
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use crate::{
        endpoint::EndPoint, network::NetworkType, response::IntoResponse,
        ClientError,
    };

    /// Answers `"<METHOD> <path>"` with a canned JSON body and records every
    /// call.
    #[derive(Default)]
    pub struct FakeNetwork {
        responses: HashMap<String, Value>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeNetwork {
        pub fn with(mut self, key: &str, body: Value) -> Self {
            self.responses.insert(key.to_string(), body);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn answer<E: EndPoint>(&self, endpoint: &E) -> Result<Value, ClientError> {
            let key = format!("{} {}", endpoint.method(), endpoint.path());
            self.calls.lock().unwrap().push(key.clone());

            self.responses.get(&key).cloned().ok_or(
                ClientError::FailedStatusCode {
                    status_code: StatusCode::NOT_FOUND,
                    message: key,
                },
            )
        }
    }

    impl NetworkType for FakeNetwork {
        async fn request<E, T>(&self, endpoint: &E) -> Result<T, ClientError>
        where
            E: EndPoint + Sync,
            T: DeserializeOwned + Send,
        {
            let body = self.answer(endpoint)?;
            serde_json::from_value(body).into_response("failed to decode")
        }

        async fn send<E>(&self, endpoint: &E) -> Result<(), ClientError>
        where
            E: EndPoint + Sync,
        {
            self.answer(endpoint).map(|_| ())
        }
    }
}
