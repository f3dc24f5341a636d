//! Client side of the timeline API: endpoint descriptions, an HTTP network
//! layer, repositories over it and the use-cases the app screens call.

use reqwest::StatusCode;

pub mod cache;
pub mod domain;
pub mod dto;
pub mod endpoint;
pub mod network;
pub mod repository;
mod response;
pub mod use_case;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{message}: {source}")]
    ReqwestError {
        source: reqwest::Error,
        message: String,
    },
    #[error("{message}: {source}")]
    SerdeJsonError {
        source: serde_json::Error,
        message: String,
    },
    #[error("{message}: {source}")]
    StdIoError {
        source: std::io::Error,
        message: String,
    },
    #[error("status code: {status_code}, response: {message}")]
    FailedStatusCode {
        status_code: StatusCode,
        message: String,
    },
    #[error("{message}")]
    Option { message: String },
}
