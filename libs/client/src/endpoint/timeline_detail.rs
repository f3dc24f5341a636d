use reqwest::Method;

use crate::dto::TimelineDetailRequestDTO;

use super::{EndPoint, HeaderType, MultipartData};

const PATH: &str = "/timelines";

#[derive(Debug, Clone, PartialEq)]
pub enum TimelineDetailEndPoint {
    SpecificTimeline(String),
    CreateTimeline(TimelineDetailRequestDTO),
    FetchPlaceList(String, i64),
    DeleteTimeline(String),
}

impl EndPoint for TimelineDetailEndPoint {
    fn path(&self) -> String {
        match self {
            Self::SpecificTimeline(id) | Self::DeleteTimeline(id) => {
                format!("{}/{}", PATH, id)
            }
            Self::FetchPlaceList(..) => format!("{}/map", PATH),
            Self::CreateTimeline(_) => PATH.to_string(),
        }
    }

    fn method(&self) -> Method {
        match self {
            Self::SpecificTimeline(_) | Self::FetchPlaceList(..) => Method::GET,
            Self::CreateTimeline(_) => Method::POST,
            Self::DeleteTimeline(_) => Method::DELETE,
        }
    }

    fn header(&self) -> HeaderType {
        match self {
            Self::CreateTimeline(_) => HeaderType::Multipart,
            _ => HeaderType::Authorization,
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::FetchPlaceList(place, offset) => {
                vec![("place", place.clone()), ("offset", offset.to_string())]
            }
            _ => vec![],
        }
    }

    fn multipart(&self) -> Option<MultipartData> {
        match self {
            Self::CreateTimeline(request) => Some(request.clone().into()),
            _ => None,
        }
    }
}
