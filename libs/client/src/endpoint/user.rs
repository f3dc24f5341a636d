use reqwest::Method;
use serde_json::{json, Value};

use super::EndPoint;

#[derive(Debug, Clone, PartialEq)]
pub enum UserEndPoint {
    RequestUserInfo,
    UpdateUserInfo {
        name: String,
        avatar: Option<String>,
    },
    CheckDuplicatedName(String),
}

impl EndPoint for UserEndPoint {
    fn path(&self) -> String {
        match self {
            Self::RequestUserInfo | Self::UpdateUserInfo { .. } => {
                "/users/me".to_string()
            }
            Self::CheckDuplicatedName(_) => "/users/duplicate".to_string(),
        }
    }

    fn method(&self) -> Method {
        match self {
            Self::UpdateUserInfo { .. } => Method::PATCH,
            _ => Method::GET,
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CheckDuplicatedName(name) => vec![("name", name.clone())],
            _ => vec![],
        }
    }

    fn body(&self) -> Option<Value> {
        match self {
            Self::UpdateUserInfo { name, avatar } => {
                Some(json!({ "name": name, "avatar": avatar }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_update_sends_json_body() {
        let endpoint = UserEndPoint::UpdateUserInfo {
            name: "바다사람".to_string(),
            avatar: None,
        };

        assert_eq!(endpoint.method(), Method::PATCH);
        assert_eq!(endpoint.path(), "/users/me");
        assert_eq!(
            endpoint.body(),
            Some(json!({ "name": "바다사람", "avatar": null }))
        );
    }

    #[test]
    fn test_duplicate_check_carries_name() {
        let endpoint = UserEndPoint::CheckDuplicatedName("산".to_string());

        assert_eq!(endpoint.path(), "/users/duplicate");
        assert_eq!(endpoint.query(), vec![("name", "산".to_string())]);
        assert_eq!(endpoint.body(), None);
    }
}
