use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineDetailInfo {
    pub id: String,
    pub posting_id: String,
    pub title: String,
    pub day: i32,
    pub description: String,
    pub image_url: Option<String>,
    pub coord_x: Option<f64>,
    pub coord_y: Option<f64>,
    pub date: String,
    pub place: Option<String>,
    pub time: String,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub title: String,
    pub address: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceList {
    pub places: Vec<Place>,
    pub is_last_page: bool,
}

/// The signed-in traveler. Persisted by the profile cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub image_url: Option<String>,
}
