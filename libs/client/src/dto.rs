use serde::Deserialize;

use crate::{
    domain::{Place, PlaceList, Profile, TimelineDetailInfo},
    endpoint::{FilePart, MultipartData},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDetailResponseDTO {
    pub id: String,
    pub posting: String,
    pub title: String,
    pub day: i32,
    pub description: String,
    pub image: Option<String>,
    pub coord_x: Option<f64>,
    pub coord_y: Option<f64>,
    pub date: String,
    pub place: Option<String>,
    pub time: String,
    #[serde(default)]
    pub is_owner: bool,
}

impl TimelineDetailResponseDTO {
    pub fn to_domain(self) -> TimelineDetailInfo {
        TimelineDetailInfo {
            id: self.id,
            posting_id: self.posting,
            title: self.title,
            day: self.day,
            description: self.description,
            image_url: self.image.filter(|x| !x.is_empty()),
            coord_x: self.coord_x,
            coord_y: self.coord_y,
            date: self.date,
            place: self.place,
            time: self.time,
            is_owner: self.is_owner,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineDetailRequestDTO {
    pub posting: String,
    pub title: String,
    pub day: i32,
    pub description: String,
    pub image: Option<FilePart>,
    pub coord_x: Option<f64>,
    pub coord_y: Option<f64>,
    pub date: String,
    pub place: Option<String>,
    pub time: String,
}

impl From<TimelineDetailRequestDTO> for MultipartData {
    fn from(value: TimelineDetailRequestDTO) -> Self {
        let mut data = MultipartData::default()
            .field("posting", value.posting)
            .field("title", value.title)
            .field("day", value.day)
            .field("description", value.description)
            .field("date", value.date)
            .field("time", value.time);

        if let Some(place) = value.place {
            data = data.field("place", place);
        }
        if let (Some(x), Some(y)) = (value.coord_x, value.coord_y) {
            data = data.field("coordX", x).field("coordY", y);
        }
        if let Some(image) = value.image {
            data = data.file(image);
        }

        data
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponseDTO {
    pub title: String,
    pub address: String,
    pub map_x: f64,
    pub map_y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceListResponseDTO {
    pub places: Vec<PlaceResponseDTO>,
    #[serde(default)]
    pub is_last_page: bool,
}

impl PlaceListResponseDTO {
    pub fn to_domain(self) -> PlaceList {
        PlaceList {
            places: self
                .places
                .into_iter()
                .map(|x| Place {
                    title: x.title,
                    address: x.address,
                    x: x.map_x,
                    y: x.map_y,
                })
                .collect(),
            is_last_page: self.is_last_page,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserResponseDTO {
    pub name: String,
    pub avatar: Option<String>,
}

impl UserResponseDTO {
    pub fn to_domain(self) -> Profile {
        Profile {
            name: self.name,
            image_url: self.avatar,
        }
    }
}
