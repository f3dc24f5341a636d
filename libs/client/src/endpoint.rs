use reqwest::{
    multipart::{Form, Part},
    Method,
};
use serde_json::Value;

use crate::{response::IntoResponse, ClientError};

mod timeline_detail;
mod user;

pub use timeline_detail::TimelineDetailEndPoint;
pub use user::UserEndPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderType {
    /// `Authorization: Bearer <token>`
    Authorization,
    /// Multipart upload, sent without a bearer token.
    Multipart,
}

pub trait EndPoint {
    fn path(&self) -> String;

    fn method(&self) -> Method;

    fn header(&self) -> HeaderType {
        HeaderType::Authorization
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![]
    }

    fn body(&self) -> Option<Value> {
        None
    }

    fn multipart(&self) -> Option<MultipartData> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilePart {
    pub name: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Text fields and files of a multipart body. Kept as plain data so an
/// endpoint can be sent more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartData {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartData {
    pub fn field(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, file: FilePart) -> Self {
        self.files.push(file);
        self
    }

    pub fn into_form(self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)
                .into_response("invalid mime type")?;
            form = form.part(file.name, part);
        }
        Ok(form)
    }
}
