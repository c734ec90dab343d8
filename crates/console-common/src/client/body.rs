//! Request payloads: JSON for text-only records, multipart when a file rides along

use super::ClientError;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;

/// A file picked in the browser, read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Text fields plus at most one named file part
    Multipart {
        fields: Vec<(String, String)>,
        file: Option<(String, Upload)>,
    },
}

impl RequestBody {
    /// Attach the payload to a request
    pub fn attach(self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        match self {
            Self::Empty => Ok(request),
            Self::Json(value) => Ok(request.json(&value)),
            Self::Multipart { fields, file } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                if let Some((name, upload)) = file {
                    let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
                    if let Some(mime) = upload.mime_type.filter(|mime| !mime.is_empty()) {
                        part = part.mime_str(&mime)?;
                    }
                    form = form.part(name, part);
                }
                Ok(request.multipart(form))
            }
        }
    }
}
