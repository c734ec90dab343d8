//! Static form descriptions shared by the manager screen and validation

/// How a text field is edited and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    /// `YYYY-MM-DD` from a date picker
    Date,
    /// Must parse as a number when filled in
    Number,
    Url,
    /// Fixed choices plus a free-text "Custom" entry
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// What kind of file a record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    /// Image or video
    Media,
    Pdf,
}

impl FileKind {
    /// Value for the `accept` attribute of the file input
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Media => "image/*,video/*",
            Self::Pdf => "application/pdf",
        }
    }
}

/// The multipart part name a record's file travels under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FileKind,
}

impl FileField {
    pub const fn image() -> Self {
        Self {
            name: "image",
            label: "Image",
            kind: FileKind::Image,
        }
    }

    pub const fn pdf() -> Self {
        Self {
            name: "pdf",
            label: "PDF",
            kind: FileKind::Pdf,
        }
    }

    pub const fn file(kind: FileKind) -> Self {
        Self {
            name: "file",
            label: "File",
            kind,
        }
    }
}

/// Whether a stored file URL points at a video
pub fn is_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
    [".mp4", ".webm", ".mov", ".ogg"]
        .iter()
        .any(|extension| path.ends_with(extension))
}

/// Stored links are often missing their scheme
pub fn external_href(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{}", link.trim_start_matches('/'))
    }
}
