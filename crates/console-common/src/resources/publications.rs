use super::endpoints::PathStyle;
use super::field::{external_href, Field, FieldKind, FileField};
use super::form::FormValues;
use super::{loose, Resource};
use serde::Deserialize;

/// Date inputs want `YYYY-MM-DD`; the API may hand back a full timestamp
fn date_part(raw: &str) -> &str {
    raw.get(..10).filter(|_| raw.len() > 10).unwrap_or(raw)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub date: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Notice {
    const PATH: &'static str = "/notices";
    const TITLE: &'static str = "Notices";
    const SINGULAR: &'static str = "Notice";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::optional("subtitle", "Subtitle", FieldKind::LongText),
        Field::required("date", "Date", FieldKind::Date),
    ];
    const FILE: Option<FileField> = Some(FileField::image());

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("date", date_part(&self.date)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub date: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Event {
    const PATH: &'static str = "/events";
    const TITLE: &'static str = "Events";
    const SINGULAR: &'static str = "Event";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::required("subtitle", "Subtitle", FieldKind::LongText),
        Field::required("date", "Date", FieldKind::Date),
    ];
    const FILE: Option<FileField> = Some(FileField::image());

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("date", date_part(&self.date)),
        ])
    }
}

/// Home page banner slide. Served under `add`/`update`/`delete` sub-paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Banner {
    const PATH: &'static str = "/banner";
    const TITLE: &'static str = "Banners";
    const SINGULAR: &'static str = "Banner";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::required("subtitle", "Subtitle", FieldKind::Text),
    ];
    const FILE: Option<FileField> = Some(FileField::image());
    const STYLE: PathStyle = PathStyle::Verbose;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
        ])
    }
}

/// Government scheme with an optional external link and brochure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub link: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub pdf: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Program {
    const PATH: &'static str = "/govPrograms";
    const TITLE: &'static str = "Government Programs";
    const SINGULAR: &'static str = "Program";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::optional("subtitle", "Subtitle", FieldKind::LongText),
        Field::optional("link", "Link", FieldKind::Url),
    ];
    const FILE: Option<FileField> = Some(FileField::pdf());

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.pdf.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("link", self.link.as_str()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantLink {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub link: String,
    #[serde(default)]
    pub is_active: bool,
}

impl ImportantLink {
    pub fn href(&self) -> String {
        external_href(&self.link)
    }
}

impl Resource for ImportantLink {
    const PATH: &'static str = "/implinks";
    const TITLE: &'static str = "Important Links";
    const SINGULAR: &'static str = "Link";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::required("link", "Link", FieldKind::Url),
    ];
    const FILE: Option<FileField> = None;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        None
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([("title", self.title.as_str()), ("link", self.link.as_str())])
    }
}

/// Thought of the day. Always shown; there is no active flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suvichar {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub text: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub author: String,
}

impl Resource for Suvichar {
    const PATH: &'static str = "/suvichar";
    const TITLE: &'static str = "Suvichar";
    const SINGULAR: &'static str = "Suvichar";
    const FIELDS: &'static [Field] = &[
        Field::required("text", "Text", FieldKind::LongText),
        Field::optional("author", "Author", FieldKind::Text),
    ];
    const FILE: Option<FileField> = None;
    const TOGGLE: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        true
    }

    fn file_url(&self) -> Option<&str> {
        None
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([("text", self.text.as_str()), ("author", self.author.as_str())])
    }
}
