use super::field::{Field, FieldKind, FileField, FileKind};
use super::form::FormValues;
use super::{loose, Resource};
use serde::Deserialize;

const TITLE_ONLY: &[Field] = &[Field::required("title", "Title", FieldKind::Text)];

/// Photo or video shown in the public gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub file: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for GalleryItem {
    const PATH: &'static str = "/gallery";
    const TITLE: &'static str = "Gallery";
    const SINGULAR: &'static str = "Gallery Item";
    const FIELDS: &'static [Field] = TITLE_ONLY;
    const FILE: Option<FileField> = Some(FileField::file(FileKind::Media));

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([("title", self.title.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub file: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Award {
    const PATH: &'static str = "/awards";
    const TITLE: &'static str = "Awards";
    const SINGULAR: &'static str = "Award";
    const FIELDS: &'static [Field] = TITLE_ONLY;
    const FILE: Option<FileField> = Some(FileField::file(FileKind::Image));

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([("title", self.title.as_str())])
    }
}

/// Right-to-information disclosure (mahiti adhikar)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtiDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub file: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for RtiDocument {
    const PATH: &'static str = "/mahiti";
    const TITLE: &'static str = "Mahiti Adhikar";
    const SINGULAR: &'static str = "Document";
    const FIELDS: &'static [Field] = TITLE_ONLY;
    const FILE: Option<FileField> = Some(FileField::file(FileKind::Pdf));

    fn id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn file_url(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn values(&self) -> FormValues {
        FormValues::from_pairs([("title", self.title.as_str())])
    }
}

/// Self declaration (swayam ghoshna)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfDeclaration {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub pdf: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for SelfDeclaration {
    const PATH: &'static str = "/swayamGhoshna";
    const TITLE: &'static str = "Swayam Ghoshna";
    const SINGULAR: &'static str = "Declaration";
    const FIELDS: &'static [Field] = TITLE_ONLY;
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
        FormValues::from_pairs([("title", self.title.as_str())])
    }
}

/// Yearly expenditure report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub title: String,
    /// Financial year label such as `2023-24`
    #[serde(default, deserialize_with = "loose::string")]
    pub year: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub deposit_amount: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub expenditure_amount: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub balance_amount: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub pdf: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Report {
    const PATH: &'static str = "/expenditure";
    const TITLE: &'static str = "Expenditure Reports";
    const SINGULAR: &'static str = "Report";
    const FIELDS: &'static [Field] = &[
        Field::required("title", "Title", FieldKind::Text),
        Field::required("year", "Year", FieldKind::Text),
        Field::required("depositAmount", "Deposit Amount", FieldKind::Number),
        Field::required("expenditureAmount", "Expenditure Amount", FieldKind::Number),
        Field::required("balanceAmount", "Balance Amount", FieldKind::Number),
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
            ("year", self.year.as_str()),
            ("depositAmount", self.deposit_amount.as_str()),
            ("expenditureAmount", self.expenditure_amount.as_str()),
            ("balanceAmount", self.balance_amount.as_str()),
        ])
    }
}
