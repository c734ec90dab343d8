use super::field::{Field, FieldKind, FileField};
use super::form::{FormValues, ValidationError};
use super::{loose, Resource};
use serde::Deserialize;

/// Role choices offered for council members; anything else is a custom role
pub const MEMBER_ROLES: &[&str] = &["Sarpanch", "Upasarpanch", "Member"];

/// Roles only one member may hold at a time
const UNIQUE_ROLES: &[&str] = &["Sarpanch", "Upasarpanch"];

/// Administrative officer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub post: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub contact: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Officer {
    const PATH: &'static str = "/officers";
    const TITLE: &'static str = "Administrative Officers";
    const SINGULAR: &'static str = "Officer";
    const FIELDS: &'static [Field] = &[
        Field::required("name", "Name", FieldKind::Text),
        Field::required("post", "Post", FieldKind::Text),
        Field::optional("contact", "Contact", FieldKind::Text),
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
            ("name", self.name.as_str()),
            ("post", self.post.as_str()),
            ("contact", self.contact.as_str()),
        ])
    }
}

/// Elected gram panchayat body member
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub role: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub contact: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Member {
    const PATH: &'static str = "/members";
    const TITLE: &'static str = "Gram Panchayat Body";
    const SINGULAR: &'static str = "Member";
    const FIELDS: &'static [Field] = &[
        Field::required("name", "Name", FieldKind::Text),
        Field::required("role", "Role", FieldKind::Choice(MEMBER_ROLES)),
        Field::optional("contact", "Contact", FieldKind::Text),
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
            ("name", self.name.as_str()),
            ("role", self.role.as_str()),
            ("contact", self.contact.as_str()),
        ])
    }

    fn check(
        values: &FormValues,
        existing: &[Self],
        editing: Option<&str>,
    ) -> Result<(), ValidationError> {
        let role = values.trimmed("role");
        let taken = UNIQUE_ROLES.contains(&role)
            && existing
                .iter()
                .any(|member| member.role == role && Some(member.id.as_str()) != editing);
        if taken {
            return Err(ValidationError::DuplicateRole {
                role: role.to_string(),
            });
        }
        Ok(())
    }
}

/// Honored official (mananiy adhikari)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HonoredOfficial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub post: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for HonoredOfficial {
    const PATH: &'static str = "/mananiy-adhikari";
    const TITLE: &'static str = "Mananiy Adhikari";
    const SINGULAR: &'static str = "Official";
    const FIELDS: &'static [Field] = &[
        Field::required("name", "Name", FieldKind::Text),
        Field::required("post", "Post", FieldKind::Text),
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
        FormValues::from_pairs([("name", self.name.as_str()), ("post", self.post.as_str())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GloriousPerson {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub description: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for GloriousPerson {
    const PATH: &'static str = "/gloriousPersons";
    const TITLE: &'static str = "Glorious Persons";
    const SINGULAR: &'static str = "Person";
    const FIELDS: &'static [Field] = &[
        Field::required("name", "Name", FieldKind::Text),
        Field::optional("description", "Description", FieldKind::LongText),
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
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
        ])
    }
}

/// Zilla parishad school staff
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolStaff {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub name: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub post: String,
    #[serde(default, deserialize_with = "loose::string")]
    pub contact: String,
    #[serde(default, deserialize_with = "loose::optional")]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for SchoolStaff {
    const PATH: &'static str = "/staff";
    const TITLE: &'static str = "School Staff";
    const SINGULAR: &'static str = "Staff Member";
    const FIELDS: &'static [Field] = &[
        Field::required("name", "Name", FieldKind::Text),
        Field::required("post", "Post", FieldKind::Text),
        Field::optional("contact", "Contact", FieldKind::Text),
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
            ("name", self.name.as_str()),
            ("post", self.post.as_str()),
            ("contact", self.contact.as_str()),
        ])
    }
}
