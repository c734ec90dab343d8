//! Records managed through the console and the metadata that drives their forms.
//!
//! Each record type is decoded straight from the API's JSON (camelCase
//! fields, server id in `_id`) and describes its own collection path, form
//! fields and upload slot through [`Resource`].

mod documents;
mod endpoints;
mod field;
mod form;
mod inquiry;
pub mod loose;
mod people;
mod publications;
mod school;

pub use documents::{Award, GalleryItem, Report, RtiDocument, SelfDeclaration};
pub use endpoints::{Endpoints, PathStyle};
pub use field::{external_href, is_video, Field, FieldKind, FileField, FileKind};
pub use form::{body_for, validate, FormValues, ValidationError};
pub use inquiry::{Inquiry, InquiryStatus};
pub use people::{GloriousPerson, HonoredOfficial, Member, Officer, SchoolStaff, MEMBER_ROLES};
pub use publications::{Banner, Event, ImportantLink, Notice, Program, Suvichar};
pub use school::SchoolCount;

use serde::de::DeserializeOwned;

/// A server-owned record with a CRUD collection behind it
pub trait Resource: Clone + PartialEq + DeserializeOwned + 'static {
    /// Collection path relative to the API root
    const PATH: &'static str;
    /// Screen heading
    const TITLE: &'static str;
    /// Used in button labels and alerts
    const SINGULAR: &'static str;
    const FIELDS: &'static [Field];
    /// Upload slot; `None` means the record is sent as JSON
    const FILE: Option<FileField>;
    /// Whether the collection exposes `PUT {path}/toggle/{id}`
    const TOGGLE: bool = true;
    const STYLE: PathStyle = PathStyle::Conventional;

    fn id(&self) -> &str;

    fn is_active(&self) -> bool;

    fn file_url(&self) -> Option<&str>;

    /// Current values, used to prefill the edit form and the list columns
    fn values(&self) -> FormValues;

    /// Record-specific rule run after the field checks
    fn check(
        _values: &FormValues,
        _existing: &[Self],
        _editing: Option<&str>,
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    fn endpoints() -> Endpoints {
        Endpoints::new(Self::PATH, Self::STYLE)
    }
}
