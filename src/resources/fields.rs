//! Custom fields.

use serde::Serialize;
use serde_json::Value;

use super::{flag, id_param, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

/// Form elements a custom field can render as
pub const ELEMENTS: &[&str] = &["text", "listbox", "textarea"];

/// Built-in formats; `CUSTOM REGEX` goes with `custom_format`
pub const FORMATS: &[&str] = &[
    "ANY",
    "CUSTOM REGEX",
    "ALPHA",
    "ALPHA-DASH",
    "NUMERIC",
    "ALPHA-NUMERIC",
    "EMAIL",
    "DATE",
    "URL",
    "IP",
    "IPV4",
    "IPV6",
    "MAC",
    "BOOLEAN",
];

const FIELD_ID: Option<Field> = id_param("field_id");

const FIELD_OPTIONS: &[Field] = &[
    Field::required("name", FieldKind::Str),
    Field::required("element", FieldKind::Enum(ELEMENTS)),
    Field::optional("field_values", FieldKind::List(Some(&FieldKind::Str))),
    Field::optional("format", FieldKind::Enum(FORMATS)),
    text("custom_format"),
    text("help_text"),
    flag("show_in_email"),
    flag("field_encrypted"),
];

pub const CREATE: Operation = Operation {
    name: "create_field",
    method: HttpMethod::Post,
    resource: Resource::Fields,
    path: "",
    path_param: None,
    fields: FIELD_OPTIONS,
};

pub const LIST: Operation = Operation {
    name: "get_fields",
    method: HttpMethod::Get,
    resource: Resource::Fields,
    path: "",
    path_param: None,
    fields: &[],
};

pub const GET: Operation = Operation {
    name: "get_field_by_id",
    method: HttpMethod::Get,
    resource: Resource::Fields,
    path: "{}",
    path_param: FIELD_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_field",
    method: HttpMethod::Patch,
    resource: Resource::Fields,
    path: "{}",
    path_param: FIELD_ID,
    fields: FIELD_OPTIONS,
};

pub const DELETE: Operation = Operation {
    name: "delete_field",
    method: HttpMethod::Delete,
    resource: Resource::Fields,
    path: "{}",
    path_param: FIELD_ID,
    fields: &[],
};

/// A custom field definition, used for both create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewField {
    pub name: String,
    /// One of [`ELEMENTS`]
    pub element: String,
    /// Choices for a `listbox`
    pub field_values: Option<Vec<String>>,
    /// One of [`FORMATS`]
    pub format: Option<String>,
    pub custom_format: Option<String>,
    pub help_text: Option<String>,
    pub show_in_email: Option<bool>,
    pub field_encrypted: Option<bool>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_field(&self, field: &NewField) -> Result<Value> {
        self.call(&CREATE, None, field)
    }

    pub fn get_fields(&self) -> Result<Value> {
        self.call(&LIST, None, &())
    }

    pub fn get_field_by_id(&self, field_id: u64) -> Result<Value> {
        self.call(&GET, Some(field_id.into()), &())
    }

    /// The fields listing has no search filter, so this scans every row.
    pub fn get_field_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.find_by_name(&LIST, &(), name)
    }

    pub fn update_field(&self, field_id: u64, field: &NewField) -> Result<Value> {
        self.call(&UPDATE, Some(field_id.into()), field)
    }

    pub fn delete_field(&self, field_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(field_id.into()), &())
    }
}
