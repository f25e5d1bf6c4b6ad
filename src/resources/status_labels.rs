//! Status labels.
//!
//! A label has one of three types. Creation sends the type by name, while
//! the update endpoint expects it spread over three boolean flags.

use serde::Serialize;
use serde_json::Value;

use super::id_param;
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::{check, FieldKind},
};

pub const STATUS_TYPES: &[&str] = &["deployable", "pending", "archived"];

const STATUS_LABEL_ID: Option<Field> = id_param("status_label_id");

pub const CREATE: Operation = Operation {
    name: "create_status_label",
    method: HttpMethod::Post,
    resource: Resource::StatusLabels,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("type", FieldKind::Enum(STATUS_TYPES)),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_status_labels",
    method: HttpMethod::Get,
    resource: Resource::StatusLabels,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, SORT, ORDER],
};

pub const GET: Operation = Operation {
    name: "get_status_label_by_id",
    method: HttpMethod::Get,
    resource: Resource::StatusLabels,
    path: "{}",
    path_param: STATUS_LABEL_ID,
    fields: &[],
};

/// The server takes status label updates as POST
pub const UPDATE: Operation = Operation {
    name: "update_status_label",
    method: HttpMethod::Post,
    resource: Resource::StatusLabels,
    path: "{}",
    path_param: STATUS_LABEL_ID,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("deployable", FieldKind::Bool),
        Field::required("pending", FieldKind::Bool),
        Field::required("archived", FieldKind::Bool),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_status_label",
    method: HttpMethod::Delete,
    resource: Resource::StatusLabels,
    path: "{}",
    path_param: STATUS_LABEL_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusLabelQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Serialize)]
struct NewStatusLabel<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
}

#[derive(Serialize)]
struct StatusFlags<'a> {
    name: &'a str,
    deployable: bool,
    pending: bool,
    archived: bool,
}

impl<'a> StatusFlags<'a> {
    fn new(name: &'a str, type_name: &str) -> Self {
        Self {
            name,
            deployable: type_name == "deployable",
            pending: type_name == "pending",
            archived: type_name == "archived",
        }
    }
}

impl<T: Transport> SnipeClient<T> {
    /// `type_name` must be one of [`STATUS_TYPES`].
    pub fn create_status_label(&self, name: &str, type_name: &str) -> Result<Value> {
        self.call(&CREATE, None, &NewStatusLabel { name, type_name })
    }

    pub fn get_status_labels(&self, query: &StatusLabelQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_status_label_by_id(&self, status_label_id: u64) -> Result<Value> {
        self.call(&GET, Some(status_label_id.into()), &())
    }

    pub fn get_status_label_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = StatusLabelQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    /// Renames the label and sets its type. Exactly one of the
    /// `deployable`, `pending` and `archived` flags is sent as true.
    pub fn update_status_label(
        &self,
        status_label_id: u64,
        name: &str,
        type_name: &str,
    ) -> Result<Value> {
        check(
            "type_name",
            FieldKind::Enum(STATUS_TYPES),
            &Value::from(type_name),
        )?;
        self.call(
            &UPDATE,
            Some(status_label_id.into()),
            &StatusFlags::new(name, type_name),
        )
    }

    pub fn delete_status_label(&self, status_label_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(status_label_id.into()), &())
    }
}
