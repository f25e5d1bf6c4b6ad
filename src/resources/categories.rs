use serde::Serialize;
use serde_json::Value;

use super::{flag, id_param, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

pub const CATEGORY_TYPES: &[&str] = &["asset", "accessory", "consumable", "component", "license"];

const CATEGORY_ID: Option<Field> = id_param("category_id");

const CATEGORY_FIELDS: &[Field] = &[
    Field::required("name", FieldKind::Str),
    Field::required("category_type", FieldKind::Enum(CATEGORY_TYPES)),
    flag("use_default_eula"),
    flag("require_acceptance"),
    flag("checkin_email"),
];

pub const CREATE: Operation = Operation {
    name: "create_category",
    method: HttpMethod::Post,
    resource: Resource::Categories,
    path: "",
    path_param: None,
    fields: CATEGORY_FIELDS,
};

/// Categories accept any column name for `sort`
pub const LIST: Operation = Operation {
    name: "get_categories",
    method: HttpMethod::Get,
    resource: Resource::Categories,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, text("sort"), ORDER],
};

pub const GET: Operation = Operation {
    name: "get_category_by_id",
    method: HttpMethod::Get,
    resource: Resource::Categories,
    path: "{}",
    path_param: CATEGORY_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_category",
    method: HttpMethod::Patch,
    resource: Resource::Categories,
    path: "{}",
    path_param: CATEGORY_ID,
    fields: CATEGORY_FIELDS,
};

pub const DELETE: Operation = Operation {
    name: "delete_category",
    method: HttpMethod::Delete,
    resource: Resource::Categories,
    path: "{}",
    path_param: CATEGORY_ID,
    fields: &[],
};

/// A category; also used for updates, where name and type are required too.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    /// One of [`CATEGORY_TYPES`]
    pub category_type: String,
    pub use_default_eula: Option<bool>,
    pub require_acceptance: Option<bool>,
    pub checkin_email: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_category(&self, category: &NewCategory) -> Result<Value> {
        self.call(&CREATE, None, category)
    }

    pub fn get_categories(&self, query: &CategoryQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_category_by_id(&self, category_id: u64) -> Result<Value> {
        self.call(&GET, Some(category_id.into()), &())
    }

    pub fn get_category_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = CategoryQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_category(&self, category_id: u64, category: &NewCategory) -> Result<Value> {
        self.call(&UPDATE, Some(category_id.into()), category)
    }

    pub fn delete_category(&self, category_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(category_id.into()), &())
    }
}
