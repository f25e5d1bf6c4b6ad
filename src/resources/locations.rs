use serde::Serialize;
use serde_json::Value;

use super::{id_param, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const LOCATION_ID: Option<Field> = id_param("location_id");

pub const CREATE: Operation = Operation {
    name: "create_location",
    method: HttpMethod::Post,
    resource: Resource::Locations,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        text("address"),
        text("address2"),
        text("city"),
        text("state"),
        text("country"),
        text("zip"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_locations",
    method: HttpMethod::Get,
    resource: Resource::Locations,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, SORT, ORDER],
};

pub const GET: Operation = Operation {
    name: "get_location_by_id",
    method: HttpMethod::Get,
    resource: Resource::Locations,
    path: "{}",
    path_param: LOCATION_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_location",
    method: HttpMethod::Patch,
    resource: Resource::Locations,
    path: "{}",
    path_param: LOCATION_ID,
    fields: &[
        text("name"),
        text("address"),
        text("address2"),
        text("city"),
        text("state"),
        text("country"),
        text("zip"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_location",
    method: HttpMethod::Delete,
    resource: Resource::Locations,
    path: "{}",
    path_param: LOCATION_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewLocation {
    pub name: String,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_location(&self, location: &NewLocation) -> Result<Value> {
        self.call(&CREATE, None, location)
    }

    pub fn get_locations(&self, query: &LocationQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_location_by_id(&self, location_id: u64) -> Result<Value> {
        self.call(&GET, Some(location_id.into()), &())
    }

    pub fn get_location_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = LocationQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_location(&self, location_id: u64, changes: &LocationUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(location_id.into()), changes)
    }

    pub fn delete_location(&self, location_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(location_id.into()), &())
    }
}
