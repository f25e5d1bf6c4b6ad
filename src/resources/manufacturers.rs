use serde_json::Value;

use super::{id_param, Named, Search, NAME_ONLY, SEARCH_ONLY};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource},
    session::{HttpMethod, Transport},
};

const MANUFACTURER_ID: Option<Field> = id_param("manufacturer_id");

pub const CREATE: Operation = Operation {
    name: "create_manufacturer",
    method: HttpMethod::Post,
    resource: Resource::Manufacturers,
    path: "",
    path_param: None,
    fields: NAME_ONLY,
};

pub const LIST: Operation = Operation {
    name: "get_manufacturers",
    method: HttpMethod::Get,
    resource: Resource::Manufacturers,
    path: "",
    path_param: None,
    fields: SEARCH_ONLY,
};

pub const GET: Operation = Operation {
    name: "get_manufacturer_by_id",
    method: HttpMethod::Get,
    resource: Resource::Manufacturers,
    path: "{}",
    path_param: MANUFACTURER_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_manufacturer",
    method: HttpMethod::Patch,
    resource: Resource::Manufacturers,
    path: "{}",
    path_param: MANUFACTURER_ID,
    fields: NAME_ONLY,
};

pub const DELETE: Operation = Operation {
    name: "delete_manufacturer",
    method: HttpMethod::Delete,
    resource: Resource::Manufacturers,
    path: "{}",
    path_param: MANUFACTURER_ID,
    fields: &[],
};

impl<T: Transport> SnipeClient<T> {
    pub fn create_manufacturer(&self, name: &str) -> Result<Value> {
        self.call(&CREATE, None, &Named::new(name))
    }

    pub fn get_manufacturers(&self, search: Option<&str>) -> Result<Value> {
        self.call(&LIST, None, &Search::new(search))
    }

    pub fn get_manufacturer_by_id(&self, manufacturer_id: u64) -> Result<Value> {
        self.call(&GET, Some(manufacturer_id.into()), &())
    }

    pub fn get_manufacturer_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.find_by_name(&LIST, &Search::new(Some(name)), name)
    }

    pub fn update_manufacturer(&self, manufacturer_id: u64, name: &str) -> Result<Value> {
        self.call(&UPDATE, Some(manufacturer_id.into()), &Named::new(name))
    }

    pub fn delete_manufacturer(&self, manufacturer_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(manufacturer_id.into()), &())
    }
}
