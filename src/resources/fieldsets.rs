use serde_json::Value;

use super::{id_param, Named, NAME_ONLY};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource},
    session::{HttpMethod, Transport},
};

const FIELDSET_ID: Option<Field> = id_param("fieldset_id");

pub const CREATE: Operation = Operation {
    name: "create_fieldset",
    method: HttpMethod::Post,
    resource: Resource::Fieldsets,
    path: "",
    path_param: None,
    fields: NAME_ONLY,
};

pub const LIST: Operation = Operation {
    name: "get_fieldsets",
    method: HttpMethod::Get,
    resource: Resource::Fieldsets,
    path: "",
    path_param: None,
    fields: &[],
};

pub const GET: Operation = Operation {
    name: "get_fieldset_by_id",
    method: HttpMethod::Get,
    resource: Resource::Fieldsets,
    path: "{}",
    path_param: FIELDSET_ID,
    fields: &[],
};

/// Fieldsets are replaced with PUT rather than patched
pub const UPDATE: Operation = Operation {
    name: "update_fieldset",
    method: HttpMethod::Put,
    resource: Resource::Fieldsets,
    path: "{}",
    path_param: FIELDSET_ID,
    fields: NAME_ONLY,
};

pub const DELETE: Operation = Operation {
    name: "delete_fieldset",
    method: HttpMethod::Delete,
    resource: Resource::Fieldsets,
    path: "{}",
    path_param: FIELDSET_ID,
    fields: &[],
};

impl<T: Transport> SnipeClient<T> {
    pub fn create_fieldset(&self, name: &str) -> Result<Value> {
        self.call(&CREATE, None, &Named::new(name))
    }

    pub fn get_fieldsets(&self) -> Result<Value> {
        self.call(&LIST, None, &())
    }

    pub fn get_fieldset_by_id(&self, fieldset_id: u64) -> Result<Value> {
        self.call(&GET, Some(fieldset_id.into()), &())
    }

    pub fn get_fieldset_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.find_by_name(&LIST, &(), name)
    }

    pub fn update_fieldset(&self, fieldset_id: u64, name: &str) -> Result<Value> {
        self.call(&UPDATE, Some(fieldset_id.into()), &Named::new(name))
    }

    pub fn delete_fieldset(&self, fieldset_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(fieldset_id.into()), &())
    }
}
