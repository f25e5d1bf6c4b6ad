use serde::Serialize;
use serde_json::Value;

use super::{id_param, int, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, EXPAND, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const CONSUMABLE_ID: Option<Field> = id_param("consumable_id");

pub const CREATE: Operation = Operation {
    name: "create_consumable",
    method: HttpMethod::Post,
    resource: Resource::Consumables,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("qty", FieldKind::Int),
        Field::required("category_id", FieldKind::Int),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_consumables",
    method: HttpMethod::Get,
    resource: Resource::Consumables,
    path: "",
    path_param: None,
    fields: &[
        LIMIT,
        OFFSET,
        SEARCH,
        text("order_number"),
        SORT,
        ORDER,
        EXPAND,
        int("category_id"),
        int("company_id"),
        int("manufacturer_id"),
    ],
};

pub const GET: Operation = Operation {
    name: "get_consumable_by_id",
    method: HttpMethod::Get,
    resource: Resource::Consumables,
    path: "{}",
    path_param: CONSUMABLE_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_consumable",
    method: HttpMethod::Patch,
    resource: Resource::Consumables,
    path: "{}",
    path_param: CONSUMABLE_ID,
    fields: &[text("name"), int("qty"), int("category_id")],
};

pub const DELETE: Operation = Operation {
    name: "delete_consumable",
    method: HttpMethod::Delete,
    resource: Resource::Consumables,
    path: "{}",
    path_param: CONSUMABLE_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewConsumable {
    pub name: String,
    pub qty: i64,
    pub category_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumableUpdate {
    pub name: Option<String>,
    pub qty: Option<i64>,
    pub category_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumableQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub order_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub expand: Option<bool>,
    pub category_id: Option<u64>,
    pub company_id: Option<u64>,
    pub manufacturer_id: Option<u64>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_consumable(&self, consumable: &NewConsumable) -> Result<Value> {
        self.call(&CREATE, None, consumable)
    }

    pub fn get_consumables(&self, query: &ConsumableQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_consumable_by_id(&self, consumable_id: u64) -> Result<Value> {
        self.call(&GET, Some(consumable_id.into()), &())
    }

    pub fn get_consumable_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = ConsumableQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_consumable(
        &self,
        consumable_id: u64,
        changes: &ConsumableUpdate,
    ) -> Result<Value> {
        self.call(&UPDATE, Some(consumable_id.into()), changes)
    }

    pub fn delete_consumable(&self, consumable_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(consumable_id.into()), &())
    }
}
