//! Software licenses.

use serde::Serialize;
use serde_json::Value;

use super::{date, flag, float, id_param, int, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, EXPAND, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const LICENSE_ID: Option<Field> = id_param("license_id");

pub const CREATE: Operation = Operation {
    name: "create_license",
    method: HttpMethod::Post,
    resource: Resource::Licenses,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("seats", FieldKind::Int),
        Field::required("category_id", FieldKind::Int),
        text("product_key"),
        int("company_id"),
        date("expiration_date"),
        text("license_email"),
        text("license_name"),
        flag("maintained"),
        int("manufacturer_id"),
        text("notes"),
        text("order_number"),
        float("purchase_cost"),
        date("purchase_date"),
        text("purchase_order"),
        flag("reassignable"),
        text("serial"),
        int("supplier_id"),
        date("termination_date"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_licenses",
    method: HttpMethod::Get,
    resource: Resource::Licenses,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, text("order_number"), SORT, ORDER, EXPAND],
};

pub const GET: Operation = Operation {
    name: "get_license_by_id",
    method: HttpMethod::Get,
    resource: Resource::Licenses,
    path: "{}",
    path_param: LICENSE_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_license",
    method: HttpMethod::Patch,
    resource: Resource::Licenses,
    path: "{}",
    path_param: LICENSE_ID,
    fields: &[
        text("name"),
        int("seats"),
        text("product_key"),
        int("company_id"),
        date("expiration_date"),
        text("license_email"),
        text("license_name"),
        flag("maintained"),
        int("manufacturer_id"),
        text("notes"),
        text("order_number"),
        float("purchase_cost"),
        date("purchase_date"),
        text("purchase_order"),
        flag("reassignable"),
        text("serial"),
        int("supplier_id"),
        date("termination_date"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_license",
    method: HttpMethod::Delete,
    resource: Resource::Licenses,
    path: "{}",
    path_param: LICENSE_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewLicense {
    pub name: String,
    pub seats: i64,
    pub category_id: u64,
    pub product_key: Option<String>,
    pub company_id: Option<u64>,
    pub expiration_date: Option<String>,
    pub license_email: Option<String>,
    pub license_name: Option<String>,
    pub maintained: Option<bool>,
    pub manufacturer_id: Option<u64>,
    pub notes: Option<String>,
    pub order_number: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub purchase_cost: Option<f64>,
    pub purchase_date: Option<String>,
    pub purchase_order: Option<String>,
    pub reassignable: Option<bool>,
    pub serial: Option<String>,
    pub supplier_id: Option<u64>,
    pub termination_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LicenseUpdate {
    pub name: Option<String>,
    pub seats: Option<i64>,
    pub product_key: Option<String>,
    pub company_id: Option<u64>,
    pub expiration_date: Option<String>,
    pub license_email: Option<String>,
    pub license_name: Option<String>,
    pub maintained: Option<bool>,
    pub manufacturer_id: Option<u64>,
    pub notes: Option<String>,
    pub order_number: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub purchase_cost: Option<f64>,
    pub purchase_date: Option<String>,
    pub purchase_order: Option<String>,
    pub reassignable: Option<bool>,
    pub serial: Option<String>,
    pub supplier_id: Option<u64>,
    pub termination_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LicenseQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub order_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub expand: Option<bool>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_license(&self, license: &NewLicense) -> Result<Value> {
        self.call(&CREATE, None, license)
    }

    pub fn get_licenses(&self, query: &LicenseQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_license_by_id(&self, license_id: u64) -> Result<Value> {
        self.call(&GET, Some(license_id.into()), &())
    }

    pub fn get_license_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = LicenseQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_license(&self, license_id: u64, changes: &LicenseUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(license_id.into()), changes)
    }

    pub fn delete_license(&self, license_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(license_id.into()), &())
    }
}
