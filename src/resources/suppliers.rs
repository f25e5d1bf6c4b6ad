use serde::Serialize;
use serde_json::Value;

use super::{id_param, text, Search, SEARCH_ONLY};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const SUPPLIER_ID: Option<Field> = id_param("supplier_id");

pub const CREATE: Operation = Operation {
    name: "create_supplier",
    method: HttpMethod::Post,
    resource: Resource::Suppliers,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        text("address"),
        text("address2"),
        text("state"),
        text("city"),
        text("country"),
        text("zip"),
        text("contact"),
        text("phone"),
        text("fax"),
        text("email"),
        text("url"),
        text("notes"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_suppliers",
    method: HttpMethod::Get,
    resource: Resource::Suppliers,
    path: "",
    path_param: None,
    fields: SEARCH_ONLY,
};

pub const GET: Operation = Operation {
    name: "get_supplier_by_id",
    method: HttpMethod::Get,
    resource: Resource::Suppliers,
    path: "{}",
    path_param: SUPPLIER_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_supplier",
    method: HttpMethod::Patch,
    resource: Resource::Suppliers,
    path: "{}",
    path_param: SUPPLIER_ID,
    fields: &[
        text("name"),
        text("address"),
        text("address2"),
        text("state"),
        text("city"),
        text("country"),
        text("zip"),
        text("contact"),
        text("phone"),
        text("fax"),
        text("email"),
        text("url"),
        text("notes"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_supplier",
    method: HttpMethod::Delete,
    resource: Resource::Suppliers,
    path: "{}",
    path_param: SUPPLIER_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewSupplier {
    pub name: String,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_supplier(&self, supplier: &NewSupplier) -> Result<Value> {
        self.call(&CREATE, None, supplier)
    }

    pub fn get_suppliers(&self, search: Option<&str>) -> Result<Value> {
        self.call(&LIST, None, &Search::new(search))
    }

    pub fn get_supplier_by_id(&self, supplier_id: u64) -> Result<Value> {
        self.call(&GET, Some(supplier_id.into()), &())
    }

    pub fn get_supplier_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.find_by_name(&LIST, &Search::new(Some(name)), name)
    }

    pub fn update_supplier(&self, supplier_id: u64, changes: &SupplierUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(supplier_id.into()), changes)
    }

    pub fn delete_supplier(&self, supplier_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(supplier_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_create_supplier() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .create_supplier(&NewSupplier {
                name: "CDW".to_string(),
                zip: Some("60061".to_string()),
                email: Some("sales@cdw.example".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            client.transport().last_request().body,
            Some(json!({"name": "CDW", "zip": "60061", "email": "sales@cdw.example"}))
        );
    }

    #[test]
    fn test_get_suppliers_sends_search() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.get_suppliers(Some("CDW")).unwrap();
        assert_eq!(
            client.transport().last_request().path_and_query(),
            "/api/v1/suppliers?search=CDW"
        );
    }
}
