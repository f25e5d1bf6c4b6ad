use serde::Serialize;
use serde_json::Value;

use super::{date, float, id_param, int, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, EXPAND, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const ACCESSORY_ID: Option<Field> = id_param("accessory_id");

pub const CREATE: Operation = Operation {
    name: "create_accessory",
    method: HttpMethod::Post,
    resource: Resource::Accessories,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("qty", FieldKind::Int),
        Field::required("category_id", FieldKind::Int),
        text("order_number"),
        float("purchase_cost"),
        date("purchase_date"),
        text("model_number"),
        int("company_id"),
        int("location_id"),
        int("manufacturer_id"),
        int("supplier_id"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_accessories",
    method: HttpMethod::Get,
    resource: Resource::Accessories,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, text("order_number"), SORT, ORDER, EXPAND],
};

pub const GET: Operation = Operation {
    name: "get_accessory_by_id",
    method: HttpMethod::Get,
    resource: Resource::Accessories,
    path: "{}",
    path_param: ACCESSORY_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_accessory",
    method: HttpMethod::Patch,
    resource: Resource::Accessories,
    path: "{}",
    path_param: ACCESSORY_ID,
    fields: &[
        text("name"),
        int("qty"),
        int("category_id"),
        text("order_number"),
        float("purchase_cost"),
        date("purchase_date"),
        text("model_number"),
        int("company_id"),
        int("location_id"),
        int("manufacturer_id"),
        int("supplier_id"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_accessory",
    method: HttpMethod::Delete,
    resource: Resource::Accessories,
    path: "{}",
    path_param: ACCESSORY_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewAccessory {
    pub name: String,
    pub qty: i64,
    pub category_id: u64,
    pub order_number: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub purchase_cost: Option<f64>,
    /// `YYYY-MM-DD`
    pub purchase_date: Option<String>,
    pub model_number: Option<String>,
    pub company_id: Option<u64>,
    pub location_id: Option<u64>,
    pub manufacturer_id: Option<u64>,
    pub supplier_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccessoryUpdate {
    pub name: Option<String>,
    pub qty: Option<i64>,
    pub category_id: Option<u64>,
    pub order_number: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub purchase_cost: Option<f64>,
    pub purchase_date: Option<String>,
    pub model_number: Option<String>,
    pub company_id: Option<u64>,
    pub location_id: Option<u64>,
    pub manufacturer_id: Option<u64>,
    pub supplier_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccessoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub order_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub expand: Option<bool>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_accessory(&self, accessory: &NewAccessory) -> Result<Value> {
        self.call(&CREATE, None, accessory)
    }

    pub fn get_accessories(&self, query: &AccessoryQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_accessory_by_id(&self, accessory_id: u64) -> Result<Value> {
        self.call(&GET, Some(accessory_id.into()), &())
    }

    pub fn get_accessory_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = AccessoryQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_accessory(&self, accessory_id: u64, changes: &AccessoryUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(accessory_id.into()), changes)
    }

    pub fn delete_accessory(&self, accessory_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(accessory_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_create_accessory_sends_required_fields_first() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .create_accessory(&NewAccessory {
                name: "USB-C dock".to_string(),
                qty: 4,
                category_id: 3,
                purchase_cost: Some(129.99),
                purchase_date: Some("2024-01-15".to_string()),
                ..Default::default()
            })
            .unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/api/v1/accessories");
        assert_eq!(
            serde_json::to_string(&request.body.unwrap()).unwrap(),
            r#"{"name":"USB-C dock","qty":4,"category_id":3,"purchase_cost":129.99,"purchase_date":"2024-01-15"}"#
        );
    }

    #[test]
    fn test_get_accessories_sends_expand_as_text() {
        let client = SnipeClient::with_transport(
            MockTransport::new().respond(json!({"total": 0, "rows": []})),
        );
        let response = client
            .get_accessories(&AccessoryQuery {
                limit: Some(25),
                sort: Some("created_at".to_string()),
                expand: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response, json!({"total": 0, "rows": []}));

        let request = client.transport().last_request();
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "25".to_string()),
                ("sort".to_string(), "created_at".to_string()),
                ("expand".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_accessories_rejects_unknown_sort() {
        let client = SnipeClient::with_transport(MockTransport::new());
        let result = client.get_accessories(&AccessoryQuery {
            sort: Some("colour".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_create_accessory_rejects_bad_date() {
        let client = SnipeClient::with_transport(MockTransport::new());
        let result = client.create_accessory(&NewAccessory {
            name: "dock".to_string(),
            qty: 1,
            category_id: 3,
            purchase_date: Some("15/01/2024".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
