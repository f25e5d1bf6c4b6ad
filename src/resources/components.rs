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

const COMPONENT_ID: Option<Field> = id_param("component_id");

pub const CREATE: Operation = Operation {
    name: "create_component",
    method: HttpMethod::Post,
    resource: Resource::Components,
    path: "",
    path_param: None,
    fields: &[
        Field::required("name", FieldKind::Str),
        Field::required("qty", FieldKind::Int),
        Field::required("category_id", FieldKind::Int),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_components",
    method: HttpMethod::Get,
    resource: Resource::Components,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, text("order_number"), SORT, ORDER, EXPAND],
};

pub const GET: Operation = Operation {
    name: "get_component_by_id",
    method: HttpMethod::Get,
    resource: Resource::Components,
    path: "{}",
    path_param: COMPONENT_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_component",
    method: HttpMethod::Patch,
    resource: Resource::Components,
    path: "{}",
    path_param: COMPONENT_ID,
    fields: &[text("name"), int("qty"), int("category_id")],
};

pub const DELETE: Operation = Operation {
    name: "delete_component",
    method: HttpMethod::Delete,
    resource: Resource::Components,
    path: "{}",
    path_param: COMPONENT_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewComponent {
    pub name: String,
    pub qty: i64,
    pub category_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub qty: Option<i64>,
    pub category_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub order_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub expand: Option<bool>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_component(&self, component: &NewComponent) -> Result<Value> {
        self.call(&CREATE, None, component)
    }

    pub fn get_components(&self, query: &ComponentQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_component_by_id(&self, component_id: u64) -> Result<Value> {
        self.call(&GET, Some(component_id.into()), &())
    }

    pub fn get_component_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = ComponentQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_component(&self, component_id: u64, changes: &ComponentUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(component_id.into()), changes)
    }

    pub fn delete_component(&self, component_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(component_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, session::mock::MockTransport, validation::ValidationError};
    use serde_json::json;

    #[test]
    fn test_create_component_seeds_zero_quantity() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .create_component(&NewComponent {
                name: "RAM 8GB".to_string(),
                qty: 0,
                category_id: 3,
            })
            .unwrap();
        assert_eq!(
            client.transport().last_request().body,
            Some(json!({"name": "RAM 8GB", "qty": 0, "category_id": 3}))
        );
    }

    #[test]
    fn test_update_component_needs_id_in_path() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .update_component(
                12,
                &ComponentUpdate {
                    qty: Some(40),
                    ..Default::default()
                },
            )
            .unwrap();
        let request = client.transport().last_request();
        assert_eq!(request.path(), "/api/v1/components/12");
        assert_eq!(request.body, Some(json!({"qty": 40})));

        let result = client.execute(&UPDATE, None, Default::default());
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField { .. }))
        ));
    }
}
