//! Asset models.

use serde::Serialize;
use serde_json::Value;

use super::{id_param, int, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const MODEL_ID: Option<Field> = id_param("model_id");

const MODEL_FIELDS: &[Field] = &[
    Field::required("name", FieldKind::Str),
    Field::required("category_id", FieldKind::Int),
    Field::required("manufacturer_id", FieldKind::Int),
    text("model_number"),
    int("eol"),
    int("fieldset_id"),
];

pub const CREATE: Operation = Operation {
    name: "create_model",
    method: HttpMethod::Post,
    resource: Resource::Models,
    path: "",
    path_param: None,
    fields: MODEL_FIELDS,
};

pub const LIST: Operation = Operation {
    name: "get_models",
    method: HttpMethod::Get,
    resource: Resource::Models,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, SORT, ORDER],
};

pub const GET: Operation = Operation {
    name: "get_model_by_id",
    method: HttpMethod::Get,
    resource: Resource::Models,
    path: "{}",
    path_param: MODEL_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_model",
    method: HttpMethod::Patch,
    resource: Resource::Models,
    path: "{}",
    path_param: MODEL_ID,
    fields: MODEL_FIELDS,
};

pub const DELETE: Operation = Operation {
    name: "delete_model",
    method: HttpMethod::Delete,
    resource: Resource::Models,
    path: "{}",
    path_param: MODEL_ID,
    fields: &[],
};

/// A model; updates resend name, category and manufacturer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewModel {
    pub name: String,
    pub category_id: u64,
    pub manufacturer_id: u64,
    pub model_number: Option<String>,
    /// End of life, in months
    pub eol: Option<i64>,
    pub fieldset_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_model(&self, model: &NewModel) -> Result<Value> {
        self.call(&CREATE, None, model)
    }

    pub fn get_models(&self, query: &ModelQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_model_by_id(&self, model_id: u64) -> Result<Value> {
        self.call(&GET, Some(model_id.into()), &())
    }

    pub fn get_model_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = ModelQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn update_model(&self, model_id: u64, model: &NewModel) -> Result<Value> {
        self.call(&UPDATE, Some(model_id.into()), model)
    }

    pub fn delete_model(&self, model_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(model_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockTransport;
    use serde_json::json;

    fn latitude() -> NewModel {
        NewModel {
            name: "Latitude 5440".to_string(),
            category_id: 2,
            manufacturer_id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_model() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .create_model(&NewModel {
                eol: Some(36),
                fieldset_id: Some(0),
                ..latitude()
            })
            .unwrap();
        assert_eq!(
            client.transport().last_request().body,
            Some(json!({"name": "Latitude 5440", "category_id": 2, "manufacturer_id": 1, "eol": 36}))
        );
    }

    #[test]
    fn test_update_model_resends_required_fields() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.update_model(24, &latitude()).unwrap();
        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/api/v1/models/24");
        assert_eq!(
            request.body,
            Some(json!({"name": "Latitude 5440", "category_id": 2, "manufacturer_id": 1}))
        );
    }
}
