//! Assets, which the server calls "hardware".

use serde::Serialize;
use serde_json::Value;

use super::{date, flag, float, id_param, int, text};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const ASSET_ID: Option<Field> = id_param("asset_id");

pub const CREATE: Operation = Operation {
    name: "create_asset",
    method: HttpMethod::Post,
    resource: Resource::Assets,
    path: "",
    path_param: None,
    fields: &[
        Field::required("status_id", FieldKind::Int),
        Field::required("model_id", FieldKind::Int),
        text("asset_tag"),
        text("name"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_assets",
    method: HttpMethod::Get,
    resource: Resource::Assets,
    path: "",
    path_param: None,
    fields: &[
        LIMIT,
        OFFSET,
        SEARCH,
        text("order_number"),
        SORT,
        ORDER,
        int("model_id"),
        int("category_id"),
        int("manufacturer_id"),
        int("company_id"),
        int("location_id"),
        text("status"),
        int("status_id"),
    ],
};

pub const GET: Operation = Operation {
    name: "get_asset_by_id",
    method: HttpMethod::Get,
    resource: Resource::Assets,
    path: "{}",
    path_param: ASSET_ID,
    fields: &[],
};

pub const GET_BY_SERIAL: Operation = Operation {
    name: "get_asset_by_serial",
    method: HttpMethod::Get,
    resource: Resource::Assets,
    path: "byserial/{}",
    path_param: Some(Field::required("asset_serial", FieldKind::Str)),
    fields: &[],
};

pub const GET_BY_TAG: Operation = Operation {
    name: "get_asset_by_tag",
    method: HttpMethod::Get,
    resource: Resource::Assets,
    path: "bytag/{}",
    path_param: Some(Field::required("asset_tag", FieldKind::Str)),
    fields: &[],
};

pub const LIST_BY_STATUS_LABEL: Operation = Operation {
    name: "get_assets_by_status_id",
    method: HttpMethod::Get,
    resource: Resource::StatusLabels,
    path: "{}/assetlist",
    path_param: id_param("status_label_id"),
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_asset",
    method: HttpMethod::Patch,
    resource: Resource::Assets,
    path: "{}",
    path_param: ASSET_ID,
    fields: &[
        text("asset_tag"),
        text("notes"),
        int("status_id"),
        int("model_id"),
        date("last_checkout"),
        int("assigned_to"),
        int("company_id"),
        text("serial"),
        text("order_number"),
        int("warranty_months"),
        float("purchase_cost"),
        date("purchase_date"),
        flag("requestable"),
        flag("archived"),
        int("rtd_location_id"),
        text("name"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_asset",
    method: HttpMethod::Delete,
    resource: Resource::Assets,
    path: "{}",
    path_param: ASSET_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewAsset {
    pub status_id: u64,
    pub model_id: u64,
    pub asset_tag: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub order_number: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub model_id: Option<u64>,
    pub category_id: Option<u64>,
    pub manufacturer_id: Option<u64>,
    pub company_id: Option<u64>,
    pub location_id: Option<u64>,
    pub status: Option<String>,
    pub status_id: Option<u64>,
}

/// Fields to change on an asset. `false` and `0` cannot be sent through
/// this struct; they are treated as "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetUpdate {
    pub asset_tag: Option<String>,
    pub notes: Option<String>,
    pub status_id: Option<u64>,
    pub model_id: Option<u64>,
    pub last_checkout: Option<String>,
    pub assigned_to: Option<u64>,
    pub company_id: Option<u64>,
    pub serial: Option<String>,
    pub order_number: Option<String>,
    pub warranty_months: Option<i64>,
    #[serde(serialize_with = "super::finite_float")]
    pub purchase_cost: Option<f64>,
    pub purchase_date: Option<String>,
    pub requestable: Option<bool>,
    pub archived: Option<bool>,
    pub rtd_location_id: Option<u64>,
    pub name: Option<String>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_asset(&self, asset: &NewAsset) -> Result<Value> {
        self.call(&CREATE, None, asset)
    }

    pub fn get_assets(&self, query: &AssetQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_asset_by_id(&self, asset_id: u64) -> Result<Value> {
        self.call(&GET, Some(asset_id.into()), &())
    }

    pub fn get_asset_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = AssetQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    pub fn get_asset_by_serial(&self, serial: &str) -> Result<Value> {
        self.call(&GET_BY_SERIAL, Some(serial.into()), &())
    }

    pub fn get_asset_by_tag(&self, asset_tag: &str) -> Result<Value> {
        self.call(&GET_BY_TAG, Some(asset_tag.into()), &())
    }

    /// All assets carrying the given status label
    pub fn get_assets_by_status_id(&self, status_label_id: u64) -> Result<Value> {
        self.call(&LIST_BY_STATUS_LABEL, Some(status_label_id.into()), &())
    }

    pub fn update_asset(&self, asset_id: u64, changes: &AssetUpdate) -> Result<Value> {
        self.call(&UPDATE, Some(asset_id.into()), changes)
    }

    pub fn delete_asset(&self, asset_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(asset_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{session::mock::MockTransport, validation::ValidationError, Error};
    use serde_json::json;

    #[test]
    fn test_create_asset_end_to_end() {
        let reply = json!({"status": "success", "payload": {"id": 77, "name": "pc1"}});
        let client = SnipeClient::with_transport(MockTransport::new().respond(reply.clone()));

        let response = client
            .create_asset(&NewAsset {
                status_id: 2,
                model_id: 24,
                name: Some("pc1".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response, reply);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path(), "/api/v1/hardware");
        assert_eq!(
            serde_json::to_string(requests[0].body.as_ref().unwrap()).unwrap(),
            r#"{"status_id":2,"model_id":24,"name":"pc1"}"#
        );
    }

    #[test]
    fn test_lookup_paths() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.get_asset_by_serial("SN-123").unwrap();
        client.get_asset_by_tag("TAG-9").unwrap();
        client.get_assets_by_status_id(4).unwrap();
        client.get_asset_by_id(12).unwrap();

        let paths: Vec<String> = client
            .transport()
            .requests()
            .iter()
            .map(|request| request.path())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/api/v1/hardware/byserial/SN-123",
                "/api/v1/hardware/bytag/TAG-9",
                "/api/v1/statuslabels/4/assetlist",
                "/api/v1/hardware/12",
            ]
        );
    }

    #[test]
    fn test_get_asset_by_name_matches_exactly() {
        let client = SnipeClient::with_transport(MockTransport::new().respond(json!({
            "total": 2,
            "rows": [{"id": 1, "name": "pc10"}, {"id": 2, "name": "pc1"}]
        })));
        let found = client.get_asset_by_name("pc1").unwrap();
        assert_eq!(found, Some(json!({"id": 2, "name": "pc1"})));
        assert_eq!(
            client.transport().last_request().query,
            vec![("search".to_string(), "pc1".to_string())]
        );
    }

    #[test]
    fn test_update_asset_is_sparse_patch() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .update_asset(
                9,
                &AssetUpdate {
                    notes: Some("moved".to_string()),
                    requestable: Some(true),
                    archived: Some(false),
                    last_checkout: Some("2024-02-01".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/api/v1/hardware/9");
        assert_eq!(
            request.body,
            Some(json!({"notes": "moved", "last_checkout": "2024-02-01", "requestable": true}))
        );
    }

    #[test]
    fn test_update_asset_rejects_bad_checkout_date() {
        let client = SnipeClient::with_transport(MockTransport::new());
        let err = client
            .update_asset(
                9,
                &AssetUpdate {
                    last_checkout: Some("yesterday".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_update_asset_rejects_nan_cost() {
        let client = SnipeClient::with_transport(MockTransport::new());
        let err = client
            .update_asset(
                1,
                &AssetUpdate {
                    purchase_cost: Some(f64::NAN),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::WrongKind { ref field, .. }) if field == "purchase_cost"
        ));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_delete_asset() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.delete_asset(3).unwrap();
        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path(), "/api/v1/hardware/3");
        assert!(request.body.is_none());
    }
}
