//! Asset maintenances. These are keyed by `title` rather than `name`.

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

pub const MAINTENANCE_TYPES: &[&str] = &[
    "Maintenance",
    "Repair",
    "Upgrade",
    "PAT test",
    "Calibration",
    "Software Support",
    "Hardware Support",
];

const MAINTENANCE_ID: Option<Field> = id_param("maintenance_id");

pub const CREATE: Operation = Operation {
    name: "create_maintenance",
    method: HttpMethod::Post,
    resource: Resource::Maintenances,
    path: "",
    path_param: None,
    fields: &[
        Field::required("asset_id", FieldKind::Int),
        Field::required("supplier_id", FieldKind::Int),
        Field::required("asset_maintenance_type", FieldKind::Enum(MAINTENANCE_TYPES)),
        Field::required("title", FieldKind::Str),
        Field::required("start_date", FieldKind::Date),
        date("completion_date"),
        float("cost"),
        text("notes"),
        flag("is_warranty"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_maintenances",
    method: HttpMethod::Get,
    resource: Resource::Maintenances,
    path: "",
    path_param: None,
    fields: &[LIMIT, OFFSET, SEARCH, SORT, ORDER, int("asset_id")],
};

pub const GET: Operation = Operation {
    name: "get_maintenance_by_id",
    method: HttpMethod::Get,
    resource: Resource::Maintenances,
    path: "{}",
    path_param: MAINTENANCE_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_maintenance",
    method: HttpMethod::Patch,
    resource: Resource::Maintenances,
    path: "{}",
    path_param: MAINTENANCE_ID,
    fields: &[
        int("supplier_id"),
        Field::optional("asset_maintenance_type", FieldKind::Enum(MAINTENANCE_TYPES)),
        text("title"),
        date("start_date"),
        date("completion_date"),
        float("cost"),
        text("notes"),
        flag("is_warranty"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_maintenance",
    method: HttpMethod::Delete,
    resource: Resource::Maintenances,
    path: "{}",
    path_param: MAINTENANCE_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewMaintenance {
    pub asset_id: u64,
    pub supplier_id: u64,
    /// One of [`MAINTENANCE_TYPES`]
    pub asset_maintenance_type: String,
    pub title: String,
    pub start_date: String,
    pub completion_date: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub is_warranty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaintenanceUpdate {
    pub supplier_id: Option<u64>,
    pub asset_maintenance_type: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub completion_date: Option<String>,
    #[serde(serialize_with = "super::finite_float")]
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub is_warranty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaintenanceQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub asset_id: Option<u64>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_maintenance(&self, maintenance: &NewMaintenance) -> Result<Value> {
        self.call(&CREATE, None, maintenance)
    }

    pub fn get_maintenances(&self, query: &MaintenanceQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_maintenance_by_id(&self, maintenance_id: u64) -> Result<Value> {
        self.call(&GET, Some(maintenance_id.into()), &())
    }

    /// Looks the maintenance up by its `title`.
    pub fn get_maintenance_by_name(&self, title: &str) -> Result<Option<Value>> {
        let query = MaintenanceQuery {
            search: Some(title.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, title)
    }

    pub fn update_maintenance(
        &self,
        maintenance_id: u64,
        changes: &MaintenanceUpdate,
    ) -> Result<Value> {
        self.call(&UPDATE, Some(maintenance_id.into()), changes)
    }

    pub fn delete_maintenance(&self, maintenance_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(maintenance_id.into()), &())
    }
}
