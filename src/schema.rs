//! Declarative description of every remote operation.
//!
//! An [`Operation`] carries the HTTP verb, the resource path, the optional
//! path argument and the accepted fields with their kinds. Verb differences
//! between resources (PUT for fieldsets, POST for status label updates) live
//! in these constants rather than in code. [`Operation::build_request`] is
//! the single routine that validates arguments and assembles the request.

use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter};
use tracing::trace;

use crate::{
    payload::Payload,
    session::{ApiRequest, HttpMethod},
    validation::{check, FieldKind, ValidationError},
};

/// Path prefix shared by every endpoint
pub const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Placeholder for the path argument inside [`Operation::path`]
const PATH_ARGUMENT: &str = "{}";

/// Columns accepted by the `sort` filter of listing endpoints
pub const SORT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "asset_tag",
    "serial",
    "model",
    "model_number",
    "last_checkout",
    "category",
    "manufacturer",
    "notes",
    "expected_checkin",
    "order_number",
    "companyName",
    "location",
    "image",
    "status_label",
    "assigned_to",
    "created_at",
    "purchase_date",
    "purchase_cost",
];

pub const SORT_ORDERS: &[&str] = &["asc", "desc"];

pub const LIMIT: Field = Field::optional("limit", FieldKind::Int);
pub const OFFSET: Field = Field::optional("offset", FieldKind::Int);
pub const SEARCH: Field = Field::optional("search", FieldKind::Str);
pub const SORT: Field = Field::optional("sort", FieldKind::Enum(SORT_COLUMNS));
pub const ORDER: Field = Field::optional("order", FieldKind::Enum(SORT_ORDERS));
pub const EXPAND: Field = Field::optional("expand", FieldKind::Bool);

/// Server-side entity types and their path segment under `/api/v1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Accessories,
    #[strum(serialize = "hardware")]
    Assets,
    Categories,
    Companies,
    Components,
    Consumables,
    Fields,
    Fieldsets,
    Licenses,
    Locations,
    Maintenances,
    Manufacturers,
    Models,
    #[strum(serialize = "statuslabels")]
    StatusLabels,
    Users,
    Suppliers,
}

impl Resource {
    /// Property compared by the exact-name lookups
    pub fn name_key(&self) -> &'static str {
        match self {
            Resource::Maintenances => "title",
            _ => "name",
        }
    }
}

/// One accepted argument of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required fields must be non-null and are always sent
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    pub resource: Resource,
    /// Path below the resource segment, `{}` marks the path argument
    pub path: &'static str,
    pub path_param: Option<Field>,
    pub fields: &'static [Field],
}

impl Operation {
    /// Validate the arguments and assemble the request.
    ///
    /// Fields are checked and emitted in declaration order. For GET the
    /// payload becomes the query string, DELETE never carries a body, and
    /// the other verbs send the payload as JSON when it is not empty.
    pub fn build_request(
        &self,
        path_arg: Option<Value>,
        mut args: Map<String, Value>,
    ) -> Result<ApiRequest, ValidationError> {
        trace!("Building request for {}...", self.name);

        let path_value = self.resolve_path_argument(path_arg)?;

        let mut segments: Vec<String> = API_PREFIX.iter().map(|s| s.to_string()).collect();
        segments.push(self.resource.to_string());
        for part in self.path.split('/').filter(|part| !part.is_empty()) {
            match (part, &path_value) {
                (PATH_ARGUMENT, Some(value)) => segments.push(value.clone()),
                _ => segments.push(part.to_string()),
            }
        }

        if let Some(unknown) = args
            .keys()
            .find(|key| !self.fields.iter().any(|field| field.name == key.as_str()))
        {
            return Err(ValidationError::UnknownField {
                operation: self.name.to_string(),
                field: unknown.clone(),
            });
        }

        let mut payload = Payload::new();
        for field in self.fields {
            let value = args.remove(field.name).unwrap_or(Value::Null);
            check(field.name, field.kind, &value)?;
            if field.required {
                if value.is_null() {
                    return Err(ValidationError::MissingField {
                        field: field.name.to_string(),
                    });
                }
                payload.seed(field.name, value);
            } else {
                payload.add(field.name, value);
            }
        }

        let request = match self.method {
            HttpMethod::Get => ApiRequest {
                method: self.method,
                segments,
                query: payload.to_query(),
                body: None,
            },
            HttpMethod::Delete => ApiRequest {
                method: self.method,
                segments,
                query: Vec::new(),
                body: None,
            },
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => ApiRequest {
                method: self.method,
                segments,
                query: Vec::new(),
                body: (!payload.is_empty()).then(|| payload.into_value()),
            },
        };
        Ok(request)
    }

    fn resolve_path_argument(
        &self,
        path_arg: Option<Value>,
    ) -> Result<Option<String>, ValidationError> {
        match (self.path_param, path_arg) {
            (Some(param), Some(value)) if !value.is_null() => {
                check(param.name, param.kind, &value)?;
                Ok(Some(match value {
                    Value::String(text) => text,
                    other => other.to_string(),
                }))
            }
            (Some(param), _) => Err(ValidationError::MissingField {
                field: param.name.to_string(),
            }),
            (None, Some(_)) => Err(ValidationError::UnknownField {
                operation: self.name.to_string(),
                field: "path argument".to_string(),
            }),
            (None, None) => Ok(None),
        }
    }
}
