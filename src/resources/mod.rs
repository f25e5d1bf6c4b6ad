//! Typed methods for each Snipe-IT resource.
//!
//! Every submodule declares the [`Operation`](crate::schema::Operation)
//! constants for its resource and adds the matching methods to
//! [`SnipeClient`](crate::SnipeClient). Argument structs derive `Default`, so
//! callers only spell out the fields they want to send:
//!
//! ```no_run
//! use snipeit::{resources::assets::NewAsset, SnipeClient};
//!
//! # fn main() -> snipeit::Result<()> {
//! let client = SnipeClient::connect("https://develop.snipeitapp.com", "token")?;
//! let created = client.create_asset(&NewAsset {
//!     status_id: 2,
//!     model_id: 24,
//!     name: Some("pc1".to_string()),
//!     ..Default::default()
//! })?;
//! println!("{}", created);
//! # Ok(())
//! # }
//! ```

use serde::{Serialize, Serializer};

use crate::{
    schema::{Field, SEARCH},
    validation::FieldKind,
};

pub mod accessories;
pub mod assets;
pub mod categories;
pub mod companies;
pub mod components;
pub mod consumables;
pub mod fields;
pub mod fieldsets;
pub mod licenses;
pub mod locations;
pub mod maintenances;
pub mod manufacturers;
pub mod models;
pub mod status_labels;
pub mod suppliers;
pub mod users;

/// Free-text filter for the endpoints that take nothing else
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Search {
    pub search: Option<String>,
}

impl Search {
    pub fn new(search: Option<&str>) -> Self {
        Self {
            search: search.map(str::to_string),
        }
    }
}

/// Only the name is sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Writes a non-finite float as text, which the float check then rejects.
///
/// `serde_json` turns NaN and the infinities into `null`, which would read
/// as an omitted field.
pub(crate) fn finite_float<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(number) if !number.is_finite() => serializer.serialize_str(&number.to_string()),
        _ => value.serialize(serializer),
    }
}

pub(crate) const SEARCH_ONLY: &[Field] = &[SEARCH];

pub(crate) const NAME_ONLY: &[Field] = &[Field::required("name", FieldKind::Str)];

pub(crate) const fn id_param(name: &'static str) -> Option<Field> {
    Some(Field::required(name, FieldKind::Int))
}

pub(crate) const fn text(name: &'static str) -> Field {
    Field::optional(name, FieldKind::Str)
}

pub(crate) const fn int(name: &'static str) -> Field {
    Field::optional(name, FieldKind::Int)
}

pub(crate) const fn float(name: &'static str) -> Field {
    Field::optional(name, FieldKind::Float)
}

pub(crate) const fn flag(name: &'static str) -> Field {
    Field::optional(name, FieldKind::Bool)
}

pub(crate) const fn date(name: &'static str) -> Field {
    Field::optional(name, FieldKind::Date)
}
