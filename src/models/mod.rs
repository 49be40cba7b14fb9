//! Typed Wish resources.
//!
//! Records in Wish responses are often wrapped in a single key naming their
//! type, e.g. `{"Product": {...}}` or `{"Order": {...}}`. Every model
//! implements [`WishModel`], whose [`from_record`](WishModel::from_record)
//! removes that wrapper before deserializing; this is the record factory the
//! paginated listings use.
//!
//! Wish sends many numbers and booleans as strings (`"10.0"`, `"True"`).
//! Models keep amounts and counts as `String` and normalize booleans, so no
//! precision is lost in either direction.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use wish_api::models::{Product, WishModel};
//!
//! let record = json!({"Product": {"id": "p1", "name": "Mug", "parent_sku": "MUG"}});
//! let product = Product::from_record(record).unwrap();
//!
//! assert_eq!(product.id.as_deref(), Some("p1"));
//! assert_eq!(product.parent_sku.as_deref(), Some("MUG"));
//! ```

mod download_job;
mod order;
mod product;
pub(crate) mod serde_helpers;
mod ticket;
mod variation;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ParamValue, RequestParams};

pub use download_job::{
    DownloadJob, DownloadJobStatus, OrderDownloadJobParams, ProductDownloadJobParams, SortOrder,
};
pub use order::{Address, Order, RefundReason, Tracker};
pub use product::{MultiShippingUpdate, NewProduct, Product, Tag};
pub use ticket::Ticket;
pub use variation::{NewProductVariation, ProductVariation};

/// A resource that can be built from a Wish response record.
pub trait WishModel: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The record's type name, also its wrapper key in responses (e.g., "Product").
    const NAME: &'static str;

    /// Builds the model from one raw record.
    ///
    /// Accepts both the wrapped form `{"<NAME>": {...}}` and the bare object.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the record does not have the model's shape.
    fn from_record(record: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(unwrap_record(record, Self::NAME))
    }

    /// Returns the named fields of this model as request parameters.
    ///
    /// Fields that are unset are left out.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the model cannot be serialized.
    fn pick_params(&self, fields: &[&str]) -> Result<RequestParams, serde_json::Error> {
        let mut all = to_params(self)?;
        Ok(fields
            .iter()
            .filter_map(|field| all.remove(field).map(|value| (*field, value)))
            .collect())
    }
}

/// Removes the `{"<name>": ...}` wrapper from a record, if present.
pub(crate) fn unwrap_record(record: Value, name: &str) -> Value {
    match record {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(name) => {
            map.remove(name).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Serializes a parameter struct into request parameters.
///
/// `null` values are skipped, arrays are sent comma separated and nested
/// objects as JSON text.
///
/// # Errors
///
/// Returns the JSON error if `value` cannot be serialized.
pub fn to_params<T: Serialize + ?Sized>(value: &T) -> Result<RequestParams, serde_json::Error> {
    let mut params = RequestParams::new();

    if let Value::Object(map) = serde_json::to_value(value)? {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => params.insert(key, s),
                Value::Number(n) => params.insert(key, n.to_string()),
                Value::Bool(b) => params.insert(key, b),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        params.insert(key, ParamValue::List(values));
                    }
                }
                Value::Object(_) => params.insert(key, val.to_string()),
            }
        }
    }

    Ok(params)
}
