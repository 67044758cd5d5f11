use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::pagination::Pagination;

/// Attribute set that can travel inside the shared envelope shapes.
pub trait Resource: Serialize + DeserializeOwned + Default {
    /// Collection path segment under `/api/v2`, e.g. `monitors`.
    const COLLECTION: &'static str;
    /// Singular noun used in diagnostics.
    const KIND: &'static str;

    /// Store the envelope-level identifier on the attributes.
    fn assign_id(&mut self, id: String);
}

/// One resource as shipped on the wire: identity, type tag, attributes.
///
/// Created fresh per HTTP exchange; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Entity<T> {
    /// Server-assigned identifier of the resource.
    pub id: String,
    /// Resource type tag, e.g. `monitor`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource attributes.
    pub attributes: T,
}

impl<T: Resource> Entity<T> {
    /// Fold the envelope identifier into the attributes so callers find the
    /// id in one place. The attributes alone do not carry it on the wire.
    pub fn into_attributes(mut self) -> T {
        self.attributes.assign_id(self.id);
        self.attributes
    }
}

/// Envelope around a single resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Document<T> {
    /// The wrapped resource.
    pub data: Entity<T>,
    /// Request-level error payload, if any.
    pub errors: Option<Value>,
    /// Pagination links; possibly all empty for single-item responses.
    pub pagination: Pagination,
}

impl<T> Document<T> {
    /// Whether the payload carries a non-empty `errors` field. The API
    /// signals request-level failure this way even under a success status.
    pub fn has_errors(&self) -> bool {
        errors_present(self.errors.as_ref())
    }
}

/// Envelope around one page of resources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ListDocument<T> {
    /// The resources on this page, in server order.
    pub data: Vec<Entity<T>>,
    /// Request-level error payload, if any.
    pub errors: Option<Value>,
    /// Pagination links for the snapshot this page came from.
    pub pagination: Pagination,
}

impl<T> ListDocument<T> {
    /// Whether the payload carries a non-empty `errors` field.
    pub fn has_errors(&self) -> bool {
        errors_present(self.errors.as_ref())
    }
}

fn errors_present(errors: Option<&Value>) -> bool {
    match errors {
        None | Some(Value::Null) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}
