//! User record and the validated name used to create one

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// One row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Name accepted by `POST /insert`
///
/// Only presence is checked: any non-empty string passes, including
/// whitespace-only names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate an optional name from a request body.
    ///
    /// # Example
    /// ```
    /// use userdb_server::models::UserName;
    ///
    /// assert!(UserName::new(Some("alice")).is_ok());
    /// assert!(UserName::new(Some("")).is_err());
    /// assert!(UserName::new(None).is_err());
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(name) if !name.is_empty() => Ok(Self(name.to_owned())),
            _ => Err(ValidationError::Required { field: "Name" }),
        }
    }

    /// Validate a raw JSON `name` field.
    ///
    /// Absent and falsy values (`null`, `""`, `0`, `false`, `[]`, `{}`)
    /// count as missing. Any other non-string is rejected.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        match value {
            Some(Value::String(s)) => Self::new(Some(s.as_str())),
            Some(v) if is_truthy(v) => Err(ValidationError::NotAString { field: "Name" }),
            _ => Self::new(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
