//! In-band call result envelope for the hosting environment.

use crate::task::domain::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// Result of a registry call, encoded as data for the host.
///
/// The envelope serializes externally tagged, so a success renders as
/// `{"value": ...}` and a rejection as `{"error": <code>}`. Callers branch
/// on the key; nothing is ever raised out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome<T> {
    /// Successful call payload.
    Value(T),
    /// Stable numeric rejection code; see [`RegistryError::code`].
    Error(u32),
}

impl<T> CallOutcome<T> {
    /// Returns whether the call was rejected.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Consumes the outcome and returns the success payload, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns the rejection code, if any.
    #[must_use]
    pub const fn error_code(&self) -> Option<u32> {
        match self {
            Self::Error(code) => Some(*code),
            Self::Value(_) => None,
        }
    }
}

impl<T> CallOutcome<T>
where
    T: Serialize,
{
    /// Encodes the outcome in its in-band JSON form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the payload cannot be serialized.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<T> From<RegistryResult<T>> for CallOutcome<T> {
    fn from(result: RegistryResult<T>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Error(err.code()),
        }
    }
}

impl<T> From<RegistryError> for CallOutcome<T> {
    fn from(err: RegistryError) -> Self {
        Self::Error(err.code())
    }
}
