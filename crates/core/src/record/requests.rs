//! Request payloads for record operations.
//!
//! Payloads are decoded strictly: unknown or missing fields fail at the
//! boundary instead of turning into empty values downstream.

use serde::{Deserialize, Serialize};

use super::types::Record;
use crate::error::HandlerError;

/// The two mutable fields of a record, as sent in create and update bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordFields {
    pub filenamedb: String,
    pub urldb: String,
}

impl RecordFields {
    /// Create a new field pair.
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filenamedb: filename.into(),
            urldb: url.into(),
        }
    }

    /// Decode a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, HandlerError> {
        serde_json::from_slice(body)
            .map_err(|e| HandlerError::MalformedRequest(format!("invalid record body: {e}")))
    }

    /// Attach an identifier, producing a full record.
    pub fn into_record(self, id: impl Into<String>) -> Record {
        Record::new(id, self.filenamedb, self.urldb)
    }
}
