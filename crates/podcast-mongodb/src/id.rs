//! Opaque record identifiers

use bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a record when it is inserted.
///
/// Stored as the server's native ObjectId; callers only compare, hash,
/// print and pass it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Extract an identifier from a BSON value returned by the server
    pub fn from_bson(value: &Bson) -> Option<Self> {
        value.as_object_id().map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<RecordId> for Bson {
    fn from(id: RecordId) -> Self {
        Bson::ObjectId(id.0)
    }
}
