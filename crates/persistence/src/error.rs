// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur at the storage surface.
///
/// These never reach the assessment workflow: the session layer downgrades
/// them to logged soft failures. They are surfaced from backend
/// constructors, where failing fast is the right behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend could not be opened or initialized.
    InitializationError(String),
    /// A read or write against the backend failed.
    BackendError(String),
    /// A value could not be serialized or deserialized.
    SerializationError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::BackendError(msg) => write!(f, "Storage backend error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::BackendError(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
