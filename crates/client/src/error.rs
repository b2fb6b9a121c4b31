// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

/// Errors produced while rendering results for export.
#[derive(Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    CsvError(String),
    /// The rendered document was not valid UTF-8.
    EncodingError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CsvError(message) => write!(f, "CSV error: {message}"),
            Self::EncodingError(message) => write!(f, "Encoding error: {message}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::CsvError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::EncodingError(err.to_string())
    }
}
