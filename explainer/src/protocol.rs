//! JSON bodies exchanged on `POST /api/explain`.

use serde::{Deserialize, Serialize};

/// Body of the 400 response for empty input.
pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required";
/// Body of the 500 response for anything unexpected in the handler.
pub const SERVER_ERROR_MESSAGE: &str = "Server error in /api/explain";

/// Request body. A missing or `null` `text` deserialises to `None` and is rejected by validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl ExplainRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Success body. `bullet_summary` is always sent empty; clients derive bullets from
/// `simple_explanation` themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub simple_explanation: String,
    #[serde(default)]
    pub bullet_summary: Vec<String>,
}

/// `{ "error": "..." }`, used for 400 and 500 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn text_required() -> Self {
        Self {
            error: TEXT_REQUIRED_MESSAGE.to_string(),
        }
    }

    pub fn server_error() -> Self {
        Self {
            error: SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}
