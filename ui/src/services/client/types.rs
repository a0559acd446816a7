use serde::{Deserialize, Serialize};

/// Body of `POST /api/teams/register`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamRegisterRequest {
    pub team_name: String,
    pub kfids: Vec<String>,
}

impl TeamRegisterRequest {
    /// Build a request, dropping empty member slots
    pub fn new(team_name: &str, identifiers: &[String]) -> Self {
        Self {
            team_name: team_name.to_string(),
            kfids: identifiers
                .iter()
                .filter(|kfid| !kfid.is_empty())
                .cloned()
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamRegisterResponse {
    pub team_id: String,
    pub password: String,
}

/// Failure body; `detail` is usually a string but validation failures may
/// return structured data there
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorResponseBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponseBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) if text.is_empty() => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn message_text(&self) -> Option<String> {
        self.message.clone().filter(|message| !message.is_empty())
    }
}
