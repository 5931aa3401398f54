//! Records returned by the HelpMap backend.
//!
//! Fields the backend fills with defaults are optional here so partially
//! populated records still decode.

use serde::{Deserialize, Deserializer, Serialize};

pub type RecordId = u64;

/// Accept ids as JSON numbers or numeric strings.
///
/// Ids read back from browser storage are strings, and the backend echoes
/// whatever the client sent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(RecordId),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(id)) => Some(id),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Read optional text, treating JSON `null` as empty.
///
/// The backend stores client fields as sent, so a missing description or
/// comment comes back as `null` rather than being omitted.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful register/login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub creator_id: Option<RecordId>,
    #[serde(default)]
    pub creator: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_status() -> String {
    "open".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub sender_id: Option<RecordId>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub receiver_id: Option<RecordId>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub reviewer_id: Option<RecordId>,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub volunteer_id: Option<RecordId>,
    #[serde(default)]
    pub volunteer: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumComment {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub author_id: Option<RecordId>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub topic_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub creator_id: Option<RecordId>,
    #[serde(default)]
    pub creator: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub comments: Vec<ForumComment>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `/api/status` health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ServiceStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Body of calls that only confirm an action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
