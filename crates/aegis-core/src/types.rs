use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Session identity
// =============================================================================

/// Opaque session token, created once per browser context by the UI shell
/// and passed by value into every core call. Used as the join key for
/// persisted conversations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Generate a fresh session token.
    pub fn generate() -> Self {
        Self(format!("session_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Conversation records
// =============================================================================

/// The author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message within a persisted conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp,
        }
    }
}

/// Persisted conversation history for one session.
///
/// At most one record exists per `session_id`; the record is created on the
/// first turn and patched on every later turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Store-assigned identifier. Absent on insert payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub session_id: SessionId,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub claim_number: Option<String>,
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub escalated: bool,
    #[serde(default)]
    pub escalation_reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A flagged request for human intervention. Insert-only from the core's
/// perspective; never updated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub conversation_id: Uuid,
    pub reason: String,
    pub priority: String,
    pub status: String,
}

impl Escalation {
    /// Build a new high-priority, pending escalation record.
    pub fn pending(conversation_id: Uuid, reason: impl Into<String>) -> Self {
        Self {
            conversation_id,
            reason: reason.into(),
            priority: "high".to_string(),
            status: "pending".to_string(),
        }
    }
}

// =============================================================================
// Reference data (externally owned, read-only)
// =============================================================================

/// Policy holder fields joined onto a claim lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyRef {
    pub policy_number: String,
    pub policy_type: String,
    pub policy_holder_name: String,
}

/// An insurance claim record.
///
/// Status is kept as the raw store string rather than an enum: unrecognized
/// codes still render (with a default phrase) instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_number: String,
    pub claim_type: String,
    pub status: String,
    pub claim_amount: f64,
    #[serde(default)]
    pub approved_amount: Option<f64>,
    pub filed_date: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub estimated_completion: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub adjuster_notes: Option<String>,
    /// Joined policy holder fields, when the store returns them.
    #[serde(default, rename = "policies")]
    pub policy: Option<PolicyRef>,
}

/// An insurance policy record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_number: String,
    pub policy_holder_name: String,
    pub policy_type: String,
    pub status: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A frequently-asked-question entry used by the fallback matcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub priority: i64,
}

// =============================================================================
// Tests
// =============================================================================
