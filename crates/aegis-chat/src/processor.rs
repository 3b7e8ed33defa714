//! Query processor: the single entry point the UI shell calls per turn.
//!
//! Runs the intent pipeline (escalation, claim, policy, FAQ) against the
//! data store gateway, formats the reply, and records the turn. The reply
//! path never errors: lookups that fail in transit degrade to fixed apology
//! strings, and persistence failures are logged and swallowed.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{error, warn};

use aegis_core::types::{ChatMessage, Claim, Conversation, Escalation, Faq, Policy, SessionId};
use aegis_gateway::{DataStore, Filter};

use crate::error::ChatError;
use crate::faq::{self, RELEVANCE_THRESHOLD};
use crate::parser::{self, Intent};
use crate::response;

/// Reason recorded against every trigger-phrase escalation.
pub const ESCALATION_REASON: &str =
    "User requested human assistance or expressed dissatisfaction";

/// Projection joining policy holder fields onto a claim lookup.
const CLAIM_SELECT: &str = "*,policies(policy_number,policy_type,policy_holder_name)";

/// Orchestrates one chat turn against the data store gateway.
pub struct QueryProcessor {
    store: Arc<dyn DataStore>,
}

impl QueryProcessor {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Process one user utterance and return the reply text.
    ///
    /// Side effects: the turn is appended to the session's conversation
    /// record, and escalated turns attempt to raise an escalation first.
    /// Neither effect can fail the reply.
    pub async fn process(&self, utterance: &str, session: &SessionId) -> String {
        let lower = utterance.to_lowercase();

        let (reply, claim_number, policy_number) = match parser::classify(&lower) {
            Intent::Escalation => {
                if let Err(e) = self.create_escalation(session, ESCALATION_REASON).await {
                    error!(session = %session, "Failed to create escalation: {e}");
                }
                (response::escalation_response().to_string(), None, None)
            }
            Intent::ClaimLookup(number) => {
                let reply = self.claim_status(&number).await;
                (reply, Some(number), None)
            }
            Intent::PolicyLookup(number) => {
                let reply = self.policy_info(&number).await;
                (reply, None, Some(number))
            }
            Intent::Faq => (self.answer_faq(&lower).await, None, None),
        };

        if let Err(e) = self
            .record_turn(session, utterance, &reply, claim_number, policy_number)
            .await
        {
            error!(session = %session, "Failed to save conversation: {e}");
        }

        reply
    }

    // -----------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------

    async fn claim_status(&self, claim_number: &str) -> String {
        match self.fetch_claim(claim_number).await {
            Ok(Some(claim)) => response::format_claim_status(&claim),
            Ok(None) => response::claim_not_found(claim_number),
            Err(e) => {
                error!(claim_number, "Error fetching claim: {e}");
                response::CLAIM_LOOKUP_FAILED.to_string()
            }
        }
    }

    async fn fetch_claim(&self, claim_number: &str) -> Result<Option<Claim>, ChatError> {
        let filter = Filter::new()
            .eq("claim_number", claim_number)
            .select(CLAIM_SELECT);
        let records = self.store.find("claims", &filter).await?;
        match records.into_iter().next() {
            Some(record) => Ok(Some(serde_json::from_value(record)?)),
            None => Ok(None),
        }
    }

    async fn policy_info(&self, policy_number: &str) -> String {
        match self.fetch_policy(policy_number).await {
            Ok(Some(policy)) => response::format_policy_info(&policy),
            Ok(None) => response::policy_not_found(policy_number),
            Err(e) => {
                error!(policy_number, "Error fetching policy: {e}");
                response::POLICY_LOOKUP_FAILED.to_string()
            }
        }
    }

    async fn fetch_policy(&self, policy_number: &str) -> Result<Option<Policy>, ChatError> {
        let filter = Filter::new().eq("policy_number", policy_number);
        let records = self.store.find("policies", &filter).await?;
        match records.into_iter().next() {
            Some(record) => Ok(Some(serde_json::from_value(record)?)),
            None => Ok(None),
        }
    }

    async fn answer_faq(&self, lower: &str) -> String {
        let faqs = match self.fetch_faqs().await {
            Ok(faqs) => faqs,
            Err(e) => {
                error!("Error searching FAQs: {e}");
                return response::FAQ_SEARCH_FAILED.to_string();
            }
        };

        match faq::best_match(lower, &faqs) {
            Some((best, score)) if score > RELEVANCE_THRESHOLD => {
                response::faq_answer(&best.question, &best.answer)
            }
            _ => response::default_response(lower),
        }
    }

    async fn fetch_faqs(&self) -> Result<Vec<Faq>, ChatError> {
        let filter = Filter::new().order_desc("priority");
        let records = self.store.find("faqs", &filter).await?;
        let mut faqs = Vec::with_capacity(records.len());
        for record in records {
            faqs.push(serde_json::from_value(record)?);
        }
        Ok(faqs)
    }

    // -----------------------------------------------------------------
    // Persistence side effects
    // -----------------------------------------------------------------

    async fn find_conversation(
        &self,
        session: &SessionId,
    ) -> Result<Option<Conversation>, ChatError> {
        let filter = Filter::new().eq("session_id", session.as_str());
        let records = self.store.find("conversations", &filter).await?;
        match records.into_iter().next() {
            Some(record) => Ok(Some(serde_json::from_value(record)?)),
            None => Ok(None),
        }
    }

    /// Append the turn's message pair to the session's conversation,
    /// creating the record on the first turn (lookup-then-insert-or-patch;
    /// the residual duplicate-insert race is closed by the one-turn-at-a-time
    /// UI, not here).
    async fn record_turn(
        &self,
        session: &SessionId,
        utterance: &str,
        reply: &str,
        claim_number: Option<String>,
        policy_number: Option<String>,
    ) -> Result<(), ChatError> {
        let now = Utc::now();
        let user = ChatMessage::user(utterance, now);
        let assistant = ChatMessage::assistant(reply, now);

        match self.find_conversation(session).await? {
            Some(mut existing) => {
                existing.messages.push(user);
                existing.messages.push(assistant);
                let partial = json!({
                    "messages": existing.messages,
                    "claim_number": claim_number.or(existing.claim_number),
                    "policy_number": policy_number.or(existing.policy_number),
                    "updated_at": now,
                });
                let filter = Filter::new().eq("session_id", session.as_str());
                self.store.patch("conversations", &filter, partial).await?;
            }
            None => {
                let conversation = Conversation {
                    id: None,
                    session_id: session.clone(),
                    messages: vec![user, assistant],
                    claim_number,
                    policy_number,
                    escalated: false,
                    escalation_reason: None,
                    updated_at: now,
                };
                self.store
                    .insert("conversations", serde_json::to_value(conversation)?)
                    .await?;
            }
        }
        Ok(())
    }

    /// Mark the session's conversation escalated and insert an escalation
    /// record. A session with no conversation yet drops the escalation
    /// (known gap, inherited and pinned by tests).
    async fn create_escalation(
        &self,
        session: &SessionId,
        reason: &str,
    ) -> Result<(), ChatError> {
        let Some(conversation) = self.find_conversation(session).await? else {
            warn!(session = %session, "No conversation for session; escalation dropped");
            return Ok(());
        };

        let filter = Filter::new().eq("session_id", session.as_str());
        let partial = json!({
            "escalated": true,
            "escalation_reason": reason,
        });
        self.store.patch("conversations", &filter, partial).await?;

        let Some(conversation_id) = conversation.id else {
            warn!(session = %session, "Conversation record has no id; escalation dropped");
            return Ok(());
        };
        let escalation = Escalation::pending(conversation_id, reason);
        self.store
            .insert("escalations", serde_json::to_value(escalation)?)
            .await?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
