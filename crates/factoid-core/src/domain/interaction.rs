//! Interactions connecting physical entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An interaction between two or more physical entities in the document.
///
/// Participants are entity ids. A retained interaction always has at least
/// two of them; the document enforces this on insert and on participant
/// removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Document-unique id.
    pub id: Uuid,
    /// Display name shown on the interaction's connector node.
    pub name: String,
    /// Ids of the participating entities.
    pub participants: Vec<Uuid>,
    /// When the interaction was added to the document.
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Create an interaction with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, participants: Vec<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            participants,
            created_at: Utc::now(),
        }
    }

    /// Number of participants.
    pub fn arity(&self) -> usize {
        self.participants.len()
    }
}
