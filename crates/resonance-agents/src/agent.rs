//! Agent abstractions and common types.

use serde::{Deserialize, Serialize};

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Agent error types
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A collaborator's scalar contribution to the harmony composition.
///
/// The engine only cares about the contract: which named field carries
/// the value injected into the composer. The bundle the collaborator
/// computed along the way rides along for the record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SilenceContribution {
    /// The value injected into the harmony composer
    pub silence_score: f64,
    /// Secondary depth contribution, reported but not composed
    pub depth_score: f64,
}

/// A collaborator that produces a silence contribution for a given
/// activation. The lead engine treats implementors as opaque.
///
/// The solstice flag is resolved by the caller and passed down so a
/// pinned flag governs the whole turn; implementors must not consult
/// the wall clock themselves.
pub trait SilenceProvider {
    /// Identifier reported in turn records
    fn agent_id(&self) -> &str;

    /// Produce this collaborator's contribution for one turn.
    fn silence_for(
        &mut self,
        activation: f64,
        solstice_active: bool,
    ) -> AgentResult<SilenceContribution>;
}

/// Fixed-value provider for tests and offline composition.
#[derive(Debug, Clone)]
pub struct FixedSilence {
    pub contribution: SilenceContribution,
}

impl FixedSilence {
    pub fn new(silence_score: f64, depth_score: f64) -> Self {
        Self {
            contribution: SilenceContribution {
                silence_score,
                depth_score,
            },
        }
    }
}

impl SilenceProvider for FixedSilence {
    fn agent_id(&self) -> &str {
        "fixed-silence"
    }

    fn silence_for(
        &mut self,
        _activation: f64,
        _solstice_active: bool,
    ) -> AgentResult<SilenceContribution> {
        Ok(self.contribution)
    }
}
