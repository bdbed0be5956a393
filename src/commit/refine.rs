//! The refinement state machine, free of terminal I/O.
//!
//! The interactive driver in [`crate::commit`] collects decisions and
//! performs effects; everything here is pure state so the loop is testable
//! without a terminal.

use crate::commit::context::ProjectContext;
use crate::commit::prompt::PromptVariant;
use crate::git::diff::DiffPayload;

/// Lifecycle of a refinement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Blocked on one synchronous user selection.
    AwaitingDecision,
    /// A regeneration is in flight.
    Regenerating,
    /// The current message has been handed to the executor.
    Finalizing,
    Committed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Committed | SessionState::Cancelled)
    }
}

/// User selection from the refinement menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
    Detailed,
    Retry,
    Summarize,
    Feedback(String),
}

/// Side effect the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the current message to the commit executor.
    Commit,
    /// Re-invoke the generator with this variant.
    Regenerate(PromptVariant),
}

/// Pure transition function.
///
/// Decisions only apply in [`SessionState::AwaitingDecision`]; any other
/// state is returned unchanged with no effect.
pub fn next(state: SessionState, decision: &Decision) -> (SessionState, Option<Effect>) {
    if state != SessionState::AwaitingDecision {
        return (state, None);
    }
    match decision {
        Decision::Confirm => (SessionState::Finalizing, Some(Effect::Commit)),
        Decision::Cancel => (SessionState::Cancelled, None),
        Decision::Detailed => (
            SessionState::Regenerating,
            Some(Effect::Regenerate(PromptVariant::Detailed)),
        ),
        Decision::Retry => (
            SessionState::Regenerating,
            Some(Effect::Regenerate(PromptVariant::Standard)),
        ),
        Decision::Summarize => (
            SessionState::Regenerating,
            Some(Effect::Regenerate(PromptVariant::Summarize)),
        ),
        Decision::Feedback(_) => (
            SessionState::Regenerating,
            Some(Effect::Regenerate(PromptVariant::FeedbackGuided)),
        ),
    }
}

/// A generated message with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMessage {
    pub text: String,
    pub variant: PromptVariant,
    /// 1-based position in the session's generation sequence.
    pub index: u32,
}

/// State owned by the single foreground refinement flow.
///
/// Created right after the first successful generation and discarded once a
/// terminal state is reached. History is append-only; regeneration replaces
/// the current message but never rewrites earlier entries.
#[derive(Debug)]
pub struct RefinementSession {
    diff: DiffPayload,
    context: ProjectContext,
    current: GeneratedMessage,
    history: Vec<GeneratedMessage>,
    state: SessionState,
}

impl RefinementSession {
    pub fn new(diff: DiffPayload, context: ProjectContext, first_message: String) -> Self {
        let current = GeneratedMessage {
            text: first_message,
            variant: PromptVariant::Standard,
            index: 1,
        };
        Self {
            diff,
            context,
            history: vec![current.clone()],
            current,
            state: SessionState::AwaitingDecision,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current(&self) -> &GeneratedMessage {
        &self.current
    }

    pub fn history(&self) -> &[GeneratedMessage] {
        &self.history
    }

    pub fn diff(&self) -> &DiffPayload {
        &self.diff
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Apply a decision through the pure transition function.
    pub fn apply(&mut self, decision: &Decision) -> Option<Effect> {
        let (state, effect) = next(self.state, decision);
        self.state = state;
        effect
    }

    /// The generation payload for a variant: the current message for
    /// Summarize, the diff for everything else.
    pub fn source_for(&self, variant: PromptVariant) -> &str {
        match variant {
            PromptVariant::Summarize => &self.current.text,
            _ => self.diff.text(),
        }
    }

    /// Record a successful regeneration: appends to history, replaces the
    /// current message, and returns to `AwaitingDecision`.
    pub fn complete_regeneration(&mut self, text: String, variant: PromptVariant) {
        debug_assert_eq!(self.state, SessionState::Regenerating);
        let message = GeneratedMessage {
            text,
            variant,
            index: self.history.len() as u32 + 1,
        };
        self.history.push(message.clone());
        self.current = message;
        self.state = SessionState::AwaitingDecision;
    }

    /// Record that the executor committed the current message.
    pub fn mark_committed(&mut self) {
        debug_assert_eq!(self.state, SessionState::Finalizing);
        self.state = SessionState::Committed;
    }
}
