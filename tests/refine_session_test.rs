//! Headless refinement-flow tests with a scripted message source.

use std::sync::Mutex;

use async_trait::async_trait;
use quill::commit::context::ProjectContext;
use quill::{
    AicError, Decision, DiffPayload, DiffScope, Effect, ErrorKind, GenerateError, MessageSource,
    PromptVariant, RefinementSession, SessionState, build_prompt,
};

/// Returns canned responses in order and records every prompt it was given.
struct ScriptedSource {
    responses: Mutex<Vec<Result<String, GenerateError>>>,
    seen_prompts: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<String, GenerateError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            seen_prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.seen_prompts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MessageSource for ScriptedSource {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.seen_prompts.lock().expect("lock").push(prompt.to_string());
        self.responses.lock().expect("lock").remove(0)
    }
}

fn new_session() -> RefinementSession {
    let diff = DiffPayload::new(
        "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn answer() {}".into(),
        DiffScope::Staged,
        vec!["src/lib.rs".into()],
    )
    .expect("valid payload");
    RefinementSession::new(diff, ProjectContext::default(), "feat: first draft".into())
}

/// Mirror of the interactive driver without terminal or executor: applies
/// each decision, performs regeneration effects against the source, and
/// records what was asked of the outside world.
async fn drive(
    session: &mut RefinementSession,
    decisions: Vec<Decision>,
    source: &ScriptedSource,
) -> Result<Vec<Effect>, GenerateError> {
    let mut performed = Vec::new();
    for decision in decisions {
        match session.apply(&decision) {
            Some(Effect::Commit) => {
                performed.push(Effect::Commit);
                session.mark_committed();
            }
            Some(Effect::Regenerate(variant)) => {
                performed.push(Effect::Regenerate(variant));
                let feedback = match &decision {
                    Decision::Feedback(text) => Some(text.as_str()),
                    _ => None,
                };
                let prompt = build_prompt(
                    variant,
                    session.source_for(variant),
                    &session.context().describe(),
                    session.diff().files(),
                    feedback,
                );
                let text = source.generate(&prompt).await?;
                session.complete_regeneration(text, variant);
            }
            None => {}
        }
    }
    Ok(performed)
}

#[tokio::test]
async fn first_generation_seeds_an_awaiting_session() {
    let session = new_session();
    assert_eq!(session.state(), SessionState::AwaitingDecision);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.current().text, "feat: first draft");
}

#[tokio::test]
async fn cancel_performs_no_side_effects() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![]);

    let performed = drive(&mut session, vec![Decision::Cancel], &source)
        .await
        .expect("cancel never fails");
    assert!(performed.is_empty());
    assert_eq!(session.state(), SessionState::Cancelled);
    assert!(source.prompts().is_empty());
}

#[tokio::test]
async fn confirm_commits_the_current_message() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![]);

    let performed = drive(&mut session, vec![Decision::Confirm], &source)
        .await
        .expect("confirm");
    assert_eq!(performed, [Effect::Commit]);
    assert_eq!(session.state(), SessionState::Committed);
}

#[tokio::test]
async fn refinement_chain_grows_history_in_order() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![
        Ok("feat: first draft, with a detailed body".into()),
        Ok("feat: short".into()),
    ]);

    drive(
        &mut session,
        vec![Decision::Detailed, Decision::Summarize, Decision::Confirm],
        &source,
    )
    .await
    .expect("refinement chain");

    let history: Vec<&str> = session.history().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        history,
        [
            "feat: first draft",
            "feat: first draft, with a detailed body",
            "feat: short"
        ]
    );
    let indices: Vec<u32> = session.history().iter().map(|m| m.index).collect();
    assert_eq!(indices, [1, 2, 3]);
    assert_eq!(session.state(), SessionState::Committed);
}

#[tokio::test]
async fn summarize_sends_the_prior_message_not_the_diff() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![
        Ok("feat: first draft, with a detailed body".into()),
        Ok("feat: short".into()),
    ]);

    drive(
        &mut session,
        vec![Decision::Detailed, Decision::Summarize],
        &source,
    )
    .await
    .expect("refinements");

    let prompts = source.prompts();
    assert_eq!(prompts.len(), 2);
    // The summarize payload is the detailed message produced one step earlier.
    assert!(prompts[1].contains("feat: first draft, with a detailed body"));
    assert!(!prompts[1].contains("diff --git"));
    // The detailed regeneration still worked from the diff.
    assert!(prompts[0].contains("diff --git"));
}

#[tokio::test]
async fn feedback_text_reaches_the_prompt() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![Ok("feat: first draft, config noted".into())]);

    drive(
        &mut session,
        vec![Decision::Feedback("mention the config migration".into())],
        &source,
    )
    .await
    .expect("feedback refinement");

    let prompts = source.prompts();
    assert!(prompts[0].contains("mention the config migration"));
    assert!(prompts[0].contains("diff --git"));
    assert_eq!(session.current().variant, PromptVariant::FeedbackGuided);
}

#[tokio::test]
async fn regeneration_failure_aborts_the_session() {
    let mut session = new_session();
    let source = ScriptedSource::new(vec![Err(GenerateError::EmptyResponse)]);

    let err = drive(&mut session, vec![Decision::Retry], &source)
        .await
        .expect_err("generation failure must abort");
    assert!(matches!(err, GenerateError::EmptyResponse));
    assert_eq!(AicError::from(err).kind(), ErrorKind::Generation);
    // No fallback to the prior message: the session never returned to
    // AwaitingDecision.
    assert_eq!(session.state(), SessionState::Regenerating);
    assert_eq!(session.history().len(), 1);
}
