//! Prompt construction for the four generation variants.
//!
//! Pure assembly: the same inputs always produce byte-identical prompt text.

/// Requested generation style. Each variant binds a fixed instruction
/// template and a different payload: the diff for Standard, Detailed, and
/// FeedbackGuided; the previous generated message for Summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    Standard,
    Detailed,
    Summarize,
    FeedbackGuided,
}

const STANDARD_INSTRUCTION: &str = "Generate a short, concise git commit message based on the \
following changes. Follow the conventional commit format (e.g., feat:, fix:, docs:, style:, \
refactor:, test:, chore:). Keep it under 50 characters if possible. Only respond with the \
commit message, nothing else.\n\n";

const DETAILED_SUFFIX: &str =
    "\n\nPlease provide a more detailed commit message with additional context and explanations.";

const SUMMARIZE_INSTRUCTION: &str =
    "Please summarize this commit message in 50 characters or less:\n\n";

/// Assemble the generation prompt.
///
/// `source` is the diff text, except for [`PromptVariant::Summarize`] where
/// it is the previous generated message. The context sentence and the
/// changed-file list are prepended only when non-empty. `feedback` is used
/// by [`PromptVariant::FeedbackGuided`] and ignored elsewhere.
pub fn build_prompt(
    variant: PromptVariant,
    source: &str,
    context: &str,
    files: &[String],
    feedback: Option<&str>,
) -> String {
    let mut prompt = String::new();
    push_enrichment(&mut prompt, context, files);

    match variant {
        PromptVariant::Standard | PromptVariant::Detailed => {
            prompt.push_str(STANDARD_INSTRUCTION);
            prompt.push_str("Changes:\n");
            prompt.push_str(source);
            if variant == PromptVariant::Detailed {
                prompt.push_str(DETAILED_SUFFIX);
            }
        }
        PromptVariant::Summarize => {
            prompt.push_str(SUMMARIZE_INSTRUCTION);
            prompt.push_str(source);
        }
        PromptVariant::FeedbackGuided => {
            prompt.push_str("Based on this diff:\n\n");
            prompt.push_str(source);
            prompt.push_str("\n\nAnd considering this feedback: ");
            prompt.push_str(feedback.unwrap_or(""));
            prompt.push_str("\n\nGenerate an appropriate commit message.");
        }
    }

    prompt
}

fn push_enrichment(prompt: &mut String, context: &str, files: &[String]) {
    if !context.is_empty() {
        prompt.push_str("Project information: ");
        prompt.push_str(context);
        prompt.push_str("\n\n");
    }
    if !files.is_empty() {
        prompt.push_str("Changed files: ");
        prompt.push_str(&files.join(", "));
        prompt.push_str("\n\n");
    }
}
