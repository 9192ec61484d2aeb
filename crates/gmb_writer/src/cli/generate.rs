//! Content generation command handler.

use super::commands::{BusinessArgs, GenerateCommands, OutputFormat, StyleArgs};
use super::context::AppContext;
use gmb_writer::{
    ContentDispatcher, ContentKind, GeminiClient, GenerationOutcome, GenerationRequest, GmbResult,
    JsonError, Notice, NoticeLevel, Notifier, PromptComposer,
};
use std::sync::Arc;

/// Prints notices to stderr so stdout carries only content.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let marker = match notice.level {
            NoticeLevel::Info => "i",
            NoticeLevel::Success => "✓",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "✗",
        };
        eprintln!("[{}] {}: {}", marker, notice.title, notice.description);
    }
}

/// Handle `generate` subcommands. Returns whether content was produced.
pub async fn handle_generate_command(context: &AppContext, cmd: GenerateCommands) -> GmbResult<bool> {
    let (business, style, content) = match cmd {
        GenerateCommands::Post {
            business,
            style,
            kind,
        } => (business, style, ContentKind::Post { kind }),
        GenerateCommands::Description {
            business,
            style,
            highlights,
        } => (business, style, ContentKind::Description { highlights }),
        GenerateCommands::ReviewReply {
            business,
            style,
            review_text,
            review_kind,
        } => (
            business,
            style,
            ContentKind::ReviewReply {
                review_kind,
                review_text,
            },
        ),
        GenerateCommands::Qa {
            business,
            style,
            topics,
        } => (business, style, ContentKind::Qa { topics }),
    };

    let request = build_request(&business, &style, content)?;
    let dispatcher = ContentDispatcher::new(
        context.limiter.clone(),
        PromptComposer::new()?,
        Arc::new(GeminiClient::new(context.config.gemini().clone())?),
        context.profile.clone(),
        Arc::new(ConsoleNotifier),
    )
    .with_example_delay(context.config.dispatch().example_delay());

    let outcome = dispatcher.generate(&request).await;
    print_outcome(&outcome, style.format)?;
    Ok(outcome.content().is_some())
}

fn build_request(
    business: &BusinessArgs,
    style: &StyleArgs,
    content: ContentKind,
) -> GmbResult<GenerationRequest> {
    Ok(GenerationRequest::new(
        content,
        business.to_business_info()?,
        style.tone,
        style.language,
    ))
}

fn print_outcome(outcome: &GenerationOutcome, format: OutputFormat) -> GmbResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            let Some(content) = outcome.content() else {
                return Ok(());
            };
            if content.is_example() {
                println!("(example content)");
            }
            println!("{:-<80}", "");
            for block in content.body.blocks() {
                println!("{}", block);
                println!("{:-<80}", "");
            }
        }
    }
    Ok(())
}
