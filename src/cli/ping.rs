use tracing::info;

use crate::cli::commands::Cli;
use crate::config::Config;
use crate::errors::LlmPingError;
use crate::llm::{AnthropicProvider, CompletionProvider, CompletionReply};

pub async fn handle_ping(args: &Cli) -> Result<(), LlmPingError> {
    // Configuration is validated before the provider exists, so a bad token
    // or URL never produces network traffic.
    let config = Config::resolve(args.base_url.as_deref(), args.token.as_deref())?;
    let provider = AnthropicProvider::new(&config);

    let reply = send_prompt(&provider, &args.prompt).await?;

    if args.quiet {
        println!("{}", reply.content);
    } else {
        println!("Claude's response: {}", reply.content);
    }

    Ok(())
}

pub async fn send_prompt(
    provider: &dyn CompletionProvider,
    prompt: &str,
) -> Result<CompletionReply, LlmPingError> {
    if prompt.trim().is_empty() {
        return Err(LlmPingError::Config("prompt must not be empty".into()));
    }

    info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "Sending prompt"
    );

    let reply = provider.complete(prompt).await?;

    info!(
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "Received reply"
    );

    Ok(reply)
}
