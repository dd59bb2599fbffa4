use clap::Parser;

#[derive(Parser)]
#[command(
    name = "llmping",
    version,
    about = "Send one prompt to an Anthropic-compatible messages API and print the reply"
)]
pub struct Cli {
    /// Prompt to send
    #[arg(default_value = "Hello! Can you confirm that you're working?")]
    pub prompt: String,

    /// API base URL (defaults to $ANTHROPIC_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token (defaults to $ANTHROPIC_AUTH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print only the reply text, without the label
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
