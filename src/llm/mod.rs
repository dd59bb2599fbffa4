pub mod provider;
pub mod anthropic;
pub mod types;

pub use provider::CompletionProvider;
pub use anthropic::AnthropicProvider;
pub use types::{CompletionReply, CompletionRequest, Message};
