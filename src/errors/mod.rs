pub mod types;

pub use types::LlmPingError;
