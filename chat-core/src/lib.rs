pub mod formatter;
pub mod composer;
pub mod render;
pub mod transport;
pub mod controller;
pub mod config;
pub mod error;
pub mod resilience;
pub mod observability;
pub mod security;

pub use formatter::{format, AgentContribution, AgentStyle, Glyph, RenderDocument};
pub use controller::{ChatController, ChatView, Transcript, Variant};
pub use transport::{ChatTransport, HttpTransport};
pub use config::ClientConfig;
pub use error::{ChatError, Result};
