//! Ask an OpenAI chat model one fixed programming question.
//!
//! Configuration comes from the environment, the request goes through an
//! [`LLMProvider`], and [`runner::run`] writes the answer to any writer.

pub mod config;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod response;
pub mod runner;
pub mod types;

// Re-export core types for easy usage
pub use config::Config;
pub use error::Error;
pub use factory::{ProviderConfig, ProviderFactory};
pub use provider::LLMProvider;
pub use providers::*;
pub use response::*;
pub use runner::{build_request, run};
pub use types::*;
