//! Completion results returned by providers.

use crate::{Error, Role, Usage};

/// A complete chat-completion result.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
    pub system_fingerprint: Option<String>,
    /// The response body exactly as the service sent it, including fields not modelled here.
    pub raw: serde_json::Value,
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

/// The message carried by a choice. The service may send `null` content.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceMessage {
    pub role: Role,
    pub content: Option<String>,
}

impl ChatCompletion {
    /// The first choice, or `Error::EmptyResponse` when there is none.
    pub fn first_choice(&self) -> Result<&Choice, Error> {
        self.choices.first().ok_or(Error::EmptyResponse)
    }

    /// Content of the first choice's message.
    pub fn first_content(&self) -> Result<Option<&str>, Error> {
        Ok(self.first_choice()?.message.content.as_deref())
    }
}
