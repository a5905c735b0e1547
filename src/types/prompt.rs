use super::message::Message;

/// System instruction sent with every run.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful programming assistant.";

/// Question sent with every run.
pub const USER_QUESTION: &str = "What is the purpose of recursion ?";

/// An ordered conversation sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    /// Create a prompt with a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(content)],
        }
    }

    /// The fixed conversation asked by the runner.
    pub fn recursion_question() -> Self {
        Self::system(SYSTEM_INSTRUCTION).with_user(USER_QUESTION)
    }

    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Get the messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_recursion_question_is_system_then_user() {
        let prompt = Prompt::recursion_question();
        let messages = prompt.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are a helpful programming assistant.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "What is the purpose of recursion ?");
    }
}
