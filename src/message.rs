use serde::{Deserialize, Serialize};

/// A message in a conversation, containing a role and text content.
///
/// The engine delivers its scripted replies as assistant messages through
/// an [`OutputChannel`](crate::channel::OutputChannel); session layers
/// typically wrap incoming text as user messages when building transcripts.
///
/// # Examples
///
/// ```
/// use dialograph::message::Message;
///
/// let user_msg = Message::user("Can I order a pizza?");
/// let reply = Message::assistant("Sure, which toppings?");
///
/// assert!(user_msg.has_role(Message::USER));
/// assert!(reply.has_role(Message::ASSISTANT));
/// ```
///
/// # Serialization
///
/// Messages implement `Serialize` and `Deserialize`:
/// ```
/// use dialograph::message::Message;
///
/// let msg = Message::user("test");
/// let json = serde_json::to_string(&msg).unwrap();
/// let parsed: Message = serde_json::from_str(&json).unwrap();
/// assert_eq!(msg, parsed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (e.g., "user", "assistant", "system").
    ///
    /// Use the constants on [`Message`] for standardized values.
    pub role: String,
    /// The text content of the message.
    pub content: String,
}

impl Message {
    /// User input message role.
    pub const USER: &'static str = "user";
    /// Engine reply message role.
    pub const ASSISTANT: &'static str = "assistant";
    /// System notice message role.
    pub const SYSTEM: &'static str = "system";

    /// Creates a new message with the specified role and content.
    #[must_use]
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    /// Creates a user message with the specified content.
    #[must_use]
    pub fn user(content: &str) -> Self {
        Self::new(Self::USER, content)
    }

    /// Creates an assistant message with the specified content.
    #[must_use]
    pub fn assistant(content: &str) -> Self {
        Self::new(Self::ASSISTANT, content)
    }

    /// Creates a system message with the specified content.
    #[must_use]
    pub fn system(content: &str) -> Self {
        Self::new(Self::SYSTEM, content)
    }

    /// Returns true if this message has the specified role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
