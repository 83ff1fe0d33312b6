//! Canned-response chatbot.
//!
//! Replies are chosen by literal substring match against an ordered rule list.
//! The first matching rule wins, so a message mentioning both "login" and
//! "feedback" gets the login answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, Sender};

/// One responder rule: any trigger contained in the lower-cased input selects
/// the reply.
#[derive(Debug, Clone, Copy)]
pub struct ChatRule {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

pub const GREETING: &str = "Hello! I'm your virtual assistant. How can I help you today?";

pub const LOGIN_REPLY: &str = "To login, click on the 'Login' button in the navbar and enter your email, password, and select your user type (Admin or Visitor).";
pub const SIGNUP_REPLY: &str = "To create an account, click 'Sign Up' and fill in your details including first name, last name, mobile, email, password, and user type. You can also capture your photo during registration.";
pub const ADMIN_REPLY: &str = "Admin users have access to the dashboard, feedback analysis, blacklist management, and can monitor all visitor activities.";
pub const VISITOR_REPLY: &str = "Visitors can register, provide feedback, check-in/check-out, and generate visitor badges. The system provides a complete visitor management experience.";
pub const FEEDBACK_REPLY: &str = "Our feedback system allows visitors to share their experience and helps administrators analyze visitor satisfaction to improve services.";
pub const CHECKIN_REPLY: &str = "The check-in/check-out feature allows visitors to digitally sign in when they arrive and sign out when they leave, providing real-time visitor tracking.";
pub const BADGE_REPLY: &str = "Visitor badges are automatically generated upon registration and can be accessed through the visitor dashboard for identification purposes.";
pub const BLACKLIST_REPLY: &str = "The blacklist feature allows administrators to manage restricted visitors and enhance security by preventing unauthorized access.";
pub const HELLO_REPLY: &str = "Hello! Welcome to the Visitor Management System. I can help you with login, registration, features, and navigation. What would you like to know?";
pub const HELP_REPLY: &str = "I can help you with: Login/Registration, Admin features, Visitor features, Check-in/Check-out, Feedback system, and Security features. What specific topic interests you?";
pub const FALLBACK_REPLY: &str = "I understand you're asking about our visitor management system. Could you please be more specific? I can help with login, registration, admin features, visitor features, or any other aspect of the system.";

/// Evaluated top to bottom. Reordering changes which reply wins on overlap.
pub const RULES: &[ChatRule] = &[
    ChatRule { triggers: &["login", "sign in"], reply: LOGIN_REPLY },
    ChatRule { triggers: &["sign up", "register"], reply: SIGNUP_REPLY },
    ChatRule { triggers: &["admin", "dashboard"], reply: ADMIN_REPLY },
    ChatRule { triggers: &["visitor", "guest"], reply: VISITOR_REPLY },
    ChatRule { triggers: &["feedback"], reply: FEEDBACK_REPLY },
    ChatRule { triggers: &["check-in", "checkout"], reply: CHECKIN_REPLY },
    ChatRule { triggers: &["badge", "id"], reply: BADGE_REPLY },
    ChatRule { triggers: &["blacklist", "security"], reply: BLACKLIST_REPLY },
    ChatRule { triggers: &["hello", "hi", "hey"], reply: HELLO_REPLY },
    ChatRule { triggers: &["help", "support"], reply: HELP_REPLY },
];

/// respond
///
/// Maps free text to a canned reply. Pure and total.
pub fn respond(user_text: &str) -> &'static str {
    let message = user_text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| message.contains(t)))
        .map_or(FALLBACK_REPLY, |rule| rule.reply)
}

/// ChatTranscript
///
/// Append-only conversation, opened by the bot greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 1,
                text: GREETING.to_string(),
                sender: Sender::Bot,
                timestamp: now,
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// submit
    ///
    /// Appends the user's message and the bot's reply and returns both.
    /// Blank input is ignored and returns an empty slice.
    pub fn submit(&mut self, text: &str, now: DateTime<Utc>) -> &[ChatMessage] {
        if text.trim().is_empty() {
            return &[];
        }

        let next_id = u32::try_from(self.messages.len()).unwrap_or(u32::MAX - 2) + 1;
        self.messages.push(ChatMessage {
            id: next_id,
            text: text.to_string(),
            sender: Sender::User,
            timestamp: now,
        });
        self.messages.push(ChatMessage {
            id: next_id + 1,
            text: respond(text).to_string(),
            sender: Sender::Bot,
            timestamp: now,
        });

        let start = self.messages.len() - 2;
        &self.messages[start..]
    }
}
