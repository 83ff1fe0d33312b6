use chrono::{TimeZone, Utc};
use visitor_portal::{
    chatbot::{self, ChatTranscript, respond},
    models::Sender,
};

#[cfg(test)]
mod responder_tests {
    use super::*;

    #[test]
    fn test_login_question() {
        assert_eq!(respond("I want to login"), chatbot::LOGIN_REPLY);
        assert_eq!(respond("How do I SIGN IN?"), chatbot::LOGIN_REPLY);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(respond("hello"), chatbot::HELLO_REPLY);
        assert_eq!(respond("Hey there"), chatbot::HELLO_REPLY);
    }

    #[test]
    fn test_unmatched_text_falls_back() {
        assert_eq!(respond("xyz"), chatbot::FALLBACK_REPLY);
        assert_eq!(respond(""), chatbot::FALLBACK_REPLY);
    }

    #[test]
    fn test_earlier_rule_wins_on_overlap() {
        // Mentions both login and feedback.
        assert_eq!(
            respond("Can I leave feedback after login?"),
            chatbot::LOGIN_REPLY
        );
        // "dashboard" (admin rule) precedes "visitor".
        assert_eq!(respond("visitor dashboard"), chatbot::ADMIN_REPLY);
    }

    #[test]
    fn test_triggers_match_inside_words() {
        // "this" contains "hi" and nothing earlier matches.
        assert_eq!(respond("what is this"), chatbot::HELLO_REPLY);
        // "provide" contains "id" which precedes "hi".
        assert_eq!(respond("provide"), chatbot::BADGE_REPLY);
    }

    #[test]
    fn test_each_topic() {
        assert_eq!(respond("how to register"), chatbot::SIGNUP_REPLY);
        assert_eq!(respond("feedback?"), chatbot::FEEDBACK_REPLY);
        assert_eq!(respond("check-in process"), chatbot::CHECKIN_REPLY);
        assert_eq!(respond("blacklist"), chatbot::BLACKLIST_REPLY);
        assert_eq!(respond("support"), chatbot::HELP_REPLY);
    }
}

#[cfg(test)]
mod transcript_tests {
    use super::*;

    #[test]
    fn test_new_transcript_opens_with_greeting() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        let transcript = ChatTranscript::new(now);

        let messages = transcript.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, chatbot::GREETING);
    }

    #[test]
    fn test_submit_appends_user_and_bot_messages() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        let mut transcript = ChatTranscript::new(now);

        let added = transcript.submit("hello", now).to_vec();
        assert_eq!(added.len(), 2);
        assert_eq!((added[0].id, added[0].sender), (2, Sender::User));
        assert_eq!(added[0].text, "hello");
        assert_eq!((added[1].id, added[1].sender), (3, Sender::Bot));
        assert_eq!(added[1].text, chatbot::HELLO_REPLY);

        transcript.submit("xyz", now);
        let ids: Vec<u32> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();
        let mut transcript = ChatTranscript::new(now);

        assert!(transcript.submit("   ", now).is_empty());
        assert_eq!(transcript.messages().len(), 1);
    }
}
