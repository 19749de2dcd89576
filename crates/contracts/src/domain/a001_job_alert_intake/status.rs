/// Submission status of the intake form.
///
/// The outcome tag travels with the message so the view never has to guess
/// success or failure from the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// Visual tone of the inline status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageTone::Success => "message message--success",
            MessageTone::Error => "message message--error",
        }
    }
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(m) | SubmissionStatus::Failed(m) => Some(m.as_str()),
            SubmissionStatus::Idle | SubmissionStatus::InFlight => None,
        }
    }

    pub fn tone(&self) -> Option<MessageTone> {
        match self {
            SubmissionStatus::Succeeded(_) => Some(MessageTone::Success),
            SubmissionStatus::Failed(_) => Some(MessageTone::Error),
            SubmissionStatus::Idle | SubmissionStatus::InFlight => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::InFlight => "in_flight",
            SubmissionStatus::Succeeded(_) => "succeeded",
            SubmissionStatus::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_follows_tag_not_text() {
        // A success message mentioning "error" is still a success.
        let ok = SubmissionStatus::Succeeded("No error, you are on the list".into());
        assert_eq!(ok.tone(), Some(MessageTone::Success));
        assert_eq!(ok.tone().map(|t| t.css_class()), Some("message message--success"));

        let failed = SubmissionStatus::Failed("bad file".into());
        assert_eq!(failed.tone(), Some(MessageTone::Error));
        assert_eq!(failed.message(), Some("bad file"));
    }

    #[test]
    fn test_idle_and_in_flight_have_no_message() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(SubmissionStatus::Idle.message().is_none());
        assert!(SubmissionStatus::InFlight.tone().is_none());
        assert!(SubmissionStatus::InFlight.is_in_flight());
    }
}
