/// Toast shown to the visitor after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            title: "Message sent!".to_string(),
            description: "Thank you for your message. We'll get back to you soon.".to_string(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: "There was a problem sending your message. Please try again."
                .to_string(),
            variant: NotificationVariant::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.variant == NotificationVariant::Success
    }
}
