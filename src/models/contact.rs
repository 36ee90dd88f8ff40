use serde::{Deserialize, Serialize};

const WHATSAPP_URL: &str = "https://wa.me/";

/// A WhatsApp deep link with `message` pre-filled.
pub fn whatsapp_link(message: &str) -> String {
    format!("{WHATSAPP_URL}?text={}", urlencoding::encode(message))
}

/// Pre-filled text for each call to action on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessages {
    pub nav: String,
    pub sticky: String,
    pub offer: String,
    pub final_cta: String,
    pub footer: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            nav: "I want to join WAR GYM".into(),
            sticky: "Tell me more about WAR GYM".into(),
            offer: "I want the 7-Day WAR Pass".into(),
            final_cta: "Im ready to join WAR GYM".into(),
            footer: "Hello".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_message_into_query() {
        assert_eq!(
            whatsapp_link("I want to join WAR GYM"),
            "https://wa.me/?text=I%20want%20to%20join%20WAR%20GYM"
        );
        assert_eq!(
            whatsapp_link("I want the 7-Day WAR Pass"),
            "https://wa.me/?text=I%20want%20the%207-Day%20WAR%20Pass"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(whatsapp_link("a&b=c?"), "https://wa.me/?text=a%26b%3Dc%3F");
    }
}
