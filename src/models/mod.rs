pub mod contact;
pub mod content;
pub mod faq;
pub mod scroll;

pub use contact::{whatsapp_link, ContactMessages};
pub use faq::{FaqEntry, FaqState, FAQS};
pub use scroll::{ScrollFlags, ScrollThresholds};
