mod button;
mod icons;
mod loader;
mod nav;
mod pin_track;
mod reveal_text;
mod sticky_cta;

pub use button::{Button, ButtonVariant};
pub use icons::{IconArrowRight, IconClose, IconMessage, IconPlus, IconQuote, SocialIcon};
pub use loader::{Loader, LoaderFallback};
pub use nav::Nav;
pub use pin_track::PinTrack;
pub use reveal_text::{split_words, RevealText};
pub use sticky_cta::StickyCta;
