//! Static page copy.

use serde::Serialize;

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=1470&auto=format&fit=crop";

/// A full-screen scene of the facility tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub image: &'static str,
    pub alt: &'static str,
}

pub const TOUR_SCENES: [Scene; 4] = [
    Scene {
        image: "https://images.unsplash.com/photo-1599058945522-28d584b6f0ff?q=80&w=1600&auto=format&fit=crop",
        alt: "Gym Entry",
    },
    Scene {
        image: "https://images.unsplash.com/photo-1637666062717-1c6bcfa4a4df?q=80&w=1600&auto=format&fit=crop",
        alt: "Equipment Details",
    },
    Scene {
        image: "https://images.unsplash.com/photo-1517964603305-11c0f6f66012?q=80&w=1600&auto=format&fit=crop",
        alt: "Performance Zone",
    },
    Scene {
        image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=1600&auto=format&fit=crop",
        alt: "Atmosphere",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Case {
    pub name: &'static str,
    pub result: &'static str,
    pub stats: &'static str,
    pub time: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

pub const CASES: [Case; 3] = [
    Case {
        name: "MIKE T.",
        result: "REBUILT",
        stats: "-24 LBS",
        time: "12 WEEKS",
        quote: "I didn't just lose weight. I found a new purpose. The discipline I learned here saved my marriage and my career.",
        image: "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?q=80&w=1200&auto=format&fit=crop",
    },
    Case {
        name: "SARAH J.",
        result: "WEAPONIZED",
        stats: "-14% BF",
        time: "16 WEEKS",
        quote: "They told me I couldn't lift heavy. WAR GYM proved them wrong. Stronger at 35 than I was at 20.",
        image: "https://images.unsplash.com/photo-1594381898411-846e7d193883?q=80&w=1200&auto=format&fit=crop",
    },
    Case {
        name: "DAVID B.",
        result: "ARMORED",
        stats: "+18 LBS",
        time: "20 WEEKS",
        quote: "Weakness is a choice. I chose to kill it. This isn't just a gym, it's a forge.",
        image: "https://images.unsplash.com/photo-1611672585731-fa1060a80930?q=80&w=1200&auto=format&fit=crop",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        num: "01",
        title: "Claim Offer",
        text: "Click the button to secure your 7-Day pass via WhatsApp. Our team will book your slot instantly.",
    },
    Step {
        num: "02",
        title: "The Assessment",
        text: "Meet with a lead coach. We analyze your body composition and define your 90-day goals.",
    },
    Step {
        num: "03",
        title: "Execute",
        text: "Start training with a structured plan. No guessing. Just showing up and doing the work.",
    },
];

pub const OFFER_FEATURES: [&str; 4] = [
    "7 Days Unlimited",
    "Full Facility Access",
    "No Commitment",
    "Coach Intro",
];

/// Bar heights, in percent, of the decorative barcode on the pass card.
pub const BARCODE: [u8; 12] = [62, 100, 35, 80, 48, 91, 27, 70, 100, 55, 38, 84];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Social {
    Instagram,
    Facebook,
    TikTok,
    YouTube,
    X,
    WhatsApp,
}

impl Social {
    pub fn label(self) -> &'static str {
        match self {
            Social::Instagram => "Instagram",
            Social::Facebook => "Facebook",
            Social::TikTok => "TikTok",
            Social::YouTube => "YouTube",
            Social::X => "X (Twitter)",
            Social::WhatsApp => "WhatsApp",
        }
    }

    /// Whether the link opens a conversation rather than a profile page.
    pub fn is_contact(self) -> bool {
        matches!(self, Social::WhatsApp)
    }
}

pub const SOCIALS: [Social; 6] = [
    Social::Instagram,
    Social::Facebook,
    Social::TikTok,
    Social::YouTube,
    Social::X,
    Social::WhatsApp,
];
