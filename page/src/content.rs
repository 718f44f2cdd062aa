//! Compiled-in copy for the About page.
//!
//! Everything the page displays lives here as `const` data. Array order is
//! display order; nothing is looked up by key.

use crate::components::Glyph;

/// Route the page is mounted at.
pub const ROUTE: &str = "/about";

/// Brand name used in the document title and image alt text.
pub const BRAND: &str = "Void Rose";

/// One marketing bullet in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    /// Glyph shown inside the rounded icon box
    pub icon: Glyph,
    /// Short label, rendered uppercase
    pub title: &'static str,
    /// One sentence of copy
    pub description: &'static str,
}

/// A headline number in the vision panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCounter {
    /// Display string, e.g. `10K+`
    pub value: &'static str,
    /// Category label under the value
    pub label: &'static str,
}

/// Feature grid entries, display order.
pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        icon: Glyph::Shield,
        title: "Fair Play",
        description: "Our anti-cheat stack watches every ranked match, so the leaderboard reflects skill and nothing else.",
    },
    FeatureEntry {
        icon: Glyph::Lightning,
        title: "Instant Matches",
        description: "Low-latency servers and smart matchmaking drop you into a lobby with rivals at your level in seconds.",
    },
    FeatureEntry {
        icon: Glyph::Trophy,
        title: "Real Rewards",
        description: "Climb the ladder, win weekly tournaments and take home prizes that match the hours you put in.",
    },
];

/// Vision panel counters, display order.
pub const STATS: [StatCounter; 2] = [
    StatCounter {
        value: "10K+",
        label: "Players",
    },
    StatCounter {
        value: "500+",
        label: "Tournaments",
    },
];

/// Paragraph under the main heading.
pub const HERO_COPY: &str = "Void Rose is where competitive players find their edge. \
We build the arenas, run the tournaments and back the community that turns late-night grinding into a career.";

/// Mission paragraph in the vision panel.
pub const VISION_COPY: &str = "We believe esports should be open to everyone with the drive to compete \u{2014} \
no gatekeepers, no pay-to-win, just skill. Our mission is to build the fairest competitive ecosystem in gaming, \
from the first ranked match to the world stage.";

/// The single external asset. Loaded by reference; a dead link shows the
/// browser's broken-image state.
pub const VISION_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1542751371-adc38448a05e?auto=format&fit=crop&w=1200&q=80";

/// Alt text for [`VISION_IMAGE_URL`].
pub const VISION_IMAGE_ALT: &str = "Players competing on stage at a Void Rose tournament";
