//! Leptos UI components for the About page.
//!
//! # Component Hierarchy
//!
//! ```text
//! AboutDocument (html shell, inline stylesheet)
//! └── AboutPage
//!     ├── intro header (entrance animation)
//!     ├── FeatureGrid
//!     │   └── FeatureCard x3 (hover lift)
//!     └── VisionPanel (delayed entrance)
//!         └── StatBlock x2
//! ```
//!
//! Components only emit class names; styling is resolved later by
//! [`crate::styles`].

mod about;
mod document;
mod features;
mod icons;
mod vision;

pub use about::AboutPage;
pub use document::AboutDocument;
pub use features::FeatureGrid;
pub use icons::*;
pub use vision::VisionPanel;
