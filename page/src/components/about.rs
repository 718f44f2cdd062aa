use super::{FeatureGrid, VisionPanel};
use crate::content::HERO_COPY;
use crate::motion::ENTRANCE;
use leptos::prelude::*;

/// The `/about` view. Takes no props; all copy is compiled in.
#[component]
pub fn AboutPage() -> impl IntoView {
    let intro_class = format!(
        "{} max-w-4xl mx-auto text-center mb-20 relative z-10",
        ENTRANCE.class
    );
    view! {
        <div class="min-h-screen bg-voidBlack text-white font-body pt-24 pb-12 px-6 relative overflow-hidden">
            // Background glow, decoration only
            <div
                class="absolute top-0 left-1/2 -translate-x-1/2 w-[600px] h-[600px] bg-rosePink/10 blur-[120px] rounded-full pointer-events-none"
                aria-hidden="true"
            ></div>

            <header class=intro_class>
                <h1 class="font-gaming text-5xl md:text-7xl font-bold mb-6">
                    <span>"BEYOND"</span>
                    " "
                    <span class="text-rosePink">"GAMING"</span>
                </h1>
                <p class="text-xl text-gray-400 leading-relaxed">{HERO_COPY}</p>
            </header>

            <FeatureGrid />
            <VisionPanel />
        </div>
    }
}
