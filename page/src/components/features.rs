use super::Icon;
use crate::content::{FEATURES, FeatureEntry};
use crate::motion::LIFT;
use leptos::prelude::*;

/// Three-up grid of feature cards, one column on narrow screens.
#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto mb-20 relative z-10">
            {FEATURES
                .iter()
                .map(|entry| view! { <FeatureCard entry=*entry /> })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// The card is a `group` so its icon tile brightens while the card is hovered.
#[component]
fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    let class = format!(
        "{} group bg-voidDark p-8 rounded-2xl border border-white/5 hover:border-rosePink/30",
        LIFT.class
    );
    view! {
        <article class=class>
            <div class="w-14 h-14 bg-rosePink/10 group-hover:bg-rosePink/20 transition-colors text-rosePink rounded-xl flex items-center justify-center mb-6">
                <Icon path=entry.icon.path() size="28" />
            </div>
            <h3 class="font-gaming text-xl mb-4 uppercase tracking-wider">{entry.title}</h3>
            <p class="text-gray-400 leading-relaxed">{entry.description}</p>
        </article>
    }
}
