use crate::content::{STATS, StatCounter, VISION_COPY, VISION_IMAGE_ALT, VISION_IMAGE_URL};
use crate::motion::ENTRANCE_LATE;
use leptos::prelude::*;

/// Mission copy and stats next to the hero image. Stacks on narrow screens.
#[component]
pub fn VisionPanel() -> impl IntoView {
    let class = format!(
        "{} max-w-6xl mx-auto bg-voidDark rounded-3xl border border-white/5 overflow-hidden relative z-10",
        ENTRANCE_LATE.class
    );
    view! {
        <section id="vision" class=class>
            <div class="grid grid-cols-1 md:grid-cols-2 items-center">
                <div class="p-8 md:p-12">
                    <h2 class="font-gaming text-3xl md:text-4xl font-bold mb-6">
                        "OUR "
                        <span class="text-rosePink">"VISION"</span>
                    </h2>
                    <p class="text-gray-400 text-lg leading-relaxed mb-8">{VISION_COPY}</p>
                    <div class="flex items-center gap-8">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(idx, stat)| {
                                view! {
                                    {(idx > 0)
                                        .then(|| {
                                            view! {
                                                <div class="w-px h-12 bg-white/10" aria-hidden="true"></div>
                                            }
                                        })}
                                    <StatBlock stat=*stat />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="relative h-64 md:h-full min-h-[320px] animate-pulse-evil">
                    <img
                        src=VISION_IMAGE_URL
                        alt=VISION_IMAGE_ALT
                        loading="lazy"
                        class="absolute inset-0 w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-700"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatBlock(stat: StatCounter) -> impl IntoView {
    view! {
        <div class="text-left">
            <div class="font-gaming text-3xl font-bold text-roseGlow">{stat.value}</div>
            <div class="text-sm text-gray-500 uppercase tracking-widest">{stat.label}</div>
        </div>
    }
}
