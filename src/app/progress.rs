use leptos::prelude::*;

use crate::sections::Section;

const RING_SIZE: f64 = 48.0;
const RING_STROKE: f64 = 4.0;

#[component]
pub fn ScrollProgressBar(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let radius = (RING_SIZE - RING_STROKE) / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    view! {
        <div
            class="fixed top-0 inset-x-0 h-1 z-50 origin-left bg-gradient-to-r from-purple-500 to-cyan-400"
            style=move || format!("transform: scaleX({:.4});", progress.get())
        />
        <div class="fixed bottom-8 right-8 z-50 hidden md:flex items-center justify-center">
            <svg
                width=RING_SIZE
                height=RING_SIZE
                viewBox=format!("0 0 {RING_SIZE} {RING_SIZE}")
                class="rotate-[-90deg]"
            >
                <circle
                    cx=RING_SIZE / 2.0
                    cy=RING_SIZE / 2.0
                    r=radius
                    fill="none"
                    stroke-width=RING_STROKE
                    class="stroke-white/10"
                />
                <circle
                    cx=RING_SIZE / 2.0
                    cy=RING_SIZE / 2.0
                    r=radius
                    fill="none"
                    stroke-width=RING_STROKE
                    stroke-linecap="round"
                    class="stroke-purple-500"
                    stroke-dasharray=circumference
                    stroke-dashoffset=move || circumference * (1.0 - progress.get())
                />
            </svg>
            <span class="absolute text-xs font-semibold">
                {move || format!("{:.0}%", progress.get() * 100.0)}
            </span>
        </div>
    }
}

/// Hint shown while the hero is up.
#[component]
pub fn ScrollIndicator(#[prop(into)] section: Signal<Section>) -> impl IntoView {
    let text = move || match section.get().next() {
        Some(next) => format!("Scroll to {}", next.title()),
        None => "Scroll Down".to_string(),
    };
    view! {
        <div class="fixed bottom-8 inset-x-0 z-30 flex flex-col items-center justify-center pointer-events-none">
            <span class="text-sm font-medium text-muted mb-2">{text}</span>
            <div class="w-6 h-10 rounded-full border-2 border-purple-500 flex items-start justify-center p-1 animate-pulse">
                <div class="w-2 h-2 bg-purple-500 rounded-full animate-scroll-dot" />
            </div>
        </div>
    }
}
