use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    boundary::SectionError,
    data::{EXPERIENCE, PROFILE, STATISTICS},
    motion::Animation,
};

pub fn about_panel() -> Result<AnyView, SectionError> {
    Ok(view! { <About /> }.into_any())
}

#[component]
fn About() -> impl IntoView {
    view! {
        <div class="grid lg:grid-cols-5 gap-8">
            <div class="lg:col-span-2">
                <h2 class="text-2xl font-bold mb-4">
                    <span class="text-purple">"# "</span>
                    "About Me"
                </h2>
                <p class="text-base mb-4 leading-relaxed">
                    "I'm " <strong>{PROFILE.name}</strong> ", a " {PROFILE.title}
                    " based in " {PROFILE.location}
                    ". I turn messy, real-world data into models and insights people can act on."
                </p>
                <p class="text-base mb-6 leading-relaxed text-muted">
                    "My work spans classical machine learning, NLP and graph-based analytics, from data wrangling and feature engineering to evaluation and deployment."
                </p>
                <div class="grid grid-cols-3 gap-3">
                    {STATISTICS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <Reveal animation=Animation::Scale delay=(i as u32) * 100>
                                    <div class="rounded-xl bg-white/5 border border-white/10 p-3 text-center">
                                        <div class="text-2xl font-bold text-cyan">
                                            {format!("{}+", stat.value)}
                                        </div>
                                        <div class="text-xs text-muted">{stat.label}</div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="lg:col-span-3">
                <h3 class="text-xl font-bold mb-4">"Education"</h3>
                <ol class="relative border-l border-purple-500/30 ml-2">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <li class="mb-6 ml-4">
                                    <Reveal animation=Animation::SlideLeft delay=(i as u32) * 150>
                                        <div class="absolute w-3 h-3 bg-purple-500 rounded-full -left-1.5 mt-1.5" />
                                        <time class="text-xs text-muted">
                                            {format!("{} - {}", exp.start, exp.end)}
                                        </time>
                                        <h4 class="font-semibold">{exp.title}</h4>
                                        <p class="text-sm text-cyan">
                                            {format!("{}, {}", exp.organization, exp.location)}
                                        </p>
                                        <p class="text-sm mt-1">{exp.description}</p>
                                        <ul class="text-sm mt-2 space-y-1 list-disc list-inside text-muted">
                                            {exp
                                                .highlights
                                                .iter()
                                                .map(|h| view! { <li>{*h}</li> })
                                                .collect_view()}
                                        </ul>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}
