use chrono::Utc;
use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::SectionNav;
use crate::{
    data::{featured_projects, PROFILE},
    sections::Section,
    typewriter::{is_complete, typed_sequence, visible_lines, HERO_SCRIPT, HERO_TITLE},
};

const TICK_MS: u64 = 30;

const SPECIALTIES: [&str; 4] = ["ML", "Data Science", "NLP", "Analytics"];

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<SectionNav>();
    let mounted_at = Utc::now();
    let elapsed = RwSignal::new(0u32);

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let ms = (Utc::now() - mounted_at).num_milliseconds().max(0);
            elapsed.set(u32::try_from(ms).unwrap_or(u32::MAX));
        },
        TICK_MS,
    );
    Effect::new(move |_| {
        let ms = elapsed.get();
        if is_complete(HERO_SCRIPT, ms) && typed_sequence(HERO_TITLE, ms).1 {
            pause();
        }
    });

    let title = Memo::new(move |_| typed_sequence(HERO_TITLE, elapsed.get()));
    let typed = move |i: usize| title.with(|(shown, _)| shown.get(i).copied().unwrap_or_default());
    let typing = move |i: usize| {
        title.with(|(shown, done)| shown.len() == i + 1 && !done)
    };
    let done = move || title.with(|(_, done)| *done);

    view! {
        <section class="w-full max-w-6xl mx-auto px-4 pt-28 md:pt-32 grid lg:grid-cols-2 gap-10 items-center">
            <div>
                <span class="inline-block mb-4 px-3 py-1 rounded-full border border-purple-500/40 text-purple text-xs">
                    {move || typed(0)}
                </span>
                <h1 class="text-2xl md:text-3xl lg:text-4xl font-bold mb-3">
                    <span class="block text-foreground mb-2">
                        {move || typed(1)} {move || typing(1).then_some(view! { <Cursor /> })}
                    </span>
                    <span class="block text-purple">{move || typed(2)}</span>
                </h1>
                <div class="flex flex-wrap items-center gap-2 mb-4 text-sm">
                    <span class="text-purple mr-2">{move || typed(3)}</span>
                    {move || {
                        (title.with(|(shown, _)| shown.len()) > 4)
                            .then(|| {
                                SPECIALTIES
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <span class="px-2 py-0.5 rounded bg-white/10 text-cyan">
                                                {*s}
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </div>
                <p class="text-muted leading-relaxed mb-6 min-h-[3rem]">
                    {move || typed(4)} {move || typing(4).then_some(view! { <Cursor /> })}
                </p>
                <div class="flex gap-4" class:invisible=move || !done()>
                    <button
                        class="px-5 py-2 rounded-md bg-purple-600 hover:bg-purple-500 transition-colors"
                        on:click=move |_| nav.jump(Section::Projects)
                    >
                        "View Projects"
                    </button>
                    <button
                        class="px-5 py-2 rounded-md border border-white/30 hover:bg-white/10 transition-colors"
                        on:click=move |_| nav.jump(Section::Contact)
                    >
                        "Contact Me"
                    </button>
                </div>
                <p class="mt-4 text-xs text-muted" class:invisible=move || !done()>
                    <span class="text-cyan">"featured: "</span>
                    {featured_projects().map(|p| p.title).collect::<Vec<_>>().join(" · ")}
                </p>
            </div>
            <div class="terminal rounded-xl border border-white/15 bg-black/60 backdrop-blur-md shadow-2xl overflow-hidden">
                <div class="flex items-center gap-2 px-4 py-2 bg-white/5 border-b border-white/10">
                    <span class="w-3 h-3 rounded-full bg-red-500" />
                    <span class="w-3 h-3 rounded-full bg-yellow-500" />
                    <span class="w-3 h-3 rounded-full bg-green-500" />
                    <span class="ml-2 text-xs text-muted">
                        {format!("{}@portfolio", PROFILE.name.split_whitespace().next().unwrap_or("user").to_lowercase())}
                    </span>
                </div>
                <pre class="p-4 text-sm leading-6 min-h-[18rem] whitespace-pre-wrap">
                    {move || {
                        let ms = elapsed.get();
                        let lines = visible_lines(HERO_SCRIPT, ms);
                        let complete = lines.len() == HERO_SCRIPT.len();
                        view! {
                            {lines
                                .iter()
                                .map(|line| {
                                    view! { <div class=line.kind.class()>{line.text}</div> }
                                })
                                .collect_view()}
                            {(!complete).then_some(view! { <Cursor /> })}
                        }
                    }}
                </pre>
            </div>
        </section>
    }
}

#[component]
fn Cursor() -> impl IntoView {
    view! { <span class="cursor animate-blink">"_"</span> }
}
