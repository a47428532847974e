use chrono::NaiveDate;
use leptos::{html::Input, prelude::*};

use crate::{
    boundary::SectionError,
    data::{projects_matching, Project, ProjectCategory, PROJECTS},
};

/// Fails the whole section if any project carries an unreadable date.
pub fn projects_panel() -> Result<AnyView, SectionError> {
    for project in PROJECTS {
        project.started()?;
    }
    Ok(view! { <Projects /> }.into_any())
}

#[component]
fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(None::<ProjectCategory>);
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let filter_button = move |category: Option<ProjectCategory>| {
        let label = category.map_or("All", |c| c.label());
        view! {
            <button
                class="px-3 py-1 rounded-full text-xs border transition-colors"
                class=("bg-purple-600", move || filter.get() == category)
                class=("border-purple-500", move || filter.get() == category)
                class=("border-white/20", move || filter.get() != category)
                on:click=move |_| set_filter(category)
            >
                {label}
            </button>
        }
    };

    view! {
        <h2 class="text-2xl font-bold mb-4">
            <span class="text-purple">"# "</span>
            "Projects"
        </h2>
        <div class="flex flex-wrap items-center gap-2 mb-4">
            {filter_button(None)}
            {ProjectCategory::ALL
                .into_iter()
                .map(|c| filter_button(Some(c)))
                .collect_view()}
            <form
                class="ml-auto"
                on:submit=move |ev| {
                    ev.prevent_default();
                }
            >
                <input
                    node_ref=input_ref
                    type="search"
                    placeholder="grep projects..."
                    class="px-3 py-1 rounded-md border border-white/20 bg-background/60 text-sm focus:outline-none focus:ring-2 focus:ring-purple"
                    on:input=move |_| {
                        if let Some(el) = input_ref.get_untracked() {
                            set_search(el.value());
                        }
                    }
                />
            </form>
        </div>
        <div class="grid md:grid-cols-2 gap-4">
            {move || {
                let matches = search.with(|q| projects_matching(filter.get(), q));
                if matches.is_empty() {
                    view! { <p class="text-muted">"No projects match."</p> }.into_any()
                } else {
                    matches
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let date = project
        .started()
        .map(|d: NaiveDate| d.format("%b %Y").to_string())
        .unwrap_or_default();
    view! {
        <article
            class="rounded-xl bg-white/5 border border-white/10 p-4 hover:border-purple-500/40 transition-colors"
            class=("ring-1", project.featured)
            class=("ring-purple-500/40", project.featured)
        >
            <header class="flex justify-between items-start gap-2 mb-2">
                <h3 class="font-semibold">{project.title}</h3>
                <span class="text-xs text-muted whitespace-nowrap">{date}</span>
            </header>
            <p class="text-xs text-cyan mb-2">
                {project.category.label()}
                {project.duration.map(|d| format!(" · {d}"))}
            </p>
            <p class="text-sm mb-3">{project.description}</p>
            <ul class="text-xs text-muted list-disc list-inside space-y-1 mb-3">
                {project.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-1">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! { <span class="px-2 py-0.5 rounded bg-white/10 text-xs">{*t}</span> }
                    })
                    .collect_view()}
            </div>
            {project
                .code_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noreferrer"
                            class="inline-block mt-3 text-sm text-purple hover:underline"
                        >
                            "View code →"
                        </a>
                    }
                })}
        </article>
    }
}
