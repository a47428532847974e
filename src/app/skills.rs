use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    boundary::SectionError,
    data::{skills_by_category, Skill, SkillCategory},
    motion::Animation,
};

/// Fails the whole section if any skill is out of range.
pub fn skills_panel() -> Result<AnyView, SectionError> {
    let groups = skills_by_category()
        .into_iter()
        .map(|(category, skills)| -> Result<_, SectionError> {
            let skills = skills
                .into_iter()
                .map(|s| s.checked().copied())
                .collect::<Result<Vec<_>, _>>()?;
            Ok((category, skills))
        })
        .collect::<Result<Vec<_>, SectionError>>()?;
    Ok(view! { <Skills groups /> }.into_any())
}

#[component]
fn Skills(groups: Vec<(SkillCategory, Vec<Skill>)>) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-bold mb-6">
            <span class="text-purple">"# "</span>
            "Skills"
        </h2>
        <div class="grid md:grid-cols-2 gap-6">
            {groups
                .into_iter()
                .enumerate()
                .map(|(i, (category, skills))| {
                    view! {
                        <Reveal animation=Animation::SlideUp delay=(i as u32 % 2) * 100>
                            <div class="rounded-xl bg-white/5 border border-white/10 p-4">
                                <h3
                                    class="font-semibold mb-3"
                                    style=format!("color: {};", category.color())
                                >
                                    {category.label()}
                                </h3>
                                <ul class="space-y-2">
                                    {skills
                                        .into_iter()
                                        .map(|skill| view! { <SkillBar skill color=category.color() /> })
                                        .collect_view()}
                                </ul>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillBar(skill: Skill, color: &'static str) -> impl IntoView {
    view! {
        <li>
            <div class="flex justify-between text-sm mb-1">
                <span>{skill.name}</span>
                <span class="text-muted">{format!("{}%", skill.proficiency)}</span>
            </div>
            <div class="h-1.5 rounded-full bg-white/10 overflow-hidden">
                <div
                    class="h-full rounded-full"
                    style=format!("width: {}%; background-color: {};", skill.proficiency, color)
                />
            </div>
        </li>
    }
}
