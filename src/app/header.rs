use leptos::{ev::KeyboardEvent, html, prelude::*};

use super::SectionNav;
use crate::{
    prompt::{self, History, PromptRes},
    sections::Section,
};

#[derive(Debug, Clone)]
struct Entry {
    was_err: bool,
    dir: String,
    cmd: String,
    output: Option<String>,
}

fn dir_for(section: Section) -> String {
    match section {
        Section::Hero => "~".to_string(),
        s => format!("~/{}", s.slug()),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<SectionNav>();
    let input_ref = NodeRef::<html::Input>::new();
    let history = StoredValue::new(History::default());
    let (entries, set_entries) = signal(Vec::<Entry>::new());
    let (is_err, set_is_err) = signal(false);

    let handle_cmd = move |cmd: String, force_err: bool| {
        let current = nav.active.get_untracked();
        history.update_value(|h| h.push(&cmd));

        if cmd.trim() == "clear" {
            set_entries.update(|e| e.clear());
            set_is_err(false);
            return;
        }

        if force_err {
            // user used Ctrl+C
            set_entries.update(|e| {
                e.push(Entry {
                    was_err: is_err.get_untracked(),
                    dir: dir_for(current),
                    cmd,
                    output: None,
                })
            });
            set_is_err(true);
            return;
        }

        let res = prompt::run(&cmd, current);
        let (err, output) = match res {
            PromptRes::EmptyErr => (true, None),
            PromptRes::Err(s) => (true, Some(s)),
            PromptRes::Jump(section) => {
                nav.jump(section);
                (false, None)
            }
            PromptRes::Output(s) => (false, Some(s)),
            PromptRes::Nothing => (false, None),
        };
        set_entries.update(|e| {
            e.push(Entry {
                was_err: is_err.get_untracked(),
                dir: dir_for(current),
                cmd,
                output,
            })
        });
        set_is_err(err);
    };

    let keydown_handler = move |ev: KeyboardEvent| {
        let Some(el) = input_ref.get_untracked() else {
            set_is_err(true);
            return;
        };
        if ev.ctrl_key() && ev.key() == "c" {
            handle_cmd(el.value(), true);
            el.set_value("");
            history.update_value(|h| h.reset());
            return;
        }
        if ev.ctrl_key() && ev.key() == "l" {
            handle_cmd("clear".to_string(), false);
            el.set_value("");
            return;
        }
        if ev.meta_key() || ev.alt_key() || ev.ctrl_key() {
            return;
        }
        match ev.key().as_ref() {
            "ArrowUp" => {
                ev.prevent_default();
                let prev = history
                    .try_update_value(|h| h.prev().map(str::to_string))
                    .flatten();
                if let Some(line) = prev {
                    el.set_value(&line);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let next = history
                    .try_update_value(|h| h.next().map(str::to_string))
                    .flatten();
                el.set_value(next.as_deref().unwrap_or_default());
            }
            _ => {}
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-background/70 backdrop-blur-md shadow-lg">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-3">
                {move || {
                    let entries = entries.get();
                    if entries.is_empty() {
                        None
                    } else {
                        Some(
                            view! {
                                <div class="flex flex-col-reverse max-h-[240px] overflow-y-auto mb-2 p-2 rounded-md">
                                    <pre class="whitespace-pre-wrap">
                                        {entries
                                            .into_iter()
                                            .map(|entry| {
                                                view! {
                                                    <div>
                                                        <Ps1 is_err=entry.was_err path=entry.dir />
                                                        " "
                                                        {entry.cmd}
                                                    </div>
                                                    {entry.output.map(|o| view! { <div>{o}</div> })}
                                                }
                                            })
                                            .collect_view()}
                                    </pre>
                                </div>
                            },
                        )
                    }
                }} <div class="flex flex-wrap items-center justify-between">
                    <div class="text-lg md:text-xl font-bold mr-4">
                        {move || {
                            view! {
                                <Ps1 is_err=is_err.get() path=dir_for(nav.active.get()) />
                            }
                        }}
                    </div>
                    <form
                        class="flex-1 min-w-64"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(el) = input_ref.get_untracked() else {
                                set_is_err(true);
                                return;
                            };
                            handle_cmd(el.value(), false);
                            el.set_value("");
                        }
                    >
                        <input
                            node_ref=input_ref
                            on:keydown=keydown_handler
                            type="text"
                            placeholder="Type a command (try 'help')"
                            autocapitalize="none"
                            class="w-full px-4 py-2 rounded-md border border-white/20 focus:outline-none focus:ring-2 focus:ring-purple bg-background/60 text-foreground"
                        />
                    </form>
                    <nav class="hidden md:flex gap-4 ml-4 text-sm">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class=move || {
                                            if nav.active.get() == section {
                                                "text-purple"
                                            } else {
                                                "text-muted hover:text-foreground"
                                            }
                                        }
                                        on:click=move |_| nav.jump(section)
                                    >
                                        {section.title()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Ps1(is_err: bool, path: String) -> impl IntoView {
    view! {
        <span class=if is_err { "text-red" } else { "text-green" }>"➜"</span>
        " "
        <span class="text-cyan">{path}</span>
        " "
        <span class="text-blue">
            <span>"git:("</span>
            <span class="text-red">"main"</span>
            <span>")"</span>
        </span>
        ""
        <span class="text-yellow">"✗"</span>
    }
}
