use leptos::{either::Either, ev, prelude::*};

use crate::boundary::{Boundary, SectionError, FALLBACK_TITLE, RETRY_LABEL};

/// Renders `render`, or a fallback panel when it fails. Only this section is
/// replaced; "Try Again" re-runs `render` and nothing else.
#[component]
pub fn SectionBoundary(
    name: &'static str,
    render: fn() -> Result<AnyView, SectionError>,
    /// Replaces the default fallback panel.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
) -> impl IntoView {
    let boundary = RwSignal::new(Boundary::new(name));
    let attempts = Memo::new(move |_| boundary.with(|b| b.attempts()));
    let retry = move |_: ev::MouseEvent| {
        boundary.update(|b| {
            b.retry();
        });
    };

    move || {
        attempts.track();
        let result = render();
        let failed_now = boundary
            .try_update_untracked(|b| b.observe(&result))
            .unwrap_or(false);
        match result {
            Ok(view) => Either::Left(view),
            Err(e) => {
                if failed_now {
                    log::error!("section {name} failed to render: {e}");
                }
                let fallback = fallback.clone();
                Either::Right(match fallback {
                    Some(f) => Either::Left(f.run()),
                    None => Either::Right(view! {
                        <div class="flex flex-col items-center justify-center h-full text-center gap-4 p-8">
                            <h3 class="text-xl font-bold text-red">{FALLBACK_TITLE}</h3>
                            <p class="text-muted">
                                {boundary.with_untracked(|b| b.fallback_message())}
                            </p>
                            <button
                                class="px-4 py-2 rounded-md border border-purple-500/40 hover:bg-purple-500/20 transition-colors"
                                on:click=retry
                            >
                                {RETRY_LABEL}
                            </button>
                        </div>
                    }),
                })
            }
        }
    }
}
