use chrono::Utc;
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{
    use_media_query, use_raf_fn, use_timeout_fn, use_window_scroll, use_window_size,
    UseRafFnCallbackArgs, UseTimeoutFnReturn, UseWindowSizeReturn,
};
use wasm_bindgen::JsCast;

use super::{
    about::about_panel,
    boundary::SectionBoundary,
    contact::Contact,
    glass::SectionViewer,
    hero::Hero,
    progress::{ScrollIndicator, ScrollProgressBar},
    projects::projects_panel,
    skills::skills_panel,
    SectionNav,
};
use crate::{
    config::SiteConfig,
    motion::{hero_pose, CardReveal, Pose},
    scroll::{AnchorRect, ScrollFrame, ScrollTween, SectionTracker, SmoothedTracker},
    sections::Section,
    transition::{Direction, TransitionOutcome, TransitionState},
};

/// Frame of slack so the cooldown timer never fires before the cooldown has
/// elapsed on the controller's clock.
const TIMER_SLACK_MS: f64 = 16.0;

fn anchor_rect(section: Section) -> Option<AnchorRect> {
    let el = document()
        .get_element_by_id(section.slug())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(AnchorRect {
        offset_top: el.offset_top() as f64,
        offset_height: el.offset_height() as f64,
    })
}

fn read_frame(scroll_y: f64, viewport_height: f64) -> ScrollFrame {
    let document_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollFrame {
        scroll_y,
        viewport_height,
        document_height,
        anchors: Section::ALL.into_iter().map(anchor_rect).collect(),
    }
}

fn panel(section: Section) -> AnyView {
    match section {
        Section::Hero => {
            view! { <SectionBoundary name="Home" render=|| Ok(view! { <Hero /> }.into_any()) /> }
                .into_any()
        }
        Section::About => view! { <SectionBoundary name="About" render=about_panel /> }.into_any(),
        Section::Skills => {
            view! { <SectionBoundary name="Skills" render=skills_panel /> }.into_any()
        }
        Section::Projects => {
            view! { <SectionBoundary name="Projects" render=projects_panel /> }.into_any()
        }
        Section::Contact => {
            view! {
                <SectionBoundary name="Contact" render=|| Ok(view! { <Contact /> }.into_any()) />
            }
                .into_any()
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let nav = expect_context::<SectionNav>();
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();

    let controller = RwSignal::new(config.controller());
    let tracked = RwSignal::new(0usize);
    let progress = RwSignal::new(0.0);
    let settled = Trigger::new();

    let anchors = config.anchor_tracker();
    let breakpoints = match config.breakpoint_tracker() {
        Ok(b) => Some(b),
        Err(e) => {
            log::error!("ignoring scroll breakpoints: {e}");
            None
        }
    };
    let smoothed = StoredValue::new(
        breakpoints
            .clone()
            .map(|b| SmoothedTracker::new(b, config.progress_spring.spring())),
    );
    let smooth_progress = RwSignal::new(0.0);
    let smooth_section = RwSignal::new(Section::Hero);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let now = Utc::now();
            controller.update(|c| {
                c.settle(now);
            });
            // re-apply whatever the reader scrolled to during the cooldown
            settled.notify();
        },
        config.cooldown_ms as f64 + TIMER_SLACK_MS,
    );
    let start_cooldown = StoredValue::new(start);

    let commit = move |outcome: TransitionOutcome| -> Option<Section> {
        let transition = outcome.started()?;
        start_cooldown.with_value(|start| start(()));
        let section = Section::from_index(transition.to);
        nav.active.set(section);
        log::debug!(
            "section {:?} -> {:?}",
            Section::from_index(transition.from),
            section
        );
        Some(section)
    };

    let tween = StoredValue::new(None::<ScrollTween>);
    let smooth_scroll_ms = config.smooth_scroll_ms;
    let scroll_offset = config.scroll_offset;
    let scroll_to = move |section: Section| {
        let target = match section {
            Section::Hero => 0.0,
            s => anchor_rect(s).map_or(0.0, |a| (a.offset_top - scroll_offset).max(0.0)),
        };
        if reduced_motion.get_untracked() {
            window().scroll_to_with_x_and_y(0.0, target);
        } else {
            let from = scroll_y.get_untracked();
            tween.set_value(Some(ScrollTween::new(from, target, smooth_scroll_ms)));
        }
    };

    let on_step = Callback::new(move |direction: Direction| {
        let now = Utc::now();
        let outcome = controller.try_update(|c| c.step(direction, now));
        if let Some(section) = outcome.and_then(commit) {
            scroll_to(section);
        }
    });

    let select = move |section: Section| {
        let now = Utc::now();
        let outcome = controller.try_update(|c| c.select(section.index(), now));
        match outcome {
            Some(TransitionOutcome::Unchanged) => scroll_to(section),
            Some(outcome) => {
                if let Some(section) = commit(outcome) {
                    scroll_to(section);
                }
            }
            None => {}
        }
    };
    let on_select = Callback::new(move |section: Section| {
        // a dot click on the active panel does nothing
        if controller.with_untracked(|c| c.active()) != section.index() {
            select(section);
        }
    });

    // tracker: every scroll event proposes the section under the reader
    Effect::new(move |_| {
        let y = scroll_y.get();
        let vh = viewport_height.get();
        settled.track();
        let frame = read_frame(y, vh);
        progress.set(frame.progress());
        let index = if frame.anchors.iter().any(Option::is_some) {
            anchors.active(&frame)
        } else {
            breakpoints.as_ref().map_or(0, |b| b.active(&frame))
        };
        tracked.set(index);
        let now = Utc::now();
        if let Some(outcome) = controller.try_update(|c| c.request(index, now)) {
            commit(outcome);
        }
    });

    // jumps requested from the header prompt
    Effect::new(move |_| {
        if let Some(section) = nav.requested.get() {
            nav.requested.set(None);
            select(section);
        }
    });

    let card = StoredValue::new(CardReveal::new(config.card_spring.spring()));
    let card_pose = RwSignal::new(CardReveal::new(config.card_spring.spring()).snap(0.0));
    let revealed = RwSignal::new(false);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = args.delta / 1000.0;
        let target = progress.get_untracked();

        if let Some((y, done)) = tween
            .try_update_value(|t| t.as_mut().map(|t| t.sample(args.timestamp)))
            .flatten()
        {
            window().scroll_to_with_x_and_y(0.0, y);
            if done {
                tween.set_value(None);
            }
        }

        let reduced = reduced_motion.get_untracked();
        let pose = card
            .try_update_value(|c| {
                if reduced {
                    c.snap(target)
                } else {
                    c.advance(target, dt)
                }
            })
            .unwrap_or(Pose::VISIBLE);
        if card_pose.get_untracked() != pose {
            card_pose.set(pose);
        }
        let is_revealed = card.with_value(|c| c.is_revealed());
        if revealed.get_untracked() != is_revealed {
            revealed.set(is_revealed);
        }

        let smooth = smoothed
            .try_update_value(|s| {
                s.as_mut().map(|s| {
                    let index = s.advance(target, dt);
                    (s.progress(), index)
                })
            })
            .flatten();
        let (value, index) = smooth.unwrap_or((target, tracked.get_untracked()));
        if (smooth_progress.get_untracked() - value).abs() > f64::EPSILON {
            smooth_progress.set(value);
        }
        let section = Section::from_index(index);
        if smooth_section.get_untracked() != section {
            smooth_section.set(section);
        }
    });

    let active = Memo::new(move |_| Section::from_index(controller.with(|c| c.active())));
    let direction = Memo::new(move |_| controller.with(|c| c.last_direction()));
    let cooling = Memo::new(move |_| controller.with(|c| c.state() != TransitionState::Idle));
    let hero_style = move || hero_pose(progress.get(), reduced_motion.get()).to_style();

    view! {
        <Title text="Portfolio" />
        <ScrollProgressBar progress=smooth_progress />
        <div
            class="fixed inset-0 z-10 flex items-center justify-center will-change-transform"
            class:pointer-events-none=move || progress.get() > 0.2
            style=hero_style
        >
            {panel(Section::Hero)}
        </div>
        <SectionViewer
            active=active
            direction=direction
            revealed=revealed
            cooling=cooling
            reduced_motion=reduced_motion
            on_step=on_step
            on_select=on_select
            style=Signal::derive(move || card_pose.get().to_style())
            panel=panel
        />
        {move || {
            if active.get() == Section::Hero {
                Either::Left(view! { <ScrollIndicator section=smooth_section /> })
            } else {
                Either::Right(())
            }
        }}
        <div aria-hidden="true" class="relative z-0">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! { <div id=section.slug() class="scroll-anchor h-screen" /> }
                })
                .collect_view()}
        </div>
    }
}
