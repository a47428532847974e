use chrono::Utc;
use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_event_listener_with_options, UseEventListenerOptions};

use crate::{
    config::SiteConfig,
    glass::{GlassStyle, Intensity, Tint},
    motion::panel_pose,
    sections::Section,
    transition::{Direction, Overflow, WheelGesture},
};

#[component]
pub fn GlassCard(
    #[prop(optional)] style: GlassStyle,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("{} {}", style.classes(), class)>
            <div class="glass-shine pointer-events-none absolute inset-0" />
            <div class="relative z-10 h-full">{children()}</div>
        </div>
    }
}

/// Scroll extent of the panel currently shown in the card.
fn active_overflow(card: &web_sys::Element) -> Option<Overflow> {
    let panel = card.query_selector(".panel-active").ok().flatten()?;
    Some(Overflow {
        scroll_top: panel.scroll_top() as f64,
        scroll_height: panel.scroll_height() as f64,
        client_height: panel.client_height() as f64,
    })
}

#[derive(Debug, Clone, Copy)]
struct SwipeStart {
    start_y: f64,
    /// The swipe scrolled the panel's content and cannot step.
    scrolled_panel: bool,
}

/// The glass card showing one section panel at a time. Wheel and touch input
/// over the card scroll the active panel first and step between panels once
/// the panel is at its edge.
#[component]
pub fn SectionViewer(
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] direction: Signal<Direction>,
    /// Whether the card is visible enough to take over input.
    #[prop(into)]
    revealed: Signal<bool>,
    /// Whether a section change is still cooling down.
    #[prop(into)]
    cooling: Signal<bool>,
    #[prop(into)] reduced_motion: Signal<bool>,
    on_step: Callback<Direction>,
    on_select: Callback<Section>,
    #[prop(into)] style: Signal<String>,
    panel: fn(Section) -> AnyView,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let gestures = config.gestures();
    let card_ref = NodeRef::<html::Div>::new();
    let wheel = StoredValue::new(WheelGesture::default());
    let touch = StoredValue::new(None::<SwipeStart>);

    let panel_can_scroll = move |heading: Direction| {
        card_ref
            .get_untracked()
            .and_then(|card| active_overflow(&card))
            .is_some_and(|o| o.can_scroll(heading))
    };

    // non-passive so a step can keep the page from scrolling underneath
    let _ = use_event_listener_with_options(
        card_ref,
        ev::wheel,
        move |e: web_sys::WheelEvent| {
            if !revealed.get_untracked() {
                return;
            }
            let delta = e.delta_y();
            let Some(heading) = Direction::of(delta) else {
                return;
            };
            let now = Utc::now();
            if panel_can_scroll(heading) {
                wheel.update_value(|w| w.absorb(&gestures, delta, now));
                return;
            }
            let step = wheel
                .try_update_value(|w| w.push(&gestures, delta, now))
                .flatten();
            let spent = wheel.with_value(|w| w.is_spent());
            if spent || cooling.get_untracked() {
                e.prevent_default();
            }
            if let Some(step) = step {
                on_step.run(step);
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(card_ref, ev::touchstart, move |e: web_sys::TouchEvent| {
        let start = e.touches().get(0).map(|t| SwipeStart {
            start_y: t.client_y() as f64,
            scrolled_panel: false,
        });
        touch.set_value(start);
    });

    let _ = use_event_listener_with_options(
        card_ref,
        ev::touchmove,
        move |e: web_sys::TouchEvent| {
            if !revealed.get_untracked() {
                return;
            }
            let (Some(current), Some(y)) = (
                touch.get_value(),
                e.touches().get(0).map(|t| t.client_y() as f64),
            ) else {
                return;
            };
            let Some(heading) = Direction::of(current.start_y - y) else {
                return;
            };
            if panel_can_scroll(heading) {
                touch.set_value(Some(SwipeStart {
                    scrolled_panel: true,
                    ..current
                }));
            } else {
                e.prevent_default();
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(card_ref, ev::touchend, move |e: web_sys::TouchEvent| {
        let Some(current) = touch.get_value() else {
            return;
        };
        touch.set_value(None);
        if !revealed.get_untracked() || current.scrolled_panel {
            return;
        }
        let Some(end) = e.changed_touches().get(0).map(|t| t.client_y() as f64) else {
            return;
        };
        if let Some(direction) = gestures.swipe(current.start_y, end) {
            on_step.run(direction);
        }
    });

    let panel_index = move |section: Section| section.index() - 1;
    let active_panel = move || panel_index(active.get().card_panel());

    view! {
        <div
            node_ref=card_ref
            class="fixed inset-0 z-20 flex items-center justify-center px-4 pt-24 pb-8 pointer-events-none"
        >
            <div
                class="relative w-full max-w-5xl h-[78vh] will-change-transform"
                class:pointer-events-auto=move || revealed.get()
                style=move || style.get()
            >
                <GlassCard style=GlassStyle::new(Intensity::Low, Tint::Purple) class="h-full">
                    <div class="relative h-full">
                        {Section::ALL
                            .into_iter()
                            .skip(1)
                            .map(|section| {
                                let index = panel_index(section);
                                let is_active = move || active_panel() == index;
                                let pose_style = move || {
                                    panel_pose(
                                            index,
                                            active_panel(),
                                            direction.get(),
                                            reduced_motion.get(),
                                        )
                                        .to_style()
                                };
                                view! {
                                    <section
                                        aria-label=section.title()
                                        aria-hidden=move || (!is_active()).to_string()
                                        class="panel absolute inset-0 overflow-y-auto overscroll-contain p-6 md:p-10"
                                        class:panel-active=is_active
                                        class:pointer-events-none=move || !is_active()
                                        style=pose_style
                                    >
                                        {panel(section)}
                                    </section>
                                }
                            })
                            .collect_view()}
                    </div>
                </GlassCard>
                <nav
                    aria-label="Sections"
                    class="absolute right-2 md:right-6 top-1/2 -translate-y-1/2 flex flex-col gap-3"
                >
                    {Section::ALL
                        .into_iter()
                        .skip(1)
                        .map(|section| {
                            view! {
                                <button
                                    aria-label=section.title()
                                    title=section.title()
                                    class="dot w-3 h-3 rounded-full transition-all duration-300"
                                    class:dot-active=move || active.get().lit_dot() == Some(section)
                                    on:click=move |_| on_select.run(section)
                                />
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}
