use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion::{Animation, Variant};

/// Reveals its children the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] animation: Animation,
    /// Delay in milliseconds before the entrance starts.
    #[prop(optional)]
    delay: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);
    let reduced_motion = leptos_use::use_media_query("(prefers-reduced-motion: reduce)");

    let _ = use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|e| e.is_intersecting()) {
            visible.set(true);
        }
    });

    let style = move || {
        let variant = if visible.get() {
            Variant::Visible
        } else {
            Variant::Hidden
        };
        format!(
            "{} transition: opacity 0.6s ease-out {delay}ms, transform 0.6s ease-out {delay}ms, filter 0.6s ease-out {delay}ms;",
            animation.pose_for(variant, reduced_motion.get()).to_style()
        )
    };

    view! {
        <div node_ref=target class=class style=style>
            {children()}
        </div>
    }
}
