use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Wraps a page section and adds the entrance animation class once the
/// element scrolls into view. Latches on first sight so the animation does
/// not replay when the visitor scrolls back up.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visibility = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visibility.get() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if shown.get() { "section-content is-visible" } else { "section-content" }
            }
        >
            {children()}
        </div>
    }
}
