use leptos::prelude::*;

/// Row of tag buttons above a filtered listing. The buttons come straight
/// from the catalog's tag index, so every selection the UI can produce is a
/// valid one; the owning section still routes it through the catalog.
#[component]
pub fn FilterBar(
    tags: Vec<String>,
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-12">
            {tags
                .into_iter()
                .map(|tag| {
                    let value = tag.clone();
                    let active = {
                        let tag = tag.clone();
                        move || selected.get() == tag
                    };
                    view! {
                        <button
                            class=move || {
                                if active() { "filter-btn filter-btn-active" } else { "filter-btn" }
                            }
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {tag}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
