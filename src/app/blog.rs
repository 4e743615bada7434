use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::content::{self, BlogPost};

use super::filter::FilterBar;
use super::reveal::Reveal;

#[component]
pub fn Blog() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(content::blog_posts()));
    let tags = catalog.with_untracked(|c| c.tags().to_vec());
    let selected = Signal::derive(move || catalog.with(|c| c.selected_tag().to_string()));
    let on_select = Callback::new(move |tag: String| {
        catalog.update(|c| {
            if let Err(err) = c.select_tag(&tag) {
                log::warn!("blog filter: {err}");
            }
        });
    });

    view! {
        <section id="blog" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Tech " <span class="gradient-text">"Blog"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "Insights, tutorials, and thoughts on full-stack development, AI/ML, cybersecurity, and the latest trends in technology."
                        </p>
                    </div>
                    <FilterBar tags=tags selected=selected on_select=on_select />
                    {move || {
                        let (featured, regular): (Vec<BlogPost>, Vec<BlogPost>) = catalog
                            .with(|c| {
                                let (f, r) = c.visible_partitioned();
                                (
                                    f.into_iter().cloned().collect(),
                                    r.into_iter().cloned().collect(),
                                )
                            });
                        view! {
                            {(!featured.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="mb-16">
                                            <h3 class="text-2xl font-bold mb-8 text-center">
                                                "✨ Featured Articles"
                                            </h3>
                                            <div class="grid lg:grid-cols-2 gap-8">
                                                {featured
                                                    .into_iter()
                                                    .map(|post| view! { <PostCard post=post compact=false /> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })}
                            {(!regular.is_empty())
                                .then(|| {
                                    view! {
                                        <div>
                                            <h3 class="text-2xl font-bold mb-8 text-center">
                                                "📚 Latest Articles"
                                            </h3>
                                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                {regular
                                                    .into_iter()
                                                    .map(|post| view! { <PostCard post=post compact=true /> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })}
                        }
                    }}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: BlogPost, compact: bool) -> impl IntoView {
    let BlogPost {
        title,
        excerpt,
        author,
        published,
        read_time,
        tags,
        category,
        views,
        likes,
        ..
    } = post;
    let tag_limit = if compact { 2 } else { 3 };
    let title_class = if compact {
        "text-lg font-bold mb-2 group-hover:text-primary transition-colors"
    } else {
        "text-xl font-bold mb-3 group-hover:text-primary transition-colors"
    };

    view! {
        <article class="card rounded-xl overflow-hidden group cursor-pointer p-6">
            <div class="flex items-center justify-between text-sm text-muted mb-3">
                <div class="flex items-center gap-4">
                    <span class="badge badge-outline">{category}</span>
                    <span>{author}</span>
                </div>
                <span>{read_time}</span>
            </div>
            <h3 class=title_class>{title}</h3>
            <p class="text-muted mb-4">{excerpt}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {tags
                    .iter()
                    .take(tag_limit)
                    .map(|tag| view! { <span class="badge">{tag.to_string()}</span> })
                    .collect_view()}
            </div>
            <div class="flex items-center justify-between pt-4 border-t border-muted/30 text-sm text-muted">
                <span>{published.format("%B %e, %Y").to_string()}</span>
                <span>{views} " views · " {likes} " likes"</span>
            </div>
        </article>
    }
}
