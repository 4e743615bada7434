use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::content::{self, Project};

use super::filter::FilterBar;
use super::reveal::Reveal;

#[component]
pub fn Projects() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(content::projects()));
    let tags = catalog.with_untracked(|c| c.tags().to_vec());
    let selected = Signal::derive(move || catalog.with(|c| c.selected_tag().to_string()));
    let on_select = Callback::new(move |tag: String| {
        catalog.update(|c| {
            if let Err(err) = c.select_tag(&tag) {
                log::warn!("project filter: {err}");
            }
        });
    });

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "My " <span class="gradient-text">"Projects"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "A showcase of my work spanning full-stack development, AI/ML research, and data analysis across various domains."
                        </p>
                    </div>
                    <FilterBar tags=tags selected=selected on_select=on_select />
                    {move || {
                        let (featured, regular): (Vec<Project>, Vec<Project>) = catalog
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
                                                "🚀 Featured Projects"
                                            </h3>
                                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                {featured
                                                    .into_iter()
                                                    .map(|project| view! { <ProjectCard project=project /> })
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
                                                "🔬 Research Projects"
                                            </h3>
                                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                {regular
                                                    .into_iter()
                                                    .map(|project| view! { <ProjectCard project=project /> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })}
                        }
                    }}
                    <div class="text-center mt-12">
                        <a
                            href="https://github.com/saivamsi4514/"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "View All Projects on GitHub"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn language_color(language: &str) -> &'static str {
    match language {
        "TypeScript" => "bg-blue",
        "JavaScript" => "bg-yellow",
        "Python" => "bg-green",
        _ => "bg-muted",
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        name,
        description,
        technologies,
        language,
        stars,
        updated,
        repo_url,
        homepage,
        role,
        ..
    } = project;
    let extra = technologies.len().saturating_sub(3);

    view! {
        <div class="card p-6 rounded-xl group">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-2">
                    <div class=format!("w-3 h-3 rounded-full {}", language_color(&language))></div>
                    <span class="text-sm text-muted">{language}</span>
                </div>
                <span class="text-sm text-muted">"★ " {stars}</span>
            </div>
            <h4 class="text-xl font-semibold mb-3 group-hover:text-primary transition-colors">
                {name}
            </h4>
            <p class="text-sm text-muted mb-2">{role}</p>
            <p class="text-muted mb-4">{description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {technologies
                    .iter()
                    .take(3)
                    .map(|tech| view! { <span class="badge">{tech.to_string()}</span> })
                    .collect_view()}
                {(extra > 0)
                    .then(|| {
                        view! {
                            <span class="badge badge-outline">{format!("+{extra} more")}</span>
                        }
                    })}
            </div>
            <div class="flex items-center justify-between pt-4 border-t border-muted/30">
                <span class="text-sm text-muted">
                    {updated.format("%b %e, %Y").to_string()}
                </span>
                <div class="flex items-center gap-3">
                    <a
                        href=repo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source repository"
                        class="hover:text-primary transition-colors"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    {homepage
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Live site"
                                    class="hover:text-primary transition-colors"
                                >
                                    "↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
