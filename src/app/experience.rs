use leptos::prelude::*;

use crate::content::{self, format_month};

use super::reveal::Reveal;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-surface">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Professional " <span class="gradient-text">"Experience"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "A journey through my career in technology, from web development to AI/ML engineering and cybersecurity."
                        </p>
                    </div>
                    <div class="relative">
                        <div class="absolute left-4 md:left-1/2 md:-translate-x-1/2 w-0.5 h-full bg-muted/30"></div>
                        {content::experiences()
                            .into_iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                // alternate cards around the timeline spine
                                let row = if index % 2 == 0 {
                                    "relative flex items-center mb-12 md:flex-row-reverse"
                                } else {
                                    "relative flex items-center mb-12"
                                };
                                let card_side = if index % 2 == 0 {
                                    "ml-12 md:ml-0 md:w-1/2 md:pr-8"
                                } else {
                                    "ml-12 md:ml-0 md:w-1/2 md:pl-8"
                                };
                                let period = format!(
                                    "{} - {}",
                                    format_month(Some(exp.start)),
                                    format_month(exp.end),
                                );
                                view! {
                                    <div class=row>
                                        <div class="absolute left-4 md:left-1/2 md:-translate-x-1/2 w-4 h-4 bg-primary rounded-full border-4 border-background z-10"></div>
                                        <div class=card_side>
                                            <div class="card p-6 rounded-xl">
                                                <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-4">
                                                    <div>
                                                        <h3 class="text-xl font-bold text-primary mb-1">
                                                            {exp.title}
                                                        </h3>
                                                        <div class="flex items-center gap-2 text-muted">
                                                            <span class="font-semibold">{exp.company}</span>
                                                            <a
                                                                href=exp.website
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                aria-label="Company website"
                                                                class="hover:text-primary transition-colors"
                                                            >
                                                                "↗"
                                                            </a>
                                                        </div>
                                                    </div>
                                                    <div class="text-sm text-muted text-right">
                                                        <div>{period}</div>
                                                        <div>{exp.location}</div>
                                                    </div>
                                                </div>
                                                <span class="badge badge-outline mb-3">{exp.kind}</span>
                                                <p class="text-muted mb-4">{exp.description}</p>
                                                <div class="flex flex-wrap gap-2">
                                                    {exp.technologies
                                                        .into_iter()
                                                        .map(|tech| {
                                                            view! { <span class="badge">{tech}</span> }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
