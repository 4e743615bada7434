use leptos::prelude::*;

use crate::content::{self, format_month};

use super::reveal::Reveal;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "My " <span class="gradient-text">"Education"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "Academic background building the foundation for a career in AI, data science, and software engineering."
                        </p>
                    </div>
                    <div class="max-w-4xl mx-auto space-y-8">
                        {content::education()
                            .into_iter()
                            .map(|entry| {
                                let period = format!(
                                    "{} - {}",
                                    format_month(Some(entry.start)),
                                    format_month(Some(entry.end)),
                                );
                                view! {
                                    <div class="card p-6 rounded-xl">
                                        <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                                            <div>
                                                <h3 class="text-xl font-bold text-primary mb-1">
                                                    {entry.degree}
                                                </h3>
                                                <p class="font-semibold text-muted">
                                                    {entry.institution}
                                                </p>
                                                <p class="text-sm text-muted">{entry.location}</p>
                                            </div>
                                            <div class="text-sm text-muted text-right">
                                                <div>{period}</div>
                                                <div class="font-bold">{entry.gpa}</div>
                                            </div>
                                        </div>
                                        <ul class="list-disc list-inside text-muted text-sm space-y-1 mb-4">
                                            {entry
                                                .achievements
                                                .into_iter()
                                                .map(|a| view! { <li>{a}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="flex flex-wrap gap-2 mb-2">
                                            {entry
                                                .coursework
                                                .into_iter()
                                                .map(|course| view! { <span class="badge">{course}</span> })
                                                .collect_view()}
                                        </div>
                                        {entry
                                            .thesis
                                            .map(|thesis| {
                                                view! {
                                                    <p class="text-sm text-muted mt-3">
                                                        <span class="font-semibold">"Thesis: "</span>
                                                        {thesis}
                                                    </p>
                                                }
                                            })}
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
