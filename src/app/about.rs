use leptos::prelude::*;

use crate::content;

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-surface">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "About " <span class="gradient-text">"Me"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "Passionate about creating innovative solutions that bridge the gap between cutting-edge technology and practical applications."
                        </p>
                    </div>
                    <div class="max-w-3xl mx-auto space-y-6">
                        <h3 class="text-2xl font-bold">"Full-Stack Engineer & AI Enthusiast"</h3>
                        <p class="text-muted text-lg leading-relaxed">
                            "I'm a passionate full-stack developer with a deep interest in artificial intelligence, cybersecurity, and real-time systems. With expertise spanning from frontend development to complex backend architectures, I specialize in creating scalable, secure, and intelligent applications."
                        </p>
                        <p class="text-muted text-lg leading-relaxed">
                            "My journey in technology has led me to work on diverse projects ranging from SDN-based network security solutions to AI-powered web applications. I believe in the power of technology to solve real-world problems."
                        </p>
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-4 pt-6">
                            <QuickStat value="3+" label="Years Experience" />
                            <QuickStat value="50+" label="Projects Completed" />
                            <QuickStat value="20+" label="Technologies" />
                        </div>
                    </div>
                    <div class="mt-20">
                        <h3 class="text-2xl font-bold text-center mb-12">"Technical Expertise"</h3>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {content::skill_groups()
                                .into_iter()
                                .map(|group| {
                                    view! {
                                        <div class="card p-6 rounded-xl">
                                            <h4 class="font-semibold text-lg mb-4">
                                                {group.category}
                                            </h4>
                                            <div class="flex flex-wrap gap-2">
                                                {group
                                                    .technologies
                                                    .into_iter()
                                                    .map(|tech| {
                                                        view! { <span class="badge">{tech}</span> }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn QuickStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center p-4 card rounded-lg">
            <div class="text-2xl font-bold text-primary">{value}</div>
            <div class="text-sm text-muted">{label}</div>
        </div>
    }
}
