use leptos::prelude::*;

use crate::content;

use super::reveal::Reveal;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20"
        >
            <div class="absolute inset-0 hero-gradient"></div>
            <div class="container mx-auto px-4 text-center relative z-10">
                <Reveal>
                    <div class="space-y-6">
                        <p class="text-lg text-muted font-medium">"👋 Hello, I'm"</p>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold">
                            <span class="gradient-text">"Sai Vamsi Cheekati"</span>
                        </h1>
                        <h2 class="text-xl md:text-2xl lg:text-3xl font-semibold text-muted leading-relaxed">
                            "Bridging Full-Stack Engineering with"
                            <br />
                            <span class="gradient-text">
                                "Artificial Intelligence & Data Science"
                            </span>
                        </h2>
                        <p class="text-lg md:text-xl text-muted max-w-3xl mx-auto leading-relaxed">
                            "Full-Stack Developer passionate about creating innovative solutions that merge cutting-edge technology with practical applications. Specializing in AI/ML integration, cybersecurity, and building scalable real-time systems."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-8">
                            <a href="#projects" class="btn btn-primary px-8 py-3">
                                "View My Work"
                            </a>
                            <a href="#contact" class="btn btn-outline px-8 py-3">
                                "Get In Touch"
                            </a>
                        </div>
                        <div class="flex justify-center gap-4 pt-4">
                            {content::social_links()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="text-2xl text-muted hover:text-primary transition-colors"
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href="#about"
                            aria-label="Scroll to about"
                            class="inline-block pt-8 text-muted animate-bounce"
                        >
                            "↓"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
