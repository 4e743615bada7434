use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactForm, Field, SubmissionFlow, SubmissionStatus, TransportOutcome};
use crate::content;

use super::reveal::Reveal;

// Stand-in transport: the production site would hand the snapshot to a mail
// API and feed its response back through `resolve`.
const SEND_DELAY_MS: f64 = 2000.0;

#[component]
pub fn Contact() -> impl IntoView {
    let flow = RwSignal::new(SubmissionFlow::new());

    let UseTimeoutFnReturn { start: deliver, .. } = use_timeout_fn(
        move |_submission: ContactForm| {
            flow.update(|f| f.resolve(TransportOutcome::Success));
        },
        SEND_DELAY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(|f| f.submit()) {
            Some(Ok(submission)) => deliver(submission),
            Some(Err(err)) => log::warn!("submit rejected: {err}"),
            None => {}
        }
    };

    let edit = move |field: Field| {
        move |ev: Event| {
            flow.update(|f| f.update_field(field, event_target_value(&ev)));
        }
    };

    view! {
        <section id="contact" class="py-20 bg-surface">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Let's " <span class="gradient-text">"Connect"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "Have a project in mind or want to discuss technology? I'd love to hear from you."
                        </p>
                    </div>
                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-2xl font-bold mb-6">"Get in Touch"</h3>
                                <p class="text-muted leading-relaxed">
                                    "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology. Whether you're a fellow developer, a potential client, or someone passionate about tech, feel free to reach out!"
                                </p>
                            </div>
                            <div class="space-y-4">
                                {content::contact_details()
                                    .into_iter()
                                    .map(|detail| {
                                        let external = detail.href.starts_with("http");
                                        view! {
                                            <a
                                                href=detail.href
                                                target=external.then_some("_blank")
                                                rel=external.then_some("noopener noreferrer")
                                                class="flex items-center p-4 card rounded-lg group"
                                            >
                                                <div>
                                                    <div class="font-medium text-sm text-muted">
                                                        {detail.label}
                                                    </div>
                                                    <div class="font-semibold group-hover:text-primary transition-colors">
                                                        {detail.value}
                                                    </div>
                                                </div>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div>
                                <h4 class="font-semibold mb-4">"Follow Me"</h4>
                                <div class="flex gap-4">
                                    {content::social_links()
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=link.label
                                                    class="p-3 card rounded-lg text-xl hover:text-primary transition-colors"
                                                >
                                                    <i class=link.icon></i>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                        <div class="card p-8 rounded-xl">
                            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>
                            <form class="space-y-6" on:submit=on_submit>
                                <div class="grid md:grid-cols-2 gap-4">
                                    <div class="space-y-2">
                                        <label for="name" class="font-medium">"Name *"</label>
                                        <input
                                            id="name"
                                            name="name"
                                            type="text"
                                            class="input"
                                            placeholder="Your full name"
                                            required=true
                                            prop:value=move || flow.with(|f| f.form().name.clone())
                                            on:input=edit(Field::Name)
                                        />
                                    </div>
                                    <div class="space-y-2">
                                        <label for="email" class="font-medium">"Email *"</label>
                                        <input
                                            id="email"
                                            name="email"
                                            type="email"
                                            class="input"
                                            placeholder="your.email@example.com"
                                            required=true
                                            prop:value=move || flow.with(|f| f.form().email.clone())
                                            on:input=edit(Field::Email)
                                        />
                                    </div>
                                </div>
                                <div class="space-y-2">
                                    <label for="subject" class="font-medium">"Subject *"</label>
                                    <input
                                        id="subject"
                                        name="subject"
                                        type="text"
                                        class="input"
                                        placeholder="What's this about?"
                                        required=true
                                        prop:value=move || flow.with(|f| f.form().subject.clone())
                                        on:input=edit(Field::Subject)
                                    />
                                </div>
                                <div class="space-y-2">
                                    <label for="message" class="font-medium">"Message *"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="6"
                                        class="input resize-none"
                                        placeholder="Tell me about your project, ideas, or just say hello!"
                                        required=true
                                        prop:value=move || flow.with(|f| f.form().message.clone())
                                        on:input=edit(Field::Message)
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    class="btn btn-primary w-full"
                                    disabled=move || flow.with(|f| f.is_submitting())
                                >
                                    {move || {
                                        if flow.with(|f| f.is_submitting()) {
                                            "Sending..."
                                        } else {
                                            "Send Message"
                                        }
                                    }}
                                </button>
                                {move || {
                                    flow.with(|f| match f.status() {
                                        SubmissionStatus::Succeeded => {
                                            Some(
                                                view! {
                                                    <div class="alert alert-success">
                                                        "Message sent! Thank you for reaching out. I'll get back to you soon!"
                                                    </div>
                                                }
                                                    .into_any(),
                                            )
                                        }
                                        SubmissionStatus::Failed { reason } => {
                                            Some(
                                                view! {
                                                    <div class="alert alert-error">
                                                        {format!(
                                                            "Failed to send message: {reason}. Please try again.",
                                                        )}
                                                    </div>
                                                }
                                                    .into_any(),
                                            )
                                        }
                                        _ => None,
                                    })
                                }}
                            </form>
                            <div class="mt-6 pt-6 border-t border-muted/30 text-center">
                                <p class="text-sm text-muted">
                                    "Prefer email? Drop me a line at "
                                    <a
                                        href="mailto:saivamsicheekati@gmail.com"
                                        class="text-primary hover:underline"
                                    >
                                        "saivamsicheekati@gmail.com"
                                    </a>
                                </p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
