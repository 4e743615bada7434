use chrono::Local;
use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::content::{self, expiring_soon, Certification};

use super::filter::FilterBar;
use super::reveal::Reveal;

#[component]
pub fn Certifications() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(content::certifications()));
    let tags = catalog.with_untracked(|c| c.tags().to_vec());
    let selected = Signal::derive(move || catalog.with(|c| c.selected_tag().to_string()));
    let on_select = Callback::new(move |tag: String| {
        catalog.update(|c| {
            if let Err(err) = c.select_tag(&tag) {
                log::warn!("certification filter: {err}");
            }
        });
    });

    view! {
        <section id="certifications" class="py-20 bg-surface">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Professional " <span class="gradient-text">"Certifications"</span>
                        </h2>
                        <p class="text-lg text-muted max-w-2xl mx-auto">
                            "Industry-recognized certifications demonstrating expertise across cloud platforms, AI/ML technologies, cybersecurity, and modern development practices."
                        </p>
                    </div>
                    <FilterBar tags=tags selected=selected on_select=on_select />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {move || {
                            let visible: Vec<Certification> = catalog
                                .with(|c| c.visible().into_iter().cloned().collect());
                            visible
                                .into_iter()
                                .map(|cert| view! { <CertificationCard cert=cert /> })
                                .collect_view()
                        }}
                    </div>
                    <div class="text-center mt-12">
                        <a
                            href="https://www.linkedin.com/in/sai-vamsi-ch/"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "View All Certifications on LinkedIn"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    let Certification {
        title,
        issuer,
        category,
        issued,
        expires,
        credential_id,
        credential_url,
        description,
        icon,
        skills,
    } = cert;
    let expiring = expiring_soon(expires, Local::now().date_naive());
    let extra = skills.len().saturating_sub(3);
    // last six characters, as printed on the badge
    let short_id = if credential_id.len() > 6 {
        credential_id[credential_id.len() - 6..].to_string()
    } else {
        credential_id.clone()
    };

    view! {
        <div class="card p-6 rounded-xl group relative overflow-hidden">
            <div class="flex items-start justify-between mb-4">
                <div class="text-4xl">{icon}</div>
                <div class="flex flex-col items-end gap-2">
                    <span class="badge badge-outline">{category}</span>
                    {expiring
                        .then(|| {
                            view! { <span class="badge badge-danger">"Expiring Soon"</span> }
                        })}
                </div>
            </div>
            <h3 class="text-lg font-bold mb-2 group-hover:text-primary transition-colors">
                {title}
            </h3>
            <p class="text-muted text-sm mb-3 font-medium">{issuer}</p>
            <p class="text-muted text-sm mb-4">{description}</p>
            <div class="flex flex-wrap gap-1 mb-4">
                {skills
                    .iter()
                    .take(3)
                    .map(|skill| view! { <span class="badge">{skill.to_string()}</span> })
                    .collect_view()}
                {(extra > 0)
                    .then(|| view! { <span class="badge badge-outline">{format!("+{extra}")}</span> })}
            </div>
            <div class="space-y-1 mb-4 text-xs text-muted">
                <div>"Issued: " {issued.format("%b %e, %Y").to_string()}</div>
                <div>"Expires: " {expires.format("%b %e, %Y").to_string()}</div>
            </div>
            <div class="flex items-center justify-between pt-4 border-t border-muted/30">
                <span class="text-xs text-muted font-mono">"ID: " {short_id}</span>
                <a
                    href=credential_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Verify credential"
                    class="hover:text-primary transition-colors"
                >
                    "↗"
                </a>
            </div>
        </div>
    }
}
