//! Projects page: filterable catalogue with a purchase dialog per project,
//! followed by project posts published from the admin panel.

use content::posts::Category;
use leptos::prelude::*;

use crate::catalog::{Project, ProjectFilter, projects};
use crate::components::purchase_modal::PurchaseModal;
use crate::state::admin::AdminState;
use crate::state::purchase::{PurchaseDialog, PurchaseItem};

fn project_card(project: &'static Project, dialog: RwSignal<PurchaseDialog>) -> impl IntoView {
    let buy = move |_| {
        dialog.update(|d| d.open(PurchaseItem { title: project.title.to_owned(), price: project.price.to_owned() }));
    };

    view! {
        <article class="project-card">
            <img class="project-card__image" src={project.image} alt={project.title}/>
            <div class="project-card__body">
                <header class="project-card__header">
                    <h3>{project.title}</h3>
                    <span class={format!("badge badge--{}", project.status.tone())}>{project.status.label()}</span>
                </header>
                <p>{project.description}</p>
                <ul class="project-card__tech">
                    {project.tech.iter().map(|t| view! { <li class="badge">{*t}</li> }).collect_view()}
                </ul>
                <div class="project-card__actions">
                    {project
                        .demo_url
                        .map(|href| view! { <a href=href target="_blank" rel="noopener" class="btn btn--ghost">"Live Demo"</a> })}
                    <button class="btn btn--primary" on:click=buy>
                        {format!("Buy {}", project.price)}
                    </button>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let filter = RwSignal::new(ProjectFilter::All);
    let dialog = RwSignal::new(PurchaseDialog::default());

    let published = move || admin.with(|s| s.posts.published(Category::Project));

    view! {
        <div class="projects-page">
            <h1>"Projects"</h1>
            <div class="segmented">
                {ProjectFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || filter.get() == f
                                data-filter={f.id()}
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="project-grid">
                {move || projects(filter.get()).into_iter().map(|p| project_card(p, dialog)).collect_view()}
            </div>
            <Show when=move || !published().is_empty()>
                <section class="project-notes">
                    <h2>"Project Notes"</h2>
                    {move || {
                        published()
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <article class="project-note">
                                        <h3>{post.title}</h3>
                                        <time>{post.date.to_string()}</time>
                                        <p>{post.content}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </section>
            </Show>
            <PurchaseModal dialog=dialog/>
        </div>
    }
}
