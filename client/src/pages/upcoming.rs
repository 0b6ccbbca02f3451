//! Upcoming-work board with progress and milestones.

use leptos::prelude::*;

use crate::catalog::{ROADMAP, Roadmap};

fn roadmap_card(item: &'static Roadmap) -> impl IntoView {
    view! {
        <article class="roadmap-card">
            <header class="roadmap-card__header">
                <h3>{item.title}</h3>
                <span class="badge">{item.status}</span>
                <span class={format!("badge badge--{}", item.priority.label().to_lowercase())}>
                    {format!("{} priority", item.priority.label())}
                </span>
            </header>
            <p>{item.description}</p>
            <div class="progress" role="progressbar" aria-valuenow={item.progress.to_string()} aria-valuemin="0" aria-valuemax="100">
                <div class="progress__bar" style={format!("width: {}%", item.progress)}></div>
            </div>
            <p class="roadmap-card__eta">{format!("{}% · Estimated {}", item.progress, item.eta)}</p>
            <ul class="roadmap-card__tech">
                {item.technologies.iter().map(|t| view! { <li class="badge">{*t}</li> }).collect_view()}
            </ul>
            <p class="roadmap-card__team">{format!("Team: {}", item.team.join(", "))}</p>
            <ol class="roadmap-card__milestones">
                {item
                    .milestones
                    .iter()
                    .map(|m| view! { <li><time>{m.date}</time> " " {m.note}</li> })
                    .collect_view()}
            </ol>
        </article>
    }
}

#[component]
pub fn UpcomingPage() -> impl IntoView {
    view! {
        <div class="upcoming-page">
            <h1>"Upcoming Projects"</h1>
            <p class="upcoming-page__lead">"What is on the workbench right now."</p>
            <div class="roadmap-grid">{ROADMAP.iter().map(roadmap_card).collect_view()}</div>
        </div>
    }
}
