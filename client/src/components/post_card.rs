//! Admin post card, rendered as a grid tile or a list row.

use content::posts::Post;
use leptos::prelude::*;

use crate::state::ui::ViewMode;

/// Buttons on a post card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostCardAction {
    View,
    Edit,
    /// Open the full-screen code editor.
    Code,
    Duplicate,
    TogglePublish,
    Delete,
}

#[component]
pub fn PostCard(post: Post, view_mode: ViewMode, on_action: Callback<(PostCardAction, i64)>) -> impl IntoView {
    let id = post.id;
    let act = move |action: PostCardAction| move |_| on_action.run((action, id));
    let status = if post.published { "Published" } else { "Draft" };
    let publish_label = if post.published { "Unpublish" } else { "Publish" };
    let excerpt: String = post.content.chars().take(120).collect();

    view! {
        <article
            class="post-card"
            class:post-card--list={view_mode == ViewMode::List}
            class:post-card--draft={!post.published}
        >
            {post.image.clone().map(|src| view! { <img class="post-card__image" src=src alt=post.title.clone()/> })}
            <div class="post-card__body">
                <div class="post-card__meta">
                    <span class="badge">{post.category.as_str()}</span>
                    <span class="badge" class:badge--green=post.published>{status}</span>
                    <span class="post-card__date">{post.date.to_string()}</span>
                </div>
                <h3 class="post-card__title">{post.title.clone()}</h3>
                <p class="post-card__excerpt">{excerpt}</p>
                <div class="post-card__actions">
                    <button class="btn btn--ghost" on:click={act(PostCardAction::View)}>"View"</button>
                    <button class="btn btn--ghost" on:click={act(PostCardAction::Edit)}>"Edit"</button>
                    <button class="btn btn--ghost" on:click={act(PostCardAction::Code)}>"Code"</button>
                    <button class="btn btn--ghost" on:click={act(PostCardAction::Duplicate)}>"Duplicate"</button>
                    <button class="btn btn--ghost" on:click={act(PostCardAction::TogglePublish)}>{publish_label}</button>
                    <button class="btn btn--danger" on:click={act(PostCardAction::Delete)}>"Delete"</button>
                </div>
            </div>
        </article>
    }
}
