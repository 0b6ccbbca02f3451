//! Posts tab: search, category filter, sort, grid/list toggle and the post
//! dialogs (create, view, code editor, delete confirmation).
//!
//! DESIGN
//! ======
//! Every button maps onto one `AdminAction`; this module never mutates the
//! store directly. The visible list is recomputed from `AdminState` and
//! `AdminUi` on each change, so a filtered view always reflects the latest
//! mutation.

use content::posts::{CategoryFilter, PostDraft, PostPatch, PostSort};
use leptos::prelude::*;

use super::delete_confirmation::DeleteConfirmation;
use super::post_card::{PostCard, PostCardAction};
use super::post_editor::{CodeEditorDialog, CreatePostDialog, PostEditor};
use crate::state::admin::{AdminAction, AdminState, apply, try_apply};
use crate::state::toast::ToastQueue;
use crate::state::ui::{AdminUi, ViewMode};

const SORT_OPTIONS: [(&str, &str); 6] = [
    ("date-desc", "Newest first"),
    ("date-asc", "Oldest first"),
    ("title-asc", "Title A-Z"),
    ("title-desc", "Title Z-A"),
    ("category-asc", "Category A-Z"),
    ("category-desc", "Category Z-A"),
];

#[component]
pub fn PostsPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let ui = expect_context::<RwSignal<AdminUi>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let on_card = Callback::new(move |(action, id): (PostCardAction, i64)| match action {
        PostCardAction::View => ui.update(|u| u.viewing_post = Some(id)),
        PostCardAction::Edit => ui.update(|u| u.editing_post = Some(id)),
        PostCardAction::Code => ui.update(|u| u.open_code_editor(id)),
        PostCardAction::Delete => ui.update(|u| u.pending_delete = Some(id)),
        PostCardAction::Duplicate => apply(admin, toasts, AdminAction::DuplicatePost(id)),
        PostCardAction::TogglePublish => apply(admin, toasts, AdminAction::TogglePublish(id)),
    });

    let on_create = Callback::new(move |draft: PostDraft| {
        if try_apply(admin, toasts, AdminAction::CreatePost(draft)) {
            ui.update(|u| u.show_create_post = false);
        }
    });
    let on_close_create = Callback::new(move |()| ui.update(|u| u.show_create_post = false));

    let on_confirm_delete = Callback::new(move |()| {
        if let Some(id) = ui.with_untracked(|u| u.pending_delete) {
            apply(admin, toasts, AdminAction::DeletePost(id));
        }
        ui.update(|u| u.pending_delete = None);
    });
    let on_cancel_delete = Callback::new(move |()| ui.update(|u| u.pending_delete = None));

    // Only the target id drives the code editor, so toggling the preview
    // keeps the text typed so far.
    let code_target = Memo::new(move |_| ui.with(|u| u.code_editor_post));
    let preview = Signal::derive(move || ui.with(|u| u.code_preview));
    let preview_label = Signal::derive(move || ui.with(AdminUi::code_preview_label));
    let on_toggle_preview = Callback::new(move |()| ui.update(AdminUi::toggle_code_preview));
    let on_close_code = Callback::new(move |()| ui.update(AdminUi::close_code_editor));

    let posts = move || admin.with(|state| ui.with(|ui| state.visible_posts(ui)));
    let view_mode = move || ui.with(|u| u.view_mode);

    view! {
        <section class="admin-panel admin-panel--posts">
            <header class="admin-panel__header">
                <h2>"Posts"</h2>
                <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.show_create_post = true)>
                    "New Post"
                </button>
            </header>
            <div class="post-toolbar">
                <input
                    class="post-toolbar__search"
                    type="search"
                    placeholder="Search posts..."
                    prop:value=move || ui.with(|u| u.post_search.clone())
                    on:input=move |ev| ui.update(|u| u.post_search = event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let category = event_target_value(&ev).parse::<CategoryFilter>().unwrap_or_default();
                    ui.update(|u| u.category = category);
                }>
                    <option value="all" selected=move || ui.with(|u| u.category == CategoryFilter::All)>"All Categories"</option>
                    <option value="blog" selected=move || ui.with(|u| u.category.as_str() == "blog")>"Blog"</option>
                    <option value="project" selected=move || ui.with(|u| u.category.as_str() == "project")>"Project"</option>
                </select>
                <select on:change=move |ev| {
                    let sort = PostSort::from_key(&event_target_value(&ev));
                    ui.update(|u| u.sort = sort);
                }>
                    {SORT_OPTIONS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <option value=key selected=move || ui.with(|u| u.sort.key() == key)>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="post-toolbar__modes">
                    <button
                        class="btn btn--ghost"
                        class:btn--active=move || view_mode() == ViewMode::Grid
                        on:click=move |_| ui.update(|u| u.view_mode = ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class="btn btn--ghost"
                        class:btn--active=move || view_mode() == ViewMode::List
                        on:click=move |_| ui.update(|u| u.view_mode = ViewMode::List)
                    >
                        "List"
                    </button>
                </div>
            </div>
            <div class="post-list" class:post-list--grid=move || view_mode() == ViewMode::Grid>
                {move || {
                    let list = posts();
                    if list.is_empty() {
                        let hint = if ui.with(AdminUi::is_filtering_posts) {
                            "No posts match the current filters."
                        } else {
                            "No posts yet. Create your first post."
                        };
                        return view! { <p class="admin-panel__empty">{hint}</p> }.into_any();
                    }
                    let editing = ui.with(|u| u.editing_post);
                    let mode = view_mode();
                    list.into_iter()
                        .map(|post| {
                            if editing == Some(post.id) {
                                let id = post.id;
                                let on_save = Callback::new(move |patch: PostPatch| {
                                    if try_apply(admin, toasts, AdminAction::SavePost(id, patch)) {
                                        ui.update(|u| u.editing_post = None);
                                    }
                                });
                                let on_cancel = Callback::new(move |()| ui.update(|u| u.editing_post = None));
                                view! { <PostEditor post=post on_save=on_save on_cancel=on_cancel/> }.into_any()
                            } else {
                                view! { <PostCard post=post view_mode=mode on_action=on_card/> }.into_any()
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <Show when=move || ui.with(|u| u.show_create_post)>
                <CreatePostDialog on_create=on_create on_close=on_close_create/>
            </Show>
            {move || {
                let id = ui.with(|u| u.pending_delete)?;
                let title = admin.with(|s| s.posts.get(id).map(|p| p.title.clone()))?;
                Some(view! { <DeleteConfirmation title=title on_confirm=on_confirm_delete on_cancel=on_cancel_delete/> })
            }}
            {move || {
                let id = code_target.get()?;
                let post = admin.with_untracked(|s| s.posts.get(id).cloned())?;
                let on_save = Callback::new(move |patch: PostPatch| {
                    if try_apply(admin, toasts, AdminAction::SavePost(id, patch)) {
                        ui.update(AdminUi::close_code_editor);
                    }
                });
                Some(
                    view! {
                        <CodeEditorDialog
                            post=post
                            preview=preview
                            preview_label=preview_label
                            on_toggle_preview=on_toggle_preview
                            on_save=on_save
                            on_close=on_close_code
                        />
                    },
                )
            }}
            {move || {
                let id = ui.with(|u| u.viewing_post)?;
                let post = admin.with(|s| s.posts.get(id).cloned())?;
                let close = move |_| ui.update(|u| u.viewing_post = None);
                Some(
                    view! {
                        <div class="dialog-backdrop" on:click=close>
                            <article class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                                {post.image.clone().map(|src| view! { <img class="dialog__image" src=src alt=""/> })}
                                <h2>{post.title}</h2>
                                <p class="dialog__meta">
                                    {format!("{} · {} · {}", post.category, post.date, if post.published { "Published" } else { "Draft" })}
                                </p>
                                <div class="dialog__content">{post.content}</div>
                                <div class="dialog__actions">
                                    <button class="btn btn--ghost" on:click=close>"Close"</button>
                                </div>
                            </article>
                        </div>
                    },
                )
            }}
        </section>
    }
}
