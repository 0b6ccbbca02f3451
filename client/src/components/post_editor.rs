//! Post forms: the create-post dialog, the inline editor and the full-screen
//! code editor with its live preview.
//!
//! Both forms only collect input. Validation happens in the content store and
//! comes back as a toast, so the forms stay open on a rejected submit.

use content::posts::{Category, Post, PostDraft, PostPatch};
use leptos::prelude::*;

use super::image_picker::ImagePicker;

#[cfg(test)]
#[path = "post_editor_test.rs"]
mod post_editor_test;

fn category_from(value: &str) -> Category {
    value.parse().unwrap_or_default()
}

#[component]
pub fn CreatePostDialog(on_create: Callback<PostDraft>, on_close: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let category = RwSignal::new(Category::Blog);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_create.run(PostDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            image: Some(image.get_untracked()),
            category: category.get_untracked(),
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--wide"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                on:submit=on_submit
            >
                <h2>"Create New Post"</h2>
                <label class="field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        placeholder="Post title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Category"</span>
                    <select on:change=move |ev| category.set(category_from(&event_target_value(&ev)))>
                        <option value="blog" selected=move || category.get() == Category::Blog>"Blog"</option>
                        <option value="project" selected=move || category.get() == Category::Project>"Project"</option>
                    </select>
                </label>
                <label class="field">
                    <span>"Image URL"</span>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || image.get()
                        on:input=move |ev| image.set(event_target_value(&ev))
                    />
                </label>
                <ImagePicker label="Or upload an image" on_pick=Callback::new(move |uri| image.set(uri))/>
                <label class="field">
                    <span>"Content"</span>
                    <textarea
                        rows="8"
                        placeholder="Write your post..."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">"Create Post"</button>
                </div>
            </form>
        </div>
    }
}

/// Inline editor for one post. Sends every field; the store keeps the id and
/// date.
#[component]
pub fn PostEditor(post: Post, on_save: Callback<PostPatch>, on_cancel: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(post.title);
    let content = RwSignal::new(post.content);
    let image = RwSignal::new(post.image.unwrap_or_default());
    let category = RwSignal::new(post.category);
    let published = RwSignal::new(post.published);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let image = image.get_untracked();
        on_save.run(PostPatch {
            title: Some(title.get_untracked()),
            content: Some(content.get_untracked()),
            image: Some((!image.trim().is_empty()).then_some(image)),
            category: Some(category.get_untracked()),
            published: Some(published.get_untracked()),
        });
    };

    view! {
        <form class="post-editor" on:submit=on_submit>
            <input
                class="post-editor__title"
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <div class="post-editor__row">
                <select on:change=move |ev| category.set(category_from(&event_target_value(&ev)))>
                    <option value="blog" selected=move || category.get() == Category::Blog>"Blog"</option>
                    <option value="project" selected=move || category.get() == Category::Project>"Project"</option>
                </select>
                <label class="post-editor__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || published.get()
                        on:change=move |ev| published.set(event_target_checked(&ev))
                    />
                    "Published"
                </label>
            </div>
            <input
                type="url"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| image.set(event_target_value(&ev))
            />
            <ImagePicker label="Replace image" on_pick=Callback::new(move |uri| image.set(uri))/>
            <textarea
                rows="10"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <div class="post-editor__actions">
                <button type="button" class="btn btn--ghost" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">"Save"</button>
            </div>
        </form>
    }
}

/// Full-screen editor for title, category and body. With `preview` on, a
/// second pane renders the post the way visitors will see it while typing.
#[component]
pub fn CodeEditorDialog(
    post: Post,
    #[prop(into)] preview: Signal<bool>,
    #[prop(into)] preview_label: Signal<&'static str>,
    on_toggle_preview: Callback<()>,
    on_save: Callback<PostPatch>,
    on_close: Callback<()>,
) -> impl IntoView {
    let heading = format!("Editing: {}", post.title);
    let date = post.date.to_string();
    let image = post.image;
    let title = RwSignal::new(post.title);
    let content = RwSignal::new(post.content);
    let category = RwSignal::new(post.category);

    let save = move |_| {
        on_save.run(PostPatch {
            title: Some(title.get_untracked()),
            content: Some(content.get_untracked()),
            category: Some(category.get_untracked()),
            ..PostPatch::default()
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--editor"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <div>
                        <h2>"Code Editor"</h2>
                        <p class="dialog__hint">{heading}</p>
                    </div>
                    <div class="code-editor__controls">
                        <button type="button" class="btn btn--ghost" on:click=move |_| on_toggle_preview.run(())>
                            {move || preview_label.get()}
                        </button>
                        <button type="button" class="btn btn--primary" on:click=save>"Save"</button>
                        <button type="button" class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                </header>
                <div class="code-editor" class:code-editor--split=move || preview.get()>
                    <div class="code-editor__form">
                        <div class="post-editor__row">
                            <input
                                type="text"
                                placeholder="Post Title"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                            <select on:change=move |ev| category.set(category_from(&event_target_value(&ev)))>
                                <option value="blog" selected=move || category.get() == Category::Blog>"Blog"</option>
                                <option value="project" selected=move || category.get() == Category::Project>
                                    "Project"
                                </option>
                            </select>
                        </div>
                        <textarea
                            class="code-editor__source"
                            placeholder="Write your content here..."
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <Show when=move || preview.get()>
                        <article class="code-editor__preview">
                            <h4>"Live Preview"</h4>
                            {image.clone().map(|src| view! { <img class="dialog__image" src=src alt=""/> })}
                            <div class="post-card__meta">
                                <span class="badge">{move || category.get().as_str()}</span>
                                <span class="post-card__date">{date.clone()}</span>
                            </div>
                            <h3>{move || title.with(|t| preview_text(t, "Untitled Post"))}</h3>
                            <p class="code-editor__body">{move || content.with(|c| preview_text(c, "No content yet..."))}</p>
                        </article>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// `text`, or `placeholder` while `text` is still blank.
pub(crate) fn preview_text(text: &str, placeholder: &str) -> String {
    if text.trim().is_empty() { placeholder.to_owned() } else { text.to_owned() }
}
