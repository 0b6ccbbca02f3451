//! File input that reads an image into a `data:` URI.
//!
//! DESIGN
//! ======
//! Oversized or non-image files are rejected from their metadata and
//! reported as a destructive toast; the caller only ever sees a valid URI.

use leptos::prelude::*;

use crate::state::toast::ToastQueue;

#[component]
pub fn ImagePicker(
    on_pick: Callback<String>,
    #[prop(into, optional)] label: Option<String>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let label = label.unwrap_or_else(|| "Upload image".to_owned());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::toast::{Toast, notify};

            let Some(file) = crate::util::file::picked_file(&ev) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file::read_data_uri(file).await {
                    Ok(uri) => on_pick.run(uri),
                    Err(e) => notify(toasts, Toast::from_error(&e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, on_pick, toasts);
    };

    view! {
        <label class="image-picker">
            <span class="image-picker__label">{label}</span>
            <input class="image-picker__input" type="file" accept="image/*" id=id on:change=on_change/>
        </label>
    }
}
