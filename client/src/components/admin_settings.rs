//! Settings tab: profile picture and session.

use leptos::prelude::*;

use super::image_picker::ImagePicker;
use crate::state::toast::{Toast, ToastQueue, notify};
use crate::state::ui::AdminUi;

#[component]
pub fn SettingsPanel(on_logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<AdminUi>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let on_pick = Callback::new(move |uri: String| {
        ui.update(|u| u.profile_picture = Some(uri));
        notify(toasts, Toast::info("Profile Picture Updated! 📸", "Your profile picture has been updated successfully."));
    });

    view! {
        <section class="admin-panel admin-panel--settings">
            <h2>"Profile Settings"</h2>
            <div class="profile">
                <img class="profile__avatar" src=move || ui.with(|u| u.profile_picture().to_owned()) alt="Profile"/>
                <ImagePicker label="Update Photo" id="profile-pic-upload" on_pick=on_pick/>
            </div>
            <h2>"Session"</h2>
            <p>"Signing out clears the admin flag stored in this browser."</p>
            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </section>
    }
}
