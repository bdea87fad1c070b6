//! Profile page: personal details, profile picture, password change, and
//! account deletion.

use leptos::prelude::*;
use models::user::validate_new_password;

use crate::components::image_cropper_modal::ImageCropperModal;
use crate::components::toast::use_toaster;
use crate::net::types::{ProfileForm, User};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::util::crop::CropRect;

/// Trimmed value, or `None` when blank.
pub(crate) fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn build_profile_form(
    name: &str,
    university: &str,
    specialty: &str,
    bio: &str,
    phone: &str,
) -> Result<ProfileForm, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name cannot be empty.");
    }
    Ok(ProfileForm {
        name: name.to_owned(),
        university: optional_field(university),
        specialty: optional_field(specialty),
        bio: optional_field(bio),
        phone: optional_field(phone),
    })
}

pub(crate) fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Enter your current password.");
    }
    validate_new_password(new)?;
    if new != confirm {
        return Err("Passwords do not match.");
    }
    if new == current {
        return Err("The new password must differ from the current one.");
    }
    Ok(())
}

pub(crate) fn validate_delete(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Enter your password to confirm.");
    }
    Ok(())
}

#[component]
pub fn ProfilePage(auth: RwSignal<AuthState>, avatar_version: RwSignal<u32>) -> impl IntoView {
    // Remount only when the signed-in account changes, not on every field edit.
    let user_id = Memo::new(move |_| auth.with(|s| s.user_id().map(str::to_owned)));

    view! {
        <div class="profile-page">
            {move || {
                user_id.get()?;
                let user = auth.get_untracked().user?;
                Some(view! {
                    <AvatarSection auth=auth avatar_version=avatar_version/>
                    <DetailsSection auth=auth user=user/>
                    <PasswordSection/>
                    <DeleteSection auth=auth/>
                })
            }}
        </div>
    }
}

#[component]
fn AvatarSection(auth: RwSignal<AuthState>, avatar_version: RwSignal<u32>) -> impl IntoView {
    let toaster = use_toaster();
    let cropper_src = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let picked = StoredValue::new_local(None::<web_sys::File>);

    let close_cropper = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = cropper_src.get_untracked() {
                crate::util::upload::revoke_object_url(&url);
            }
            picked.set_value(None);
        }
        cropper_src.set(None);
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::upload::selected_file(&ev) else {
                return;
            };
            if let Err(e) = crate::util::upload::validate_image(&file.type_(), file.size()) {
                toaster.push(ToastKind::Error, e.message());
                return;
            }
            match crate::util::upload::object_url(&file) {
                Some(url) => {
                    picked.set_value(Some(file));
                    cropper_src.set(Some(url));
                }
                None => toaster.push(ToastKind::Error, "This image could not be opened."),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, toaster);
    };

    let on_confirm = Callback::new(move |rect: CropRect| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked.get_value() else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                let result = match crate::util::crop::crop_to_jpeg(&file, rect).await {
                    Ok(blob) => {
                        crate::net::api::upload_avatar(&blob, crate::util::crop::OUTPUT_CONTENT_TYPE).await
                    }
                    Err(e) => Err(e.to_string()),
                };
                uploading.set(false);
                match result {
                    Ok(()) => {
                        auth.update(|state| {
                            if let Some(user) = state.user.as_mut() {
                                user.has_avatar = true;
                            }
                        });
                        avatar_version.update(|v| *v += 1);
                        close_cropper();
                        toaster.push(ToastKind::Success, "Profile photo updated.");
                    }
                    Err(e) => toaster.push(ToastKind::Error, e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (rect, auth, close_cropper);
    });

    let avatar = move || {
        let version = avatar_version.get();
        let (src, initials) = auth.with(|s| {
            s.user.as_ref().map_or((None, String::new()), |u| (u.avatar_url(version), u.initials()))
        });
        match src {
            Some(src) => view! { <img class="avatar avatar--lg" src=src alt="Profile photo"/> }.into_any(),
            None => view! { <span class="avatar avatar--lg avatar--initials">{initials}</span> }.into_any(),
        }
    };

    view! {
        <section class="profile-card profile-card--identity">
            {avatar}
            <div class="profile-card__identity">
                <label class="btn">
                    "Change photo"
                    <input class="visually-hidden" type="file" accept="image/jpeg,image/png,image/webp" on:change=on_file/>
                </label>
                <p class="profile-card__hint">"JPEG, PNG, or WebP, up to 2 MB."</p>
            </div>
            {move || {
                cropper_src
                    .get()
                    .map(|src| {
                        view! {
                            <ImageCropperModal
                                src=src
                                busy=uploading
                                on_cancel=Callback::new(move |()| close_cropper())
                                on_confirm=on_confirm
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn DetailsSection(auth: RwSignal<AuthState>, user: User) -> impl IntoView {
    let initial = ProfileForm::from_user(&user);
    let name = RwSignal::new(initial.name);
    let university = RwSignal::new(initial.university.unwrap_or_default());
    let specialty = RwSignal::new(initial.specialty.unwrap_or_default());
    let bio = RwSignal::new(initial.bio.unwrap_or_default());
    let phone = RwSignal::new(initial.phone.unwrap_or_default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let toaster = use_toaster();

    let school_names: Vec<String> = crate::state::catalog::shared()
        .map(|c| c.universities().iter().map(|u| u.name.clone()).collect())
        .unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match build_profile_form(&name.get(), &university.get(), &specialty.get(), &bio.get(), &phone.get()) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&form).await {
                Ok(updated) => {
                    auth.set(AuthState::signed_in(updated));
                    toaster.push(ToastKind::Success, "Profile saved.");
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, auth, toaster);
    };

    view! {
        <section class="profile-card">
            <h2>"Personal details"</h2>
            <p class="profile-card__meta">
                {user.email.clone()}
                {user.member_since.clone().map(|d| format!(" · Member since {d}"))}
            </p>
            <form class="profile-form" on:submit=on_submit>
                <label class="field">
                    <span>"Full name"</span>
                    <input class="input" type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"University"</span>
                    <input
                        class="input"
                        type="text"
                        list="school-names"
                        prop:value=move || university.get()
                        on:input=move |ev| university.set(event_target_value(&ev))
                    />
                    <datalist id="school-names">
                        {school_names.into_iter().map(|n| view! { <option value=n/> }).collect::<Vec<_>>()}
                    </datalist>
                </label>
                <label class="field">
                    <span>"Specialty"</span>
                    <input class="input" type="text" prop:value=move || specialty.get() on:input=move |ev| specialty.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span>"Phone"</span>
                    <input class="input" type="tel" prop:value=move || phone.get() on:input=move |ev| phone.set(event_target_value(&ev))/>
                </label>
                <label class="field field--wide">
                    <span>"Bio"</span>
                    <textarea class="input" rows="4" prop:value=move || bio.get() on:input=move |ev| bio.set(event_target_value(&ev))></textarea>
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let toaster = use_toaster();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (current_value, new_value) = (current.get(), new.get());
        if let Err(message) = validate_password_change(&current_value, &new_value, &confirm.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&current_value, &new_value).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    toaster.push(ToastKind::Success, "Password changed. Other sessions were signed out.");
                }
                Err(e) => error.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current_value, new_value, toaster);
    };

    let password_input = move |label: &'static str, autocomplete: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    class="input"
                    type="password"
                    autocomplete=autocomplete
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="profile-card">
            <h2>"Change password"</h2>
            <form class="profile-form" on:submit=on_submit>
                {password_input("Current password", "current-password", current)}
                {password_input("New password", "new-password", new)}
                {password_input("Confirm new password", "new-password", confirm)}
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Update password"</button>
            </form>
        </section>
    }
}

#[component]
fn DeleteSection(auth: RwSignal<AuthState>) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        if let Err(message) = validate_delete(&password_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_account(&password_value).await {
                Ok(()) => {
                    auth.set(AuthState::signed_out());
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href("/").is_err() {
                            log::warn!("redirect after account deletion failed");
                        }
                    }
                }
                Err(e) => {
                    error.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <section class="profile-card profile-card--danger">
            <h2>"Delete account"</h2>
            <p>"This permanently removes your account and profile photo."</p>
            <form class="profile-form" on:submit=on_submit>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        class="input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--danger" type="submit" disabled=move || busy.get()>"Delete my account"</button>
            </form>
        </section>
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
