//! Admin user table: search, role changes, and deletion.

use leptos::prelude::*;
use models::user::Role;

use crate::components::pagination::Pagination;
use crate::components::toast::use_toaster;
use crate::net::types::User;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;

/// Admins may not change or delete their own account from this table.
pub(crate) fn can_modify(actor_id: Option<&str>, target_id: &str) -> bool {
    actor_id.is_some_and(|id| id != target_id)
}

/// Ask the browser for confirmation. Always true outside the browser.
pub(crate) fn confirm_action(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}

#[component]
pub fn AdminUsersPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let draft = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    let users = LocalResource::new(move || {
        let (page, q) = (page.get(), query.get());
        reload.track();
        async move { crate::net::api::fetch_admin_users(page, &q).await }
    });
    let total_pages = Signal::derive(move || users.get().and_then(Result::ok).map_or(0, |p| p.total_pages));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(draft.get().trim().to_owned());
        page.set(1);
    };

    let refresh = move || reload.update(|n| *n += 1);

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Users"</h1>
            </header>
            <form class="filter-bar" on:submit=on_search>
                <input
                    class="input filter-bar__search"
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
            </form>
            <Suspense fallback=move || view! { <p class="loading">"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="form-error">{e}</p> }.into_any(),
                            Ok(list) => view! {
                                <p class="result-count">{format!("{} users", list.total)}</p>
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Member since"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .items
                                            .into_iter()
                                            .map(|user| view! { <UserRow user=user auth=auth on_changed=Callback::new(move |()| refresh())/> })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
            <Pagination current=page total=total_pages on_change=Callback::new(move |p| page.set(p))/>
        </div>
    }
}

#[component]
fn UserRow(user: User, auth: RwSignal<AuthState>, on_changed: Callback<()>) -> impl IntoView {
    let editable = auth.with_untracked(|s| can_modify(s.user_id(), &user.id));
    let id = StoredValue::new(user.id.clone());
    let busy = RwSignal::new(false);
    let toaster = use_toaster();

    let on_role = move |ev: leptos::ev::Event| {
        let Some(role) = Role::parse(&event_target_value(&ev)) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_user_role(&id.get_value(), role).await {
                Ok(updated) => toaster.push(ToastKind::Success, format!("{} is now {}.", updated.name, role.as_str())),
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
            on_changed.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (role, id, on_changed, toaster);
    };

    let name = user.name.clone();
    let on_delete = move |_| {
        if !confirm_action(&format!("Delete {name}? This cannot be undone.")) {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&id.get_value()).await {
                Ok(()) => toaster.push(ToastKind::Success, "User deleted."),
                Err(e) => toaster.push(ToastKind::Error, e),
            }
            busy.set(false);
            on_changed.run(());
        });
    };

    let current_role = user.role.as_str();
    view! {
        <tr>
            <td>{user.name.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>
                <select class="select" prop:value=current_role disabled=move || !editable || busy.get() on:change=on_role>
                    <option value=Role::User.as_str()>"user"</option>
                    <option value=Role::Admin.as_str()>"admin"</option>
                </select>
            </td>
            <td>{user.member_since.clone().unwrap_or_default()}</td>
            <td>
                <button class="btn btn--danger btn--sm" disabled=move || !editable || busy.get() on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;
