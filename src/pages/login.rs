//! Login page: email + password exchanged for a bearer token.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert_box::AlertBox;
use crate::state::auth::{AuthFormState, Credentials, submit_login};
use crate::util::nav::{Page, follow_redirect, router_navigator};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (store, backend) = super::page_services();
    if !super::run_entry_guard(&store, Page::Login).should_render() {
        return ().into_any();
    }

    let navigator = router_navigator();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(AuthFormState::is_busy) {
            return;
        }
        form.update(AuthFormState::begin);

        let credentials = Credentials::login(email.get_untracked(), password.get_untracked());
        let backend = backend.clone();
        let store = store.clone();
        let navigator = navigator.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_login(&backend, &store, credentials).await;
            form.update(|f| f.finish(&outcome));
            if let Some(redirect) = outcome.redirect {
                follow_redirect(redirect, &navigator).await;
            }
        });
    };

    view! {
        <Title text="Login"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <AlertBox alert=Signal::derive(move || form.get().alert)/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(AuthFormState::is_busy)>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=Page::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
    .into_any()
}
