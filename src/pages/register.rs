//! Registration page with local password confirmation.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert_box::AlertBox;
use crate::state::auth::{AuthFormState, Credentials, submit_registration, validate_registration};
use crate::util::nav::{Page, follow_redirect, router_navigator};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (store, backend) = super::page_services();
    if !super::run_entry_guard(&store, Page::Register).should_render() {
        return ().into_any();
    }

    let navigator = router_navigator();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(AuthFormState::is_busy) {
            return;
        }

        let credentials =
            Credentials::registration(email.get_untracked(), password.get_untracked(), confirm.get_untracked());

        // Mismatch is settled synchronously; the form never enters Submitting.
        if let Err(outcome) = validate_registration(&credentials) {
            form.update(|f| f.finish(&outcome));
            return;
        }

        form.update(AuthFormState::begin);
        let backend = backend.clone();
        let navigator = navigator.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_registration(&backend, credentials).await;
            form.update(|f| f.finish(&outcome));
            if let Some(redirect) = outcome.redirect {
                follow_redirect(redirect, &navigator).await;
            }
        });
    };

    view! {
        <Title text="Register"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
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
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(AuthFormState::is_busy)>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=Page::Login.path()>"Login"</a>
                </p>
            </div>
        </div>
    }
    .into_any()
}
