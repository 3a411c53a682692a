//! Dashboard page: signed-in identity, query console, and logout.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::result_panel::ResultPanel;
use crate::state::console::{
    ConsoleState, EMPTY_QUERY_MESSAGE, LOADING_MESSAGE, check_query_input, logout, run_query,
};
use crate::util::nav::{Page, router_navigator};

/// Dashboard page. Redirects to login before rendering anything when there
/// is no stored session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (store, backend) = super::page_services();
    let entry = super::run_entry_guard(&store, Page::Dashboard);
    let Some(session) = entry.session().cloned() else {
        return ().into_any();
    };

    let navigator = router_navigator();
    let identity = session.identity.clone();
    let query = RwSignal::new(String::new());
    let console = RwSignal::new(ConsoleState::default());

    // Independent of query state: works mid-request and after failures.
    let on_logout = move |_| logout(&store, &navigator);

    let submit = Callback::new(move |()| {
        let input = query.get_untracked();
        if let Err(prompt) = check_query_input(&input) {
            console.set(prompt);
            return;
        }

        console.set(ConsoleState::Loading);
        let backend = backend.clone();
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let next = run_query(&backend, &session, &input).await;
            console.set(next);
        });
    });

    let results = move || match console.get() {
        ConsoleState::Idle => ().into_any(),
        ConsoleState::Prompt => view! { <p class="console__notice">{EMPTY_QUERY_MESSAGE}</p> }.into_any(),
        ConsoleState::Loading => view! { <p class="console__notice">{LOADING_MESSAGE}</p> }.into_any(),
        ConsoleState::Rendered(result) => view! { <ResultPanel result=result/> }.into_any(),
        ConsoleState::Failed(message) => view! { <p class="console__error">{message}</p> }.into_any(),
    };

    view! {
        <Title text="Dashboard"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__identity">{identity}</span>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <section class="console">
                <textarea
                    class="console__input"
                    rows="3"
                    placeholder="Ask a question about your data..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                ></textarea>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Run Query"
                </button>
                <div
                    class="console__results"
                    aria-busy=move || console.with(ConsoleState::is_loading).to_string()
                >
                    {results}
                </div>
            </section>
        </div>
    }
    .into_any()
}
