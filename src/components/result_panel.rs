//! Query result rendering: table (or empty notice) plus the generated SQL.

use leptos::prelude::*;

use crate::state::console::{NO_RESULTS_MESSAGE, ResultTable, ResultView};

/// Result table followed by the generated query, shown as plain text.
#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    let ResultView { table, generated_query, params } = result;

    let body = match table {
        Some(table) => view! { <ResultGrid table=table/> }.into_any(),
        None => view! { <p class="results__empty">{NO_RESULTS_MESSAGE}</p> }.into_any(),
    };

    view! {
        <div class="results">
            {body}
            <div class="results__sql">
                <h3>"SQL Query:"</h3>
                <pre class="results__sql-text">{generated_query}</pre>
                {params
                    .map(|p| {
                        view! {
                            <h4>"Parameters:"</h4>
                            <pre class="results__params">{p}</pre>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ResultGrid(table: ResultTable) -> impl IntoView {
    let ResultTable { columns, rows } = table;

    view! {
        <table class="results__table">
            <thead>
                <tr>
                    {columns.into_iter().map(|col| view! { <th>{col}</th> }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
