//! Recipient table: search, sortable columns, pagination, and per-row
//! edit/remove actions.
//!
//! Renders from the domain list passed in by the page — row actions hand
//! the `Recipient` record (or its name) straight back to the caller, so
//! nothing is ever re-derived from the rendered DOM.

use leptos::prelude::*;

use crate::i18n;
use crate::net::types::Recipient;
use crate::state::table::{SortColumn, TableState};

/// The recipient list view.
///
/// `rows` is the latest full reload snapshot; `table` owns the
/// filter/sort/page state (persisted by the page). The three callbacks
/// fire for the header add button and the per-row actions.
#[component]
pub fn RecipientsTable(
    rows: Vec<Recipient>,
    table: RwSignal<TableState>,
    on_add: Callback<()>,
    on_edit: Callback<Recipient>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let no_rows_at_all = rows.is_empty();
    let rows = StoredValue::new(rows);
    let window = move || table.get().visible(&rows.get_value());

    let sort_marker = move |column: SortColumn| {
        let state = table.get();
        if state.sort != column {
            ""
        } else if state.ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    };

    view! {
        <div class="recipients-table">
            <div class="recipients-table__toolbar">
                <label class="recipients-table__search">
                    {i18n::SEARCH}
                    <input
                        type="text"
                        prop:value=move || table.get().filter.clone()
                        on:input=move |ev| {
                            table.update(|t| t.set_filter(event_target_value(&ev)));
                        }
                    />
                </label>
                <button
                    class="btn btn--link recipients-table__add"
                    title=i18n::ADD_RECIPIENT
                    on:click=move |_| on_add.run(())
                >
                    "+"
                </button>
            </div>

            <table>
                <thead>
                    <tr>
                        <th on:click=move |_| {
                            table.update(|t| t.toggle_sort(SortColumn::RecipientName));
                        }>
                            {i18n::COLUMN_RECIPIENT}
                            {move || sort_marker(SortColumn::RecipientName)}
                        </th>
                        <th on:click=move |_| {
                            table.update(|t| t.toggle_sort(SortColumn::EndpointConfName));
                        }>
                            {i18n::COLUMN_ENDPOINT}
                            {move || sort_marker(SortColumn::EndpointConfName)}
                        </th>
                        <th class="recipients-table__actions-col">{i18n::COLUMN_ACTIONS}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let view_window = window();
                        if no_rows_at_all {
                            view! {
                                <tr>
                                    <td colspan="3" class="recipients-table__empty">
                                        {i18n::CREATE_ENDPOINT_FIRST}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else if view_window.total == 0 {
                            view! {
                                <tr>
                                    <td colspan="3" class="recipients-table__empty">
                                        {i18n::NO_MATCHING_ROWS}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            view_window
                                .rows
                                .into_iter()
                                .map(|r| {
                                    let name = r.recipient_name.clone();
                                    let endpoint_name =
                                        r.endpoint_conf.endpoint_conf_name.clone();
                                    let edit_target = r;
                                    let remove_target = name.clone();
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{endpoint_name}</td>
                                            <td class="recipients-table__actions">
                                                <button
                                                    class="badge badge--info"
                                                    on:click=move |_| on_edit.run(edit_target.clone())
                                                >
                                                    {i18n::EDIT}
                                                </button>
                                                <button
                                                    class="badge badge--danger"
                                                    on:click=move |_| {
                                                        on_remove.run(remove_target.clone());
                                                    }
                                                >
                                                    {i18n::REMOVE}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>

            <div class="recipients-table__footer">
                <span class="recipients-table__summary">
                    {move || {
                        let v = window();
                        i18n::showing_rows(v.first_row, v.last_row, v.total)
                    }}
                </span>
                {move || pagination(table, window().page, window().page_count)}
            </div>
        </div>
    }
}

/// Full-numbers pagination: first/prev, one button per page, next/last.
fn pagination(table: RwSignal<TableState>, page: usize, page_count: usize) -> impl IntoView {
    let last = page_count.saturating_sub(1);
    let goto = move |p: usize| table.update(|t| t.page = p);

    view! {
        <nav class="recipients-table__pager">
            <button prop:disabled={page == 0} on:click=move |_| goto(0)>
                "\u{ab}"
            </button>
            <button prop:disabled={page == 0} on:click=move |_| goto(page.saturating_sub(1))>
                "<"
            </button>
            {(0..page_count)
                .map(|p| {
                    let current = p == page;
                    view! {
                        <button
                            class={if current { "pager__page pager__page--current" } else { "pager__page" }}
                            prop:disabled=current
                            on:click=move |_| goto(p)
                        >
                            {p + 1}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <button prop:disabled={page >= last} on:click=move |_| goto((page + 1).min(last))>
                ">"
            </button>
            <button prop:disabled={page >= last} on:click=move |_| goto(last)>
                "\u{bb}"
            </button>
        </nav>
    }
}
