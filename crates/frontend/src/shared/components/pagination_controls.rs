use contracts::shared::pagination::PaginationInfo;
use leptos::prelude::*;

use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::icons::icon;

/// PaginationControls component - previous/next, a window of at most five
/// page buttons and a page-size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<PaginationInfo>,

    /// Requested page size, ahead of the one the last response reports
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback with the requested page number
    on_page_change: Callback<usize>,

    /// Callback with the new page size
    on_page_size_change: Callback<usize>,

    /// Hide page buttons when everything fits on one page (default: true)
    #[prop(optional)]
    hide_single_page: Option<bool>,
) -> impl IntoView {
    let hide_single_page = hide_single_page.unwrap_or(true);
    let show_pages = move || !hide_single_page || pagination.get().total_pages > 1;

    view! {
        <div class="pagination-controls">
            <Show when=show_pages>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let info = pagination.get();
                        if info.has_previous {
                            on_page_change.run(info.current_page - 1);
                        }
                    }
                    disabled=move || !pagination.get().has_previous
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let info = pagination.get();
                    info.page_window()
                        .into_iter()
                        .map(|page| {
                            let is_current = page == info.current_page;
                            view! {
                                <button
                                    class=if is_current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                    aria-current=if is_current { Some("page") } else { None }
                                    on:click=move |_| {
                                        if !is_current {
                                            on_page_change.run(page);
                                        }
                                    }
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let info = pagination.get();
                        if info.has_next {
                            on_page_change.run(info.current_page + 1);
                        }
                    }
                    disabled=move || !pagination.get().has_next
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </Show>
            <span class="pagination-info">
                {move || {
                    let info = pagination.get();
                    format!(
                        "Page {} of {} ({} total)",
                        info.current_page, info.total_pages, info.total_count
                    )
                }}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
