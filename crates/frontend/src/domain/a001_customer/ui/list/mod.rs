pub mod detail;
pub mod state;

use chrono::Utc;
use contracts::domain::a001_customer::aggregate::CustomerDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use self::detail::CustomerDetailModal;
use self::state::{
    create_state, delete_confirmation, CustomerListState, ListRequest, DELETE_ERROR, EXPORT_ERROR,
};
use crate::domain::a001_customer::api;
use crate::shared::api_utils::ApiClient;
use crate::shared::banner::{flash_error, Banner, StatusBanner};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::date_utils::{file_timestamp, format_date};
use crate::shared::debounce::after_delay;
use crate::shared::export::{download_bytes, PDF_MIME};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::request_seq::ResponseOutcome;
use crate::system::auth::context::use_session;

/// Runs a list request and feeds the response back into the state
fn spawn_fetch(
    state: RwSignal<CustomerListState>,
    banner: RwSignal<Banner>,
    client: ApiClient,
    request: ListRequest,
) {
    spawn_local(async move {
        let result = api::list(&client, &request.query).await;
        let outcome = state.try_update(|s| s.apply_page(request.token, result));
        match outcome {
            Some(ResponseOutcome::Failed(message)) => flash_error(banner, message),
            Some(ResponseOutcome::Applied) => {
                if let Some(next) = state.try_update(|s| s.refetch_clamped()).flatten() {
                    spawn_fetch(state, banner, client, next);
                }
            }
            _ => {}
        }
    });
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let state = create_state();
    let banner = RwSignal::new(Banner::default());
    let exporting = RwSignal::new(false);

    let run = move |request: Option<ListRequest>| {
        if let Some(request) = request {
            spawn_fetch(state, banner, session.api_client(), request);
        }
    };

    // initial page
    run(state.try_update(|s| s.load()));

    let on_search = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        if let Some(ticket) = state.try_update(|s| s.search_input(text)) {
            after_delay(SEARCH_DEBOUNCE_MS, move || {
                run(state.try_update(|s| s.settle_search(ticket)).flatten());
            });
        }
    };

    let refresh = move |_: leptos::ev::MouseEvent| {
        banner.update(|b| b.clear());
        run(state.try_update(|s| s.refresh()));
    };

    let export_pdf = move |_: leptos::ev::MouseEvent| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        let client = session.api_client();
        spawn_local(async move {
            let saved = match api::export_pdf(&client).await {
                Ok(bytes) => {
                    let filename = format!("Customers_{}.pdf", file_timestamp(Utc::now()));
                    download_bytes(&bytes, PDF_MIME, &filename)
                }
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = saved {
                log::error!("customer export: {}", e);
                flash_error(banner, EXPORT_ERROR);
            }
            let _ = exporting.try_set(false);
        });
    };

    let view_customer = move |id: String| {
        let Some(token) = state.try_update(|s| s.open_detail(&id)) else {
            return;
        };
        let client = session.api_client();
        spawn_local(async move {
            let result = api::get_by_id(&client, &id).await;
            let outcome = state.try_update(|s| s.apply_detail(token, result));
            if let Some(ResponseOutcome::Failed(message)) = outcome {
                flash_error(banner, message);
            }
        });
    };

    let delete_customer = move |customer: CustomerDto| {
        let confirmed = window()
            .confirm_with_message(&delete_confirmation(&customer.full_name))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let client = session.api_client();
        spawn_local(async move {
            match api::delete(&client, &customer.id).await {
                Ok(()) => {
                    if let Some(request) = state.try_update(|s| s.after_delete(&customer.id)) {
                        spawn_fetch(state, banner, client, request);
                    }
                }
                Err(e) => {
                    log::error!("delete customer {}: {}", customer.id, e);
                    flash_error(banner, DELETE_ERROR);
                }
            }
        });
    };

    let add_customer = Callback::new({
        let navigate = navigate.clone();
        move |_: ()| navigate("/customer", Default::default())
    });

    let edit_customer = Callback::new(move |id: String| {
        state.update(|s| s.close_detail());
        navigate(&format!("/customer/{}", id), Default::default());
    });

    let pagination = Signal::derive(move || state.with(|s| s.pagination));
    let page_size = Signal::derive(move || state.with(|s| s.page_size));
    let on_page_change = Callback::new(move |page: usize| {
        run(state.try_update(|s| s.go_to_page(page)).flatten())
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        run(state.try_update(|s| s.set_page_size(size)).flatten())
    });

    let rows = move || state.with(|s| s.items.clone());
    let is_admin = move || session.is_admin();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge>{move || state.with(|s| s.pagination.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=is_admin>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| add_customer.run(())
                        >
                            {icon("user-plus")}
                            " Add Customer"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=export_pdf
                            disabled=Signal::derive(move || exporting.get())
                        >
                            {icon("download")}
                            {move || if exporting.get() { " Exporting..." } else { " Export PDF" }}
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=refresh>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <StatusBanner banner=banner />

                <div class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        class="search-box__input"
                        placeholder="Search by name or national ID..."
                        prop:value=move || state.with(|s| s.search_input.clone())
                        on:input=on_search
                    />
                </div>

                <Show when=move || state.with(|s| s.is_loading && s.items.is_empty())>
                    <div class="page__loading">
                        <Spinner />
                        <span>"Loading customers..."</span>
                    </div>
                </Show>

                <Show when=move || state.with(|s| s.is_empty())>
                    <div class="page__empty">
                        {move || {
                            let term = state.with(|s| s.search_term().to_string());
                            if term.is_empty() {
                                "No customers yet.".to_string()
                            } else {
                                format!("No customers match \"{}\".", term)
                            }
                        }}
                    </div>
                </Show>

                <Show when=move || state.with(|s| !s.items.is_empty())>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Full Name"</TableHeaderCell>
                                    <TableHeaderCell>"National ID"</TableHeaderCell>
                                    <TableHeaderCell>"Gender"</TableHeaderCell>
                                    <TableHeaderCell>"Governorate"</TableHeaderCell>
                                    <TableHeaderCell>"Birth Date"</TableHeaderCell>
                                    <TableHeaderCell>"Salary"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || rows().into_iter().map(|customer| {
                                    let id_for_view = customer.id.clone();
                                    let id_for_edit = customer.id.clone();
                                    let for_delete = customer.clone();
                                    let full_name = customer.full_name.clone();
                                    let national_id = customer.national_id.clone();
                                    let gender = customer.gender_name().unwrap_or_else(|| "-".to_string());
                                    let governorate = customer.governorate_name().unwrap_or_else(|| "-".to_string());
                                    let birth_date = format_date(&customer.birth_date);
                                    let salary = format_currency(customer.salary);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {full_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{national_id}</TableCell>
                                            <TableCell>{gender}</TableCell>
                                            <TableCell>{governorate}</TableCell>
                                            <TableCell>{birth_date}</TableCell>
                                            <TableCell>{salary}</TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="table__icon-btn"
                                                        title="View"
                                                        on:click=move |_| view_customer(id_for_view.clone())
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <button
                                                        class="table__icon-btn"
                                                        title="Edit"
                                                        on:click=move |_| edit_customer.run(id_for_edit.clone())
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="table__icon-btn table__icon-btn--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_customer(for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </Show>

                <PaginationControls
                    pagination=pagination
                    page_size=page_size
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                />
            </div>

            <Show when=move || state.with(|s| s.detail.is_open())>
                <CustomerDetailModal
                    state=state
                    on_edit=edit_customer
                    on_delete=Callback::new(move |customer: CustomerDto| delete_customer(customer))
                />
            </Show>
        </div>
    }
}
