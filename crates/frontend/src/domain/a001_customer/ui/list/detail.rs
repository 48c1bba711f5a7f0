use contracts::domain::a001_customer::aggregate::CustomerDto;
use leptos::prelude::*;
use thaw::*;

use super::state::{CustomerListState, DetailModal};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_currency;

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}

/// Read-only view of one customer, fetched when the modal opens
#[component]
pub fn CustomerDetailModal(
    state: RwSignal<CustomerListState>,
    on_edit: Callback<String>,
    on_delete: Callback<CustomerDto>,
) -> impl IntoView {
    let close = Callback::new(move |_: ()| state.update(|s| s.close_detail()));

    let detail = Memo::new(move |_| state.with(|s| s.detail.clone()));

    let body = move || match detail.get() {
        DetailModal::Closed => ().into_any(),
        DetailModal::Loading { .. } => view! {
            <div class="modal__loading">
                <Spinner />
                <span>"Loading customer details..."</span>
            </div>
        }
        .into_any(),
        DetailModal::Loaded(customer) => {
            let id_for_edit = customer.id.clone();
            let for_delete = customer.clone();
            view! {
                <dl class="details-grid">
                    <dt>"Full Name"</dt>
                    <dd>{customer.full_name.clone()}</dd>
                    <dt>"National ID"</dt>
                    <dd>{customer.national_id.clone()}</dd>
                    <dt>"Gender"</dt>
                    <dd>{or_dash(customer.gender_name())}</dd>
                    <dt>"Birth Date"</dt>
                    <dd>{format_date(&customer.birth_date)}</dd>
                    <dt>"Age"</dt>
                    <dd>{or_dash(customer.age.map(|a| a.to_string()))}</dd>
                    <dt>"Governorate"</dt>
                    <dd>{or_dash(customer.governorate_name())}</dd>
                    <dt>"District"</dt>
                    <dd>{or_dash(customer.district_name())}</dd>
                    <dt>"Village"</dt>
                    <dd>{or_dash(customer.village_name())}</dd>
                    <dt>"Salary"</dt>
                    <dd>{format_currency(customer.salary)}</dd>
                    <dt>"Status"</dt>
                    <dd>
                        {if customer.is_active {
                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                        } else {
                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge> }.into_any()
                        }}
                    </dd>
                    <dt>"Created"</dt>
                    <dd>
                        {customer.created_date.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string())}
                    </dd>
                    <dt>"Created By"</dt>
                    <dd>{or_dash(customer.created_by.clone())}</dd>
                </dl>
                <div class="modal__footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_edit.run(id_for_edit.clone())
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_delete.run(for_delete.clone())
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                    <Button on_click=move |_| close.run(())>"Close"</Button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <ModalFrame on_close=close modal_class="customer-details-modal".to_string()>
            <div class="modal__header">
                <h2 class="modal__title">"Customer Details"</h2>
                <button class="modal__close" title="Close" on:click=move |_| close.run(())>
                    {icon("x")}
                </button>
            </div>
            <div class="modal__body">{body}</div>
        </ModalFrame>
    }
}
