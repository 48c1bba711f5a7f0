use contracts::domain::a002_lookup::aggregate::LookupItem;
use leptos::prelude::*;
use thaw::*;

use super::model::{CustomerForm, Field, FormPhase};
use super::view_model::CustomerFormViewModel;
use crate::shared::banner::StatusBanner;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

fn field_error(vm: CustomerFormViewModel, field: Field) -> impl IntoView {
    move || {
        vm.form
            .with(|f| f.error_for(field))
            .map(|message| view! { <div class="field-error">{message}</div> })
    }
}

/// Text-like input bound to one form field
fn input_field(
    vm: CustomerFormViewModel,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    read: fn(&CustomerForm) -> String,
    write: fn(&mut CustomerForm, String),
) -> impl IntoView {
    let id = format!("customer-{:?}", field).to_lowercase();
    view! {
        <div
            class="form-group"
            class=("form-group--invalid", move || vm.form.with(|f| f.error_for(field).is_some()))
        >
            <label for=id.clone()>{field.label()}</label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || vm.form.with(read)
                on:input=move |ev| vm.form.update(|f| write(f, event_target_value(&ev)))
                on:blur=move |_| vm.touch(field)
                disabled=move || vm.form.with(|f| !f.is_editable())
            />
            {field_error(vm, field)}
        </div>
    }
}

/// Dropdown over lookup items; `enabled` already accounts for the cascade
fn select_field(
    vm: CustomerFormViewModel,
    field: Field,
    options: fn(&CustomerForm) -> Vec<LookupItem>,
    selected: fn(&CustomerForm) -> String,
    enabled: fn(&CustomerForm) -> bool,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    let id = format!("customer-{:?}", field).to_lowercase();
    view! {
        <div
            class="form-group"
            class=("form-group--invalid", move || vm.form.with(|f| f.error_for(field).is_some()))
        >
            <label for=id.clone()>{field.label()}</label>
            <select
                id=id
                on:change=move |ev| on_change(event_target_value(&ev))
                on:blur=move |_| vm.touch(field)
                disabled=move || vm.form.with(|f| !f.is_editable() || !enabled(f))
            >
                <option value="" selected=move || vm.form.with(selected).is_empty()>
                    {format!("Select {}", field.label())}
                </option>
                {move || {
                    let current = vm.form.with(selected);
                    vm.form
                        .with(options)
                        .into_iter()
                        .map(|item| {
                            let is_selected = item.id == current;
                            view! { <option value=item.id selected=is_selected>{item.name}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {field_error(vm, field)}
        </div>
    }
}

#[component]
pub fn CustomerDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerFormViewModel::new(use_session(), id);
    vm.load();

    let is_edit = move || vm.form.with(|f| f.is_edit());
    let phase = move || vm.form.with(|f| f.phase);

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{move || if is_edit() { "Edit Customer" } else { "Add Customer" }}</h3>
            </div>

            <StatusBanner banner=vm.banner />

            <Show when=move || phase() == FormPhase::Loading>
                <div class="details-loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            </Show>

            <form
                class="details-form"
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(move || on_saved.run(()));
                }
            >
                {input_field(
                    vm,
                    Field::FullName,
                    "text",
                    "Enter full name",
                    |f| f.full_name.clone(),
                    |f, v| f.full_name = v,
                )}
                {input_field(
                    vm,
                    Field::NationalId,
                    "text",
                    "14 digits",
                    |f| f.national_id.clone(),
                    |f, v| f.national_id = v,
                )}
                {select_field(
                    vm,
                    Field::Gender,
                    |f| f.genders.clone(),
                    |f| f.gender.clone(),
                    |_| true,
                    move |v| vm.form.update(|f| {
                        f.gender = v;
                        f.touch(Field::Gender);
                    }),
                )}
                {input_field(
                    vm,
                    Field::BirthDate,
                    "date",
                    "",
                    |f| f.birth_date.clone(),
                    |f, v| f.birth_date = v,
                )}
                {select_field(
                    vm,
                    Field::Governorate,
                    |f| f.location.governorates.clone(),
                    |f| f.location.governorate.clone(),
                    |_| true,
                    move |v| vm.select_governorate(v),
                )}
                {select_field(
                    vm,
                    Field::District,
                    |f| f.location.districts.options.clone(),
                    |f| f.location.districts.selected.clone(),
                    |f| f.location.districts.enabled,
                    move |v| vm.select_district(v),
                )}
                {select_field(
                    vm,
                    Field::Village,
                    |f| f.location.villages.options.clone(),
                    |f| f.location.villages.selected.clone(),
                    |f| f.location.villages.enabled,
                    move |v| vm.select_village(v),
                )}
                {input_field(
                    vm,
                    Field::Salary,
                    "number",
                    "0.00",
                    |f| f.salary.clone(),
                    |f, v| f.salary = v,
                )}

                <div class="details-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.form.with(|f| !f.is_editable())
                    >
                        {icon("save")}
                        {move || match (phase(), is_edit()) {
                            (FormPhase::Submitting, _) => " Saving...",
                            (_, true) => " Update Customer",
                            (_, false) => " Create Customer",
                        }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
