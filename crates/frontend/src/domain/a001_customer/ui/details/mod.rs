//! Customer create/edit form
//!
//! - cascade.rs: governorate → district → village dropdown state
//! - model.rs: form state, validation and payload building
//! - view_model.rs: async commands (load, cascade fetches, save)
//! - view.rs: Leptos component

pub mod cascade;
pub mod model;
mod view;
mod view_model;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

pub use view::CustomerDetails;
pub use view_model::CustomerFormViewModel;

use crate::shared::config::SAVE_REDIRECT_DELAY_MS;
use crate::shared::debounce::after_delay;

const LIST_PATH: &str = "/customer-list";

#[component]
fn CustomerFormPage(id: Option<String>) -> impl IntoView {
    let navigate = use_navigate();

    let on_saved = Callback::new({
        let navigate = navigate.clone();
        move |_: ()| {
            let navigate = navigate.clone();
            after_delay(SAVE_REDIRECT_DELAY_MS, move || {
                navigate(LIST_PATH, Default::default());
            });
        }
    });
    let on_cancel = Callback::new(move |_: ()| navigate(LIST_PATH, Default::default()));

    view! {
        <div class="page">
            <CustomerDetails id=id on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}

#[component]
pub fn CustomerCreatePage() -> impl IntoView {
    view! { <CustomerFormPage id=None /> }
}

/// Edit page for `/customer/:id`; a new id in the URL rebuilds the form
#[component]
pub fn CustomerEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")));

    move || {
        let id = id.get();
        view! { <CustomerFormPage id=id /> }
    }
}
