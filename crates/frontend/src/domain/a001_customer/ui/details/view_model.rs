use contracts::domain::a001_customer::aggregate::CustomerDto;
use contracts::domain::a002_lookup::aggregate::LookupItem;
use leptos::prelude::*;

use super::cascade::CascadeFetch;
use super::model::{
    CustomerForm, Field, SubmitBlocked, CUSTOMER_LOAD_ERROR, INVALID_FORM, LOOKUPS_ERROR,
};
use crate::domain::a001_customer::api;
use crate::domain::a002_lookup::api as lookup_api;
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::banner::{flash_error, flash_success, Banner};
use crate::shared::request_seq::ResponseOutcome;
use crate::system::auth::context::SessionContext;

/// ViewModel for the customer create/edit form
#[derive(Clone, Copy)]
pub struct CustomerFormViewModel {
    pub form: RwSignal<CustomerForm>,
    pub banner: RwSignal<Banner>,
    session: SessionContext,
}

impl CustomerFormViewModel {
    pub fn new(session: SessionContext, id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(CustomerForm::new(id)),
            banner: RwSignal::new(Banner::default()),
            session,
        }
    }

    /// Loads genders and governorates, then the customer being edited
    pub fn load(&self) {
        let form = self.form;
        let banner = self.banner;
        let client = self.session.api_client();
        wasm_bindgen_futures::spawn_local(async move {
            match load_base_lookups(&client).await {
                Ok((genders, governorates)) => {
                    form.try_update(|f| f.apply_base_lookups(genders, governorates));
                }
                Err(e) => {
                    log::error!("customer form lookups: {}", e);
                    flash_error(banner, LOOKUPS_ERROR);
                }
            }

            if let Some(id) = form.try_with_untracked(|f| f.id.clone()).flatten() {
                match load_customer(&client, &id).await {
                    Ok((customer, districts, villages)) => {
                        form.try_update(|f| f.prefill(&customer, districts, villages));
                    }
                    Err(e) => {
                        log::error!("customer {}: {}", id, e);
                        flash_error(banner, CUSTOMER_LOAD_ERROR);
                    }
                }
            }

            form.try_update(|f| f.ready());
        });
    }

    pub fn touch(&self, field: Field) {
        self.form.update(|f| f.touch(field));
    }

    pub fn select_governorate(&self, id: String) {
        let fetch = self.form.try_update(|f| {
            f.touch(Field::Governorate);
            f.location.select_governorate(&id)
        });
        if let Some(fetch) = fetch.flatten() {
            self.fetch_children(fetch);
        }
    }

    pub fn select_district(&self, id: String) {
        let fetch = self.form.try_update(|f| {
            f.touch(Field::District);
            f.location.select_district(&id)
        });
        if let Some(fetch) = fetch.flatten() {
            self.fetch_children(fetch);
        }
    }

    pub fn select_village(&self, id: String) {
        self.form.update(|f| {
            f.touch(Field::Village);
            f.location.select_village(&id);
        });
    }

    fn fetch_children(&self, fetch: CascadeFetch) {
        let form = self.form;
        let banner = self.banner;
        let client = self.session.api_client();
        wasm_bindgen_futures::spawn_local(async move {
            let result = lookup_api::children_of(&client, fetch.category, &fetch.parent_id).await;
            let outcome = form.try_update(|f| f.location.apply(&fetch, result));
            if let Some(ResponseOutcome::Failed(message)) = outcome {
                flash_error(banner, message);
            }
        });
    }

    /// Validates, saves, and calls `on_saved` after a successful save
    pub fn save_command<F>(&self, on_saved: F)
    where
        F: FnOnce() + 'static,
    {
        let form = self.form;
        let banner = self.banner;

        let payload = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(SubmitBlocked::Invalid)) => {
                flash_error(banner, INVALID_FORM);
                return;
            }
            Some(Err(SubmitBlocked::Busy)) | None => return,
        };

        banner.update(|b| b.clear());
        let client = self.session.api_client();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::create_or_update(&client, &payload).await;
            match form.try_update(|f| f.finish_submit(result)) {
                Some(Ok(message)) => {
                    flash_success(banner, message);
                    on_saved();
                }
                Some(Err(message)) => flash_error(banner, message),
                None => {}
            }
        });
    }
}

async fn load_base_lookups(
    client: &ApiClient,
) -> Result<(Vec<LookupItem>, Vec<LookupItem>), ApiError> {
    let genders = lookup_api::genders(client).await?;
    let governorates = lookup_api::governorates(client).await?;
    Ok((genders, governorates))
}

/// The customer plus the option lists its saved location needs
async fn load_customer(
    client: &ApiClient,
    id: &str,
) -> Result<(CustomerDto, Vec<LookupItem>, Vec<LookupItem>), ApiError> {
    let customer = api::get_by_id(client, id).await?;
    let districts = if customer.governorate_id.is_empty() {
        Vec::new()
    } else {
        lookup_api::districts_of(client, &customer.governorate_id).await?
    };
    let villages = if customer.district_id.is_empty() {
        Vec::new()
    } else {
        lookup_api::villages_of(client, &customer.district_id).await?
    };
    Ok((customer, districts, villages))
}
