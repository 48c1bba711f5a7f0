use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session restored from storage once, shared with every page.
    provide_context(SessionContext::init());

    view! {
        <AppRoutes />
    }
}
