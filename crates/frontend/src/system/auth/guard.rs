use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children only for an authenticated session, otherwise sends the
/// visitor to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
