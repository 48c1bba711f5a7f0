use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_customer::ui::details::{CustomerCreatePage, CustomerEditPage};
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <a href="/customer-list">"Back to customers"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/customer-list" /> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route
                        path=path!("/customer-list")
                        view=|| view! { <RequireAuth><CustomerList /></RequireAuth> }
                    />
                    <Route
                        path=path!("/customer")
                        view=|| view! { <RequireAuth><CustomerCreatePage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/customer/:id")
                        view=|| view! { <RequireAuth><CustomerEditPage /></RequireAuth> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
