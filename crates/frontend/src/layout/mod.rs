pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application frame: navigation bar on top, routed page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
