use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::system::auth::api;
use crate::system::auth::context::use_session;
use crate::system::auth::credentials::{validate_credentials, LOGIN_PASSWORD_MIN};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let errors = Memo::new(move |_| {
        validate_credentials(&username.get(), &password.get(), LOGIN_PASSWORD_MIN)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);
        if !errors.get_untracked().is_empty() || is_loading.get_untracked() {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let remember = remember_me.get_untracked();
        let client = session.api_client();
        let navigate = navigate.clone();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(&client, username_val, password_val, remember).await {
                Ok(new_session) => {
                    session.sign_in(new_session);
                    let _ = is_loading.try_set(false);
                    navigate("/customer-list", Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    let _ = error_message.try_set(Some(api::login_error_message(&e)));
                    let _ = is_loading.try_set(false);
                }
            }
        });
    };

    let username_error = move || {
        submitted
            .get()
            .then(|| errors.with(|e| e.username.clone()))
            .flatten()
    };
    let password_error = move || {
        submitted
            .get()
            .then(|| errors.with(|e| e.password.clone()))
            .flatten()
    };

    view! {
        <Show when=move || session.is_authenticated()>
            <Redirect path="/customer-list" />
        </Show>
        <div class="login-container">
            <div class="login-box">
                <h1>"Customer Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || username_error().map(|msg| view! { <div class="field-error">{msg}</div> })}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="btn-link"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        {move || password_error().map(|msg| view! { <div class="field-error">{msg}</div> })}
                    </div>

                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        " Remember me"
                    </label>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"No account? " <a href="/signup">"Sign up"</a></p>
                </div>
            </div>
        </div>
    }
}
