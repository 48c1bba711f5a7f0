use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::config::SIGNUP_REDIRECT_DELAY_MS;
use crate::shared::debounce::after_delay;
use crate::system::auth::api;
use crate::system::auth::context::use_session;
use crate::system::auth::credentials::{validate_credentials, SIGNUP_PASSWORD_MIN};

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let errors = Memo::new(move |_| {
        validate_credentials(&username.get(), &password.get(), SIGNUP_PASSWORD_MIN)
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);
        if !errors.get_untracked().is_empty() || is_loading.get_untracked() {
            return;
        }

        let client = session.api_client();
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let navigate = navigate.clone();

        is_loading.set(true);
        error_message.set(None);
        success_message.set(None);

        spawn_local(async move {
            match api::signup(&client, username_val, password_val).await {
                Ok(user_id) => {
                    log::info!("account created: {}", user_id);
                    let _ = success_message
                        .try_set(Some("Signup successful! Redirecting to login...".to_string()));
                    after_delay(SIGNUP_REDIRECT_DELAY_MS, move || {
                        navigate("/login", Default::default());
                    });
                }
                Err(e) => {
                    log::warn!("signup failed: {}", e);
                    let _ = error_message.try_set(Some(api::signup_error_message(&e)));
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
        <div class="login-container">
            <div class="login-box">
                <h1>"Customer Admin"</h1>
                <h2>"Create account"</h2>

                {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
                {move || success_message.get().map(|msg| view! { <div class="success-message">{msg}</div> })}

                <form on:submit=on_submit novalidate>
                    <div class="form-group">
                        <label for="signup-username">"Username"</label>
                        <input
                            type="text"
                            id="signup-username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || username_error().map(|msg| view! { <div class="field-error">{msg}</div> })}
                    </div>

                    <div class="form-group">
                        <label for="signup-password">"Password"</label>
                        <input
                            type="password"
                            id="signup-password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || password_error().map(|msg| view! { <div class="field-error">{msg}</div> })}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Already registered? " <a href="/login">"Sign in"</a></p>
                </div>
            </div>
        </div>
    }
}
