use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::session::Session;

/// Who may see a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAccess {
    Public,
    /// Visible only while logged out
    Guest,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub access: NavAccess,
}

impl NavItem {
    pub fn is_visible(&self, session: &Session) -> bool {
        match self.access {
            NavAccess::Public => true,
            NavAccess::Guest => !session.is_authenticated(),
            NavAccess::Roles(roles) => session.is_authenticated() && session.has_any_role(roles),
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/customer-list",
        label: "Customers",
        icon: "customers",
        access: NavAccess::Roles(&[Role::Admin, Role::User]),
    },
    NavItem {
        path: "/customer",
        label: "Add Customer",
        icon: "user-plus",
        access: NavAccess::Roles(&[Role::Admin]),
    },
    NavItem {
        path: "/login",
        label: "Login",
        icon: "log-in",
        access: NavAccess::Guest,
    },
    NavItem {
        path: "/signup",
        label: "Sign Up",
        icon: "signup",
        access: NavAccess::Guest,
    },
];

pub fn visible_items(session: &Session) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| item.is_visible(session))
        .collect()
}

/// Exact match; `/customer` must not light up for `/customer-list`
pub fn is_active(item_path: &str, current: &str) -> bool {
    let current = current.trim_end_matches('/');
    let current = if current.is_empty() { "/" } else { current };
    item_path == current
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    // the mobile menu folds away after every route change
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let items = move || visible_items(&session.get());

    let logout = move |_| {
        session.sign_out();
        menu_open.set(false);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__brand">
                <span class="main-nav-bar__title">"Customer Admin"</span>
                <button
                    class="main-nav-bar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {icon("menu")}
                </button>
            </div>

            <ul class="main-nav-bar__items" class:main-nav-bar__items--open=move || menu_open.get()>
                <For
                    each=items
                    key=|item| item.path
                    children=move |item| {
                        let active = move || is_active(item.path, &location.pathname.get());
                        view! {
                            <li class:active=active>
                                <A href=item.path>
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </A>
                            </li>
                        }
                    }
                />
                <Show when=move || session.is_authenticated()>
                    <li class="main-nav-bar__user">
                        {icon("user")}
                        <span>{move || session.username().unwrap_or_default()}</span>
                    </li>
                    <li>
                        <button class="btn-link" on:click=logout.clone()>
                            {icon("log-out")}
                            <span>"Logout"</span>
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<&str>) -> Session {
        Session {
            token: Some("t".to_string()),
            is_logged_in: true,
            username: Some("sara".to_string()),
            role: role.map(str::to_string),
            remember_me: false,
        }
    }

    fn labels(session: &Session) -> Vec<&'static str> {
        visible_items(session).iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_guest_sees_only_login_and_signup() {
        assert_eq!(labels(&Session::default()), vec!["Login", "Sign Up"]);
    }

    #[test]
    fn test_admin_sees_add_customer() {
        assert_eq!(
            labels(&session(Some("Admin"))),
            vec!["Customers", "Add Customer"]
        );
    }

    #[test]
    fn test_user_role_hides_admin_entries() {
        assert_eq!(labels(&session(Some("user"))), vec!["Customers"]);
    }

    #[test]
    fn test_unknown_role_sees_nothing_gated() {
        assert!(labels(&session(Some("auditor"))).is_empty());
        assert!(labels(&session(None)).is_empty());
    }

    #[test]
    fn test_role_without_token_is_not_authenticated() {
        let mut stale = session(Some("admin"));
        stale.token = None;
        assert_eq!(labels(&stale), vec!["Login", "Sign Up"]);
    }

    #[test]
    fn test_active_route_matching() {
        assert!(is_active("/customer-list", "/customer-list/"));
        assert!(!is_active("/customer", "/customer-list"));
        assert!(is_active("/customer", "/customer"));
    }
}
