//! Route protection and the session watchers wired into the router

use crate::components::Layout;
use crate::context::use_session;
use crate::routes::Route;
use panchayat_console_common::auth::on_unauthorized;
use panchayat_console_common::config::SessionConfig;
use panchayat_console_common::guard::Redirect;
use panchayat_console_common::{ExpiryWatcher, IntervalTicker, RouteGate, SystemClock};
use yew::prelude::*;
use yew_router::prelude::*;

/// Perform the navigation a denied session asks for
pub fn follow(navigator: &Navigator, redirect: Redirect) {
    match Route::recognize(redirect.path) {
        Some(route) if redirect.replace => navigator.replace(&route),
        Some(route) => navigator.push(&route),
        None => tracing::error!(path = redirect.path, "redirect target is not a console route"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub children: Html,
}

/// Renders its children inside the console layout only while the stored
/// session is valid. The location subscription re-runs the gate on every
/// navigation, including one to the route already shown.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let store = use_session();
    let _location = use_location();

    match RouteGate::new(store).check().redirect() {
        None => html! {
            <Layout>{ props.children.clone() }</Layout>
        },
        Some(redirect) => html! { <FollowRedirect {redirect} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct FollowRedirectProps {
    pub redirect: Redirect,
}

/// Navigates once mounted; `replace` keeps Back from returning to the denied page
#[function_component(FollowRedirect)]
pub fn follow_redirect(props: &FollowRedirectProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.redirect, move |redirect| {
        if let Some(navigator) = &navigator {
            follow(navigator, *redirect);
        }
    });

    html! {}
}

/// Poll the stored expiry for as long as the calling component is mounted
#[hook]
pub fn use_expiry_watcher() {
    let store = use_session();
    let navigator = use_navigator();

    use_effect_with(store, move |store| {
        let watcher = ExpiryWatcher::start(
            &IntervalTicker,
            store.clone(),
            SystemClock,
            SessionConfig::WATCH_INTERVAL_MS,
            move || {
                if let Some(navigator) = &navigator {
                    follow(navigator, Redirect::sign_in());
                }
            },
        );
        move || drop(watcher)
    });
}

/// Clear the session and leave the protected subtree when the API rejects the token
#[hook]
pub fn use_unauthorized_redirect() {
    let store = use_session();
    let navigator = use_navigator();

    use_effect_with(store, move |store| {
        let store = store.clone();
        let registration = on_unauthorized(move || {
            store.clear();
            if let Some(navigator) = &navigator {
                follow(navigator, Redirect::sign_in());
            }
        });
        move || drop(registration)
    });
}

/// Lives for the whole app so expiry and rejected tokens are caught on every screen
#[function_component(SessionWatcher)]
pub fn session_watcher() -> Html {
    use_expiry_watcher();
    use_unauthorized_redirect();
    html! {}
}
