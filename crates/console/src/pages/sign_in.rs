use super::AUTH_INPUT_CLASS;
use crate::context::{use_api, use_session};
use crate::routes::Route;
use panchayat_console_common::services::{AuthService, SignIn};
use panchayat_console_common::{Clock, Spinner, SpinnerSize, SystemClock};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let api = use_api();
    let store = use_session();
    let navigator = use_navigator();

    let credentials = use_state(SignIn::default);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    // Already signed in: nothing to do here
    if store.inspect(SystemClock.now_ms()).is_active() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_email = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            credentials.set(SignIn {
                email: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            credentials.set(SignIn {
                password: input.value(),
                ..(*credentials).clone()
            });
        })
    };

    let on_submit = {
        let auth = AuthService::new(api.public, store);
        let credentials = credentials.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let credentials = (*credentials).clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            error.set(None);
            spawn_local(async move {
                match auth.sign_in(&credentials).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "sign-in failed");
                        error.set(Some(err.user_message()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-sm border border-gray-200 p-8">
                <h2 class="text-2xl font-bold mb-1 text-gray-800">{"Sign In"}</h2>
                <p class="mb-6 text-sm text-gray-500">{"Enter your email and password to manage the website."}</p>

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Email"}</label>
                        <input
                            type="email"
                            class={AUTH_INPUT_CLASS}
                            placeholder="info@gmail.com"
                            value={credentials.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">{"Password"}</label>
                        <input
                            type="password"
                            class={AUTH_INPUT_CLASS}
                            placeholder="Enter your password"
                            value={credentials.password.clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="p-3 bg-red-50 rounded-lg">
                            <p class="text-sm text-red-800">{message}</p>
                        </div>
                    }

                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full px-4 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        if *is_submitting {
                            <Spinner size={SpinnerSize::Small} text="Signing in..." />
                        } else {
                            {"Sign in"}
                        }
                    </button>
                </form>

                <p class="mt-6 text-sm text-center text-gray-600">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::SignUp} classes={classes!("text-blue-600", "hover:underline")}>{"Sign Up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
