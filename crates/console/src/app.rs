use crate::context::ApiContext;
use crate::guard::SessionWatcher;
use crate::routes::{switch, Route};
use panchayat_console_common::{ApiClientBuilder, SessionStore};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| SessionStore::browser());
    let clients = use_memo((), |_| ApiClientBuilder::new().build_public());

    let api = match &*clients {
        Ok(public) => ApiContext {
            public: public.clone(),
            client: public.clone().authenticate((*store).clone()),
        },
        Err(error) => {
            tracing::error!(%error, "could not build the API client");
            return html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50">
                    <div class="p-6 bg-red-50 border border-red-200 rounded-lg text-red-700">
                        {format!("The console is misconfigured: {error}")}
                    </div>
                </div>
            };
        }
    };

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            <ContextProvider<ApiContext> context={api}>
                <BrowserRouter>
                    <SessionWatcher />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ApiContext>>
        </ContextProvider<SessionStore>>
    }
}
