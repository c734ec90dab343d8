use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-6xl font-bold text-gray-300">{"404"}</h1>
            <p class="mt-2 text-gray-600">{"We can't seem to find the page you are looking for."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("mt-6", "px-4", "py-2", "text-sm", "text-white", "bg-blue-600", "hover:bg-blue-700", "rounded-lg")}>
                {"Back to Home Page"}
            </Link<Route>>
        </div>
    }
}
