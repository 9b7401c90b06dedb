use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");

    html! {
        <div class="text-center py-16">
            <h1 class="text-3xl font-bold text-neutral-900 mb-4">{"Page not found"}</h1>
            <Link<Route> to={Route::BiddingSessions} classes="text-neutral-600 underline">
                {"Back to bidding sessions"}
            </Link<Route>>
        </div>
    }
}
