use payloads::requests::LoginCredentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::session::{Session, use_session};
use crate::hooks::use_title;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
                           rounded-md shadow-sm bg-white text-neutral-900 \
                           focus:outline-none focus:ring-2 \
                           focus:ring-neutral-500";

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let session = use_session();
    let navigator = use_navigator();

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already logged in, e.g. after a reload
    {
        let navigator = navigator.clone();
        let logged_in = session.current().is_some();
        use_effect_with(logged_in, move |logged_in| {
            if *logged_in && let Some(navigator) = navigator {
                navigator.push(&Route::BiddingSessions);
            }
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let field = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let email = field(&email_ref).trim().to_string();
            let password = field(&password_ref);

            if email.is_empty() || password.is_empty() {
                error_message.set(Some(
                    "Please enter both email and password".to_string(),
                ));
                return;
            }

            let session = session.clone();
            let navigator = navigator.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let api_client =
                    payloads::APIClient::new(crate::config::backend_url());
                let credentials = LoginCredentials { email, password };
                match api_client.login(&credentials).await {
                    Ok(response) => {
                        session.log_in(Session::from(response));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::BiddingSessions);
                        }
                    }
                    Err(e) => {
                        error_message
                            .set(Some(e.user_message("Login failed")));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-neutral-50 px-4">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 mb-2">
                        {"Operator Portal"}
                    </h1>
                    <p class="text-neutral-600">
                        {"Sign in to manage your company"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md bg-red-50 border border-red-200">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }

                    <div>
                        <label for="email" class="block text-sm font-medium text-neutral-700 mb-2">
                            {"Email"}
                        </label>
                        <input
                            ref={email_ref}
                            type="email"
                            id="email"
                            autocomplete="email"
                            required={true}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm font-medium text-neutral-700 mb-2">
                            {"Password"}
                        </label>
                        <input
                            ref={password_ref}
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            required={true}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full py-2 px-4 rounded-md text-sm font-medium
                               text-white bg-neutral-900 hover:bg-neutral-700
                               disabled:opacity-50"
                    >
                        {if *is_loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
