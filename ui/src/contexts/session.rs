//! The logged in operator, passed down explicitly through a context.
//!
//! The session is kept in localStorage so a reload keeps the operator
//! logged in. On start the stored token is checked against `auth/me`.

use std::rc::Rc;

use payloads::responses::{LoginResponse, OperatorProfile};
use payloads::{APIClient, CompanyId, LocationId};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::config::{SESSION_STORAGE_KEY, backend_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub operator: OperatorProfile,
}

impl Session {
    pub fn company_id(&self) -> CompanyId {
        self.operator.company_id
    }

    /// First location of the company, used as the default selection.
    pub fn default_location(&self) -> Option<LocationId> {
        self.operator.locations.first().map(|location| location.id)
    }

    pub fn api_client(&self) -> APIClient {
        APIClient::new(backend_url()).with_token(&self.access_token)
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.access_token,
            operator: response.user,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_session() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable stored session: {e}");
            None
        }
    }
}

fn store_session(session: Option<&Session>) {
    let Some(storage) = storage() else {
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(raw)) => storage.set_item(SESSION_STORAGE_KEY, &raw),
        Some(Err(e)) => {
            tracing::error!("Failed to serialize session: {e}");
            return;
        }
        None => storage.remove_item(SESSION_STORAGE_KEY),
    };
    if result.is_err() {
        tracing::warn!("Failed to update stored session");
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: Option<Rc<Session>>,
}

pub enum SessionAction {
    LogIn(Session),
    UpdateOperator(OperatorProfile),
    LogOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            SessionAction::LogIn(session) => Some(Rc::new(session)),
            SessionAction::UpdateOperator(operator) => {
                self.session.as_ref().map(|current| {
                    Rc::new(Session {
                        access_token: current.access_token.clone(),
                        operator,
                    })
                })
            }
            SessionAction::LogOut => None,
        };
        store_session(session.as_deref());
        Rc::new(SessionState { session })
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let session_state = use_reducer(|| SessionState {
        session: load_session().map(Rc::new),
    });

    // Confirm a restored token is still accepted
    {
        let session_state = session_state.clone();
        use_effect_with((), move |_| {
            if let Some(session) = session_state.session.clone() {
                yew::platform::spawn_local(async move {
                    match session.api_client().current_operator().await {
                        Ok(operator) => session_state
                            .dispatch(SessionAction::UpdateOperator(operator)),
                        Err(e) if e.is_unauthorized() => {
                            tracing::info!("Stored session expired");
                            session_state.dispatch(SessionAction::LogOut);
                        }
                        Err(e) => {
                            tracing::warn!("Could not verify session: {e}");
                        }
                    }
                });
            }
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session_state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Clone)]
pub struct SessionHandle {
    context: SessionContext,
    dispatch: Dispatch<State>,
}

impl SessionHandle {
    pub fn current(&self) -> Option<Rc<Session>> {
        self.context.session.clone()
    }

    pub fn log_in(&self, session: Session) {
        tracing::info!(company = %session.company_id(), "Operator logged in");
        self.dispatch.reduce_mut(|state| state.clear());
        self.context.dispatch(SessionAction::LogIn(session));
    }

    /// Forget the session and every cached read made with it.
    pub fn log_out(&self) {
        self.dispatch.reduce_mut(|state| state.clear());
        self.context.dispatch(SessionAction::LogOut);
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let context = use_context::<SessionContext>()
        .expect("use_session must be used within a SessionProvider");
    let dispatch = use_dispatch::<State>();
    SessionHandle { context, dispatch }
}
