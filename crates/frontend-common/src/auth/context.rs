//! Global session context and provider
//!
//! The session lifecycle is an explicit tagged variant: the UI is either
//! still resolving the stored token, holds an identity, or is anonymous.
//! While resolving, the provider renders a blocking loading screen and no
//! routes at all.

use crate::components::LoadingScreen;
use crate::config::AuthConfig;
use crate::cookie;
use crate::services::AuthApiService;
use smilecare_http::types::{Role, UserInfo};
use std::rc::Rc;
use yew::prelude::*;

/// Where the session currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    /// The verify-token call issued on load has not come back yet.
    Resolving,
    Authenticated(UserInfo),
    Anonymous,
}

impl SessionPhase {
    pub fn identity(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Session state transitions. Cookie side effects live here so every writer
/// goes through the same path.
pub enum SessionAction {
    /// The initial verify-token call resolved.
    Resolved(Option<UserInfo>),
    /// Login succeeded; store the token and the identity.
    LoggedIn { user: UserInfo, token: String },
    LoggedOut,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Resolving,
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Resolved(user) => Rc::new(Self {
                phase: match user {
                    Some(user) => SessionPhase::Authenticated(user),
                    None => SessionPhase::Anonymous,
                },
            }),
            SessionAction::LoggedIn { user, token } => {
                cookie::set(
                    AuthConfig::TOKEN_COOKIE,
                    &token,
                    AuthConfig::TOKEN_MAX_AGE_SECS,
                );
                Rc::new(Self {
                    phase: SessionPhase::Authenticated(user),
                })
            }
            SessionAction::LoggedOut => {
                cookie::delete(AuthConfig::TOKEN_COOKIE);
                cookie::delete(AuthConfig::REFRESH_COOKIE);
                Rc::new(Self {
                    phase: SessionPhase::Anonymous,
                })
            }
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component.
///
/// Verifies the stored token once on mount. Any failure is treated as "no
/// session", never as an error banner.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let user = match AuthApiService::new().verify().await {
                    Ok(user) => Some(user),
                    Err(err) => {
                        log::debug!("session verify failed, treating as logged out: {err}");
                        None
                    }
                };
                session.dispatch(SessionAction::Resolved(user));
            });
            || ()
        });
    }

    // Blocking gate: nothing renders until the session resolves.
    if session.phase == SessionPhase::Resolving {
        return html! { <LoadingScreen /> };
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the component tree in SessionProvider")
}

/// Hook to get the current identity, if any
#[hook]
pub fn use_identity() -> Option<UserInfo> {
    let session = use_session();
    session.phase.identity().cloned()
}

/// Hook to get the current role, if any
#[hook]
pub fn use_role() -> Option<Role> {
    let session = use_session();
    session.phase.identity().and_then(UserInfo::role)
}
