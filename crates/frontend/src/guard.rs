//! Route guard
//!
//! The decision is a pure function of the session phase and the route's
//! access requirement, so it can be tested without rendering anything. The
//! `Guarded` component applies the decision per navigation; nothing is
//! cached between evaluations.

use crate::routes::{Route, RouteAccess};
use smilecare_frontend_common::auth::use_session;
use smilecare_frontend_common::{SessionPhase, Spinner};
use smilecare_http::types::UserInfo;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// Session still resolving; render a placeholder only.
    Pending,
    Allow,
    RedirectTo(Route),
}

/// Decide what a navigation attempt should do.
pub fn evaluate(access: RouteAccess, phase: &SessionPhase) -> GuardDecision {
    match access {
        RouteAccess::Public => GuardDecision::Allow,
        RouteAccess::Authenticated | RouteAccess::RoleOnly(_) => match phase {
            SessionPhase::Resolving => GuardDecision::Pending,
            SessionPhase::Anonymous => GuardDecision::RedirectTo(Route::Login),
            SessionPhase::Authenticated(user) => match access {
                RouteAccess::RoleOnly(required) if !has_role(user, required) => {
                    GuardDecision::RedirectTo(Route::Home)
                }
                _ => GuardDecision::Allow,
            },
        },
    }
}

fn has_role(user: &UserInfo, required: smilecare_http::types::Role) -> bool {
    user.role() == Some(required)
}

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub route: Route,
    pub children: Children,
}

/// Wraps a screen and enforces its route's access requirement.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();

    match evaluate(props.route.access(), &session.phase) {
        GuardDecision::Pending => html! { <Spinner /> },
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::RedirectTo(target) => html! { <Redirect<Route> to={target} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smilecare_http::types::Role;

    fn user(role_id: i32) -> UserInfo {
        UserInfo {
            user_id: 7,
            role_id,
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            email: "ana@example.com".into(),
        }
    }

    #[test]
    fn public_routes_are_always_allowed() {
        for phase in [
            SessionPhase::Resolving,
            SessionPhase::Anonymous,
            SessionPhase::Authenticated(user(2)),
        ] {
            assert_eq!(evaluate(RouteAccess::Public, &phase), GuardDecision::Allow);
        }
    }

    #[test]
    fn anonymous_navigation_to_protected_route_redirects_to_login() {
        assert_eq!(
            evaluate(Route::Appointments.access(), &SessionPhase::Anonymous),
            GuardDecision::RedirectTo(Route::Login)
        );
    }

    #[test]
    fn unresolved_session_renders_placeholder_only() {
        assert_eq!(
            evaluate(Route::Appointments.access(), &SessionPhase::Resolving),
            GuardDecision::Pending
        );
    }

    #[test]
    fn wrong_role_redirects_home() {
        let patient = SessionPhase::Authenticated(user(2));
        assert_eq!(
            evaluate(Route::Dentists.access(), &patient),
            GuardDecision::RedirectTo(Route::Home)
        );

        let dentist = SessionPhase::Authenticated(user(1));
        assert_eq!(
            evaluate(Route::Schedule.access(), &dentist),
            GuardDecision::RedirectTo(Route::Home)
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let dentist = SessionPhase::Authenticated(user(1));
        assert_eq!(evaluate(Route::Dentists.access(), &dentist), GuardDecision::Allow);
        assert_eq!(evaluate(Route::Services.access(), &dentist), GuardDecision::Allow);

        let patient = SessionPhase::Authenticated(user(2));
        assert_eq!(evaluate(Route::Schedule.access(), &patient), GuardDecision::Allow);
    }

    #[test]
    fn any_authenticated_user_reaches_appointments() {
        for role_id in [1, 2] {
            assert_eq!(
                evaluate(
                    Route::Appointments.access(),
                    &SessionPhase::Authenticated(user(role_id))
                ),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn unknown_role_id_matches_no_role_requirement() {
        let odd = SessionPhase::Authenticated(user(9));
        assert_eq!(
            evaluate(Route::Dentists.access(), &odd),
            GuardDecision::RedirectTo(Route::Home)
        );
        // But plain authentication still counts.
        assert_eq!(evaluate(Route::Appointments.access(), &odd), GuardDecision::Allow);
    }

    #[test]
    fn role_gates_match_the_route_table() {
        assert_eq!(Route::Schedule.access(), RouteAccess::RoleOnly(Role::Patient));
        assert_eq!(Route::Dentists.access(), RouteAccess::RoleOnly(Role::Dentist));
        assert_eq!(Route::Services.access(), RouteAccess::RoleOnly(Role::Dentist));
        assert_eq!(Route::Appointments.access(), RouteAccess::Authenticated);
    }
}
