//! Route table: URL paths, their screens, and who may visit them.

use smilecare_http::types::Role;
use yew_router::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/schedule")]
    Schedule,
    #[at("/appointments")]
    Appointments,
    #[at("/dentists")]
    Dentists,
    #[at("/services")]
    Services,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may visit a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    RoleOnly(Role),
}

impl Route {
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Home | Route::Login | Route::Register | Route::NotFound => RouteAccess::Public,
            Route::Appointments => RouteAccess::Authenticated,
            Route::Schedule => RouteAccess::RoleOnly(Role::Patient),
            Route::Dentists | Route::Services => RouteAccess::RoleOnly(Role::Dentist),
        }
    }
}
