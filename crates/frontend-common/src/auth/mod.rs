//! Session store: the process-wide authenticated identity.

pub mod context;

pub use context::{
    use_identity, use_role, use_session, SessionAction, SessionContext, SessionPhase,
    SessionProvider,
};
