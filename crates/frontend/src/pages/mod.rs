mod appointments;
mod dentists;
mod home;
mod login;
mod not_found;
mod register;
mod schedule;
mod services;

pub use appointments::Appointments;
pub use dentists::Dentists;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use schedule::Schedule;
pub use services::Services;
