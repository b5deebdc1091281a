mod appointment_card;
mod confirm_modal;
mod dashboard;
mod navigation;

pub use appointment_card::AppointmentCard;
pub use confirm_modal::ConfirmModal;
pub use dashboard::{DentistDashboard, PatientDashboard};
pub use navigation::Navigation;
