mod appointment;
mod dentist;
mod service;

pub use appointment::AppointmentService;
pub use dentist::DentistService;
pub use service::ServiceRegistryService;
