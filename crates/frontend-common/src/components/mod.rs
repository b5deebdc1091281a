mod banner;
mod empty_state;
mod spinner;

pub use banner::{ErrorBanner, SuccessBanner};
pub use empty_state::EmptyState;
pub use spinner::{LoadingScreen, LoadingSpinner as Spinner};
