mod access_denied;
mod route_guard;
mod spinner;

pub use access_denied::AccessDenied;
pub use route_guard::{RouteGuard, RouteGuardProps};
pub use spinner::LoadingSpinner as Spinner;
