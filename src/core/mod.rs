pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registry::{Repository, RepositoryRegistration, Service, ServiceLocator, ServiceRegistration};
