pub mod container;
pub mod external_services;
pub mod messaging;
pub mod persistence;

pub use container::AppContainer;
