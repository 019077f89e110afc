pub mod service;
pub mod stores;
