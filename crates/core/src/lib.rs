pub mod forecast;
pub mod registry;
pub mod repository;
