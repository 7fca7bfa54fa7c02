pub mod auth;
pub mod collections;
pub mod jobs;
pub mod profile;
