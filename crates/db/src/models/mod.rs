pub mod product;
pub mod profile;
pub mod user;
pub mod video_job;
