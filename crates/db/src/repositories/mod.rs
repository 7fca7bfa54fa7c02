//! One repository per table. Every method takes the pool explicitly so
//! callers decide the connection lifetime.

pub mod product_repo;
pub mod profile_repo;
pub mod user_repo;
pub mod video_job_repo;

pub use product_repo::ProductRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;
pub use video_job_repo::VideoJobRepo;
