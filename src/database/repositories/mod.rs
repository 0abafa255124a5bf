//! Repository implementations for database operations

pub mod application;
pub mod company;
pub mod event;
pub mod file;
pub mod job;
pub mod profile;
pub mod user;

pub use application::ApplicationRepository;
pub use company::CompanyRepository;
pub use event::EventRepository;
pub use file::FileRepository;
pub use job::JobRepository;
pub use profile::ProfileRepository;
pub use user::UserRepository;
