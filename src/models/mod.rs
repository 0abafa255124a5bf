//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod application;
pub mod company;
pub mod event;
pub mod file;
pub mod job;
pub mod profile;
pub mod user;

// Re-export commonly used models
pub use application::{
    Application, ApplicationStatus, ApplicationStatusChange, CreateApplicationRequest,
};
pub use company::{Company, CompanyWithStats, CreateCompanyRequest, UpdateCompanyRequest};
pub use event::{
    CreateEventRequest, Event, EventParticipation, JoinEventRequest, UpdateEventRequest,
};
pub use file::StoredFile;
pub use job::{CreateJobRequest, Job, UpdateJobRequest};
pub use profile::{
    CompanyProfile, JobSeekerProfile, UpsertCompanyProfileRequest, UpsertJobSeekerProfileRequest,
};
pub use user::{CreateUserRequest, User, UserRole};
