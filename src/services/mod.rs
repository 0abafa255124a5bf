//! Services module
//!
//! This module contains business logic services

pub mod application;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod event;
pub mod job;
pub mod report;
pub mod user;

// Re-export commonly used services
pub use application::ApplicationService;
pub use auth::{AuthService, Claims};
pub use company::CompanyService;
pub use dashboard::{DashboardService, OverviewStats};
pub use event::EventService;
pub use job::JobService;
pub use report::{ReportKind, ReportService};
pub use user::UserService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::storage::BlobStore;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub company_service: CompanyService,
    pub event_service: EventService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
    pub blob_store: BlobStore,
    pub db: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, db: DatabaseService) -> Self {
        let auth_service = AuthService::new(settings.auth.clone());
        let user_service = UserService::new(db.clone(), auth_service.clone());
        let company_service = CompanyService::new(db.clone());
        let event_service = EventService::new(db.clone());
        let job_service = JobService::new(db.clone());
        let application_service = ApplicationService::new(db.clone());
        let dashboard_service = DashboardService::new(db.clone());
        let report_service = ReportService::new(db.clone());
        let blob_store = BlobStore::new(&settings.storage.root_dir);

        Self {
            auth_service,
            user_service,
            company_service,
            event_service,
            job_service,
            application_service,
            dashboard_service,
            report_service,
            blob_store,
            db,
        }
    }
}
