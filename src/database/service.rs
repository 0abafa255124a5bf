//! Database service layer
//!
//! This module bundles the per-entity repositories behind one handle.

use crate::database::{
    ApplicationRepository, CompanyRepository, DatabasePool, EventRepository, FileRepository,
    JobRepository, ProfileRepository, UserRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub users: UserRepository,
    pub companies: CompanyRepository,
    pub events: EventRepository,
    pub jobs: JobRepository,
    pub applications: ApplicationRepository,
    pub profiles: ProfileRepository,
    pub files: FileRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            jobs: JobRepository::new(pool.clone()),
            applications: ApplicationRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            files: FileRepository::new(pool.clone()),
            pool,
        }
    }

    /// Underlying connection pool, for health checks
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}
