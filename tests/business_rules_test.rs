//! Business rule tests against a live Postgres database
//!
//! Covers the application limits, stand assignment rules, the
//! leave-while-jobs-posted guard, and deactivated-account login.

mod helpers;

use chrono::{Duration, Utc};
use serial_test::serial;

use fairhub::models::application::CreateApplicationRequest;
use fairhub::models::company::CreateCompanyRequest;
use fairhub::models::event::{CreateEventRequest, JoinEventRequest};
use fairhub::models::job::CreateJobRequest;
use fairhub::models::user::UserRole;
use fairhub::models::{Company, Event, User};
use fairhub::{DatabaseService, FairHubError, ServiceFactory};

use helpers::database::TestDatabase;

struct Fixture {
    services: ServiceFactory,
    _db: TestDatabase,
    _storage: tempfile::TempDir,
}

async fn fixture() -> Fixture {
    let db = TestDatabase::new().await.expect("test database");
    db.cleanup().await.expect("cleanup");

    let storage = tempfile::tempdir().expect("tempdir");
    let settings = helpers::test_settings(storage.path());
    let services = ServiceFactory::new(settings, DatabaseService::new(db.pool.clone()));

    Fixture {
        services,
        _db: db,
        _storage: storage,
    }
}

async fn seed_seeker(services: &ServiceFactory, email: &str) -> User {
    services
        .user_service
        .register(email, "password123", "Test Seeker", UserRole::JobSeeker)
        .await
        .expect("register seeker")
}

async fn seed_company(services: &ServiceFactory, email: &str, name: &str) -> Company {
    let owner = services
        .user_service
        .register(email, "password123", "Test Owner", UserRole::Company)
        .await
        .expect("register owner");

    services
        .company_service
        .create_company(CreateCompanyRequest {
            name: name.to_string(),
            description: None,
            website: None,
            owner_id: owner.id,
        })
        .await
        .expect("create company")
}

async fn seed_event(services: &ServiceFactory, title: &str) -> Event {
    services
        .event_service
        .create_event(CreateEventRequest {
            title: title.to_string(),
            description: None,
            starts_at: Utc::now() + Duration::days(1),
            ends_at: Utc::now() + Duration::days(2),
            location: Some("Hall 4".to_string()),
            created_by: None,
        })
        .await
        .expect("create event")
}

#[tokio::test]
#[serial]
async fn test_duplicate_application_rejected() {
    let f = fixture().await;

    let seeker = seed_seeker(&f.services, "dup.seeker@test.dev").await;
    let company = seed_company(&f.services, "dup.owner@test.dev", "DupCo").await;
    let event = seed_event(&f.services, "Duplicate Fair").await;

    f.services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect("join event");

    let job = f
        .services
        .job_service
        .create_job(CreateJobRequest {
            company_id: company.id,
            event_id: event.id,
            title: "Backend Engineer".to_string(),
            description: None,
            requirements: None,
        })
        .await
        .expect("create job");

    f.services
        .application_service
        .create_application(CreateApplicationRequest {
            job_id: job.id,
            job_seeker_id: seeker.id,
            cover_letter: Some("First try".to_string()),
        })
        .await
        .expect("first application");

    let err = f
        .services
        .application_service
        .create_application(CreateApplicationRequest {
            job_id: job.id,
            job_seeker_id: seeker.id,
            cover_letter: Some("Second try".to_string()),
        })
        .await
        .expect_err("duplicate must be rejected");

    assert!(matches!(err, FairHubError::DuplicateApplication { job_id } if job_id == job.id));
}

#[tokio::test]
#[serial]
async fn test_sixth_application_in_one_event_rejected() {
    let f = fixture().await;

    let seeker = seed_seeker(&f.services, "eager.seeker@test.dev").await;
    let company = seed_company(&f.services, "limit.owner@test.dev", "LimitCo").await;
    let event = seed_event(&f.services, "Limit Fair").await;

    f.services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect("join event");

    let mut job_ids = Vec::new();
    for i in 0..6 {
        let job = f
            .services
            .job_service
            .create_job(CreateJobRequest {
                company_id: company.id,
                event_id: event.id,
                title: format!("Role {}", i),
                description: None,
                requirements: None,
            })
            .await
            .expect("create job");
        job_ids.push(job.id);
    }

    for job_id in &job_ids[..5] {
        f.services
            .application_service
            .create_application(CreateApplicationRequest {
                job_id: *job_id,
                job_seeker_id: seeker.id,
                cover_letter: None,
            })
            .await
            .expect("application within limit");
    }

    let err = f
        .services
        .application_service
        .create_application(CreateApplicationRequest {
            job_id: job_ids[5],
            job_seeker_id: seeker.id,
            cover_letter: None,
        })
        .await
        .expect_err("sixth application must be rejected");

    assert!(matches!(
        err,
        FairHubError::ApplicationLimitExceeded { event_id, limit: 5 } if event_id == event.id
    ));
}

#[tokio::test]
#[serial]
async fn test_double_join_rejected() {
    let f = fixture().await;

    let company = seed_company(&f.services, "rejoin.owner@test.dev", "RejoinCo").await;
    let event = seed_event(&f.services, "Rejoin Fair").await;

    f.services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect("first join");

    let err = f
        .services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company.id,
            stand_number: "B-2".to_string(),
        })
        .await
        .expect_err("second join must be rejected");

    assert!(matches!(
        err,
        FairHubError::AlreadyJoined { company_id, event_id }
            if company_id == company.id && event_id == event.id
    ));
}

#[tokio::test]
#[serial]
async fn test_stand_unique_per_event_and_leave_blocked_by_jobs() {
    let f = fixture().await;

    let company_a = seed_company(&f.services, "a.owner@test.dev", "Alpha").await;
    let company_b = seed_company(&f.services, "b.owner@test.dev", "Beta").await;
    let event = seed_event(&f.services, "Stand Fair").await;

    // Company A takes stand A-1
    f.services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company_a.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect("company A joins");

    // Company B cannot take the same stand
    let err = f
        .services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company_b.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect_err("taken stand must be rejected");
    assert!(matches!(
        err,
        FairHubError::StandTaken { event_id, ref stand_number }
            if event_id == event.id && stand_number == "A-1"
    ));

    // A free stand works fine
    f.services
        .event_service
        .join_event(JoinEventRequest {
            event_id: event.id,
            company_id: company_b.id,
            stand_number: "B-2".to_string(),
        })
        .await
        .expect("company B joins on a free stand");

    // Company A posts a job and is then pinned to the event
    let job = f
        .services
        .job_service
        .create_job(CreateJobRequest {
            company_id: company_a.id,
            event_id: event.id,
            title: "Data Engineer".to_string(),
            description: None,
            requirements: None,
        })
        .await
        .expect("create job");

    let err = f
        .services
        .event_service
        .leave_event(event.id, company_a.id)
        .await
        .expect_err("leave must be blocked while a job is posted");
    assert!(matches!(
        err,
        FairHubError::JobsStillPosted { company_id, event_id }
            if company_id == company_a.id && event_id == event.id
    ));

    // After the job is gone, leaving works
    f.services
        .job_service
        .delete_job(job.id)
        .await
        .expect("delete job");
    f.services
        .event_service
        .leave_event(event.id, company_a.id)
        .await
        .expect("leave after job removal");
}

#[tokio::test]
#[serial]
async fn test_deactivated_account_cannot_login() {
    let f = fixture().await;

    let user = seed_seeker(&f.services, "inactive@test.dev").await;

    // Sanity check before deactivation
    f.services
        .user_service
        .login("inactive@test.dev", "password123")
        .await
        .expect("active account logs in");

    f.services
        .user_service
        .set_active(user.id, false, 0)
        .await
        .expect("deactivate");

    let err = f
        .services
        .user_service
        .login("inactive@test.dev", "password123")
        .await
        .expect_err("deactivated account must not log in");
    assert!(matches!(err, FairHubError::Authentication(_)));
}

/// The UNIQUE constraints back the service pre-checks against races. Inserting
/// through the repositories directly takes the pre-checks out of the picture
/// and must still surface the domain errors, not a bare database error.
#[tokio::test]
#[serial]
async fn test_constraint_violations_map_to_domain_errors() {
    let f = fixture().await;

    let seeker = seed_seeker(&f.services, "race.seeker@test.dev").await;
    let company_a = seed_company(&f.services, "race.a@test.dev", "RaceAlpha").await;
    let company_b = seed_company(&f.services, "race.b@test.dev", "RaceBeta").await;
    let event = seed_event(&f.services, "Race Fair").await;
    let db = &f.services.db;

    // Duplicate application
    let participation = db
        .events
        .add_participation(JoinEventRequest {
            event_id: event.id,
            company_id: company_a.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect("first participation");
    let job = db
        .jobs
        .create(CreateJobRequest {
            company_id: company_a.id,
            event_id: event.id,
            title: "Race Role".to_string(),
            description: None,
            requirements: None,
        })
        .await
        .expect("create job");
    db.applications
        .create(CreateApplicationRequest {
            job_id: job.id,
            job_seeker_id: seeker.id,
            cover_letter: None,
        })
        .await
        .expect("first application");
    let err = db
        .applications
        .create(CreateApplicationRequest {
            job_id: job.id,
            job_seeker_id: seeker.id,
            cover_letter: None,
        })
        .await
        .expect_err("constraint must fire");
    assert!(matches!(err, FairHubError::DuplicateApplication { job_id } if job_id == job.id));

    // Same company joining the same event again
    let err = db
        .events
        .add_participation(JoinEventRequest {
            event_id: participation.event_id,
            company_id: company_a.id,
            stand_number: "C-3".to_string(),
        })
        .await
        .expect_err("constraint must fire");
    assert!(matches!(
        err,
        FairHubError::AlreadyJoined { company_id, event_id }
            if company_id == company_a.id && event_id == event.id
    ));

    // Another company on an occupied stand
    let err = db
        .events
        .add_participation(JoinEventRequest {
            event_id: event.id,
            company_id: company_b.id,
            stand_number: "A-1".to_string(),
        })
        .await
        .expect_err("constraint must fire");
    assert!(matches!(
        err,
        FairHubError::StandTaken { event_id, ref stand_number }
            if event_id == event.id && stand_number == "A-1"
    ));
}
