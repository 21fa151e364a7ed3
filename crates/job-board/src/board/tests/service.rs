use super::common::*;
use crate::board::domain::{JobId, JobPostingPatch};
use crate::board::filter::JobFilter;
use crate::board::seed::seed_if_empty;
use crate::board::store::StoreError;
use crate::board::{BoardError, BoardPolicy, JobBoardService};
use chrono::Utc;
use std::sync::Arc;

#[test]
fn create_assigns_id_and_timestamp() {
    let (service, store) = build_service();
    let before = Utc::now();
    let created = service.create(frontend_posting()).expect("valid posting");
    let after = Utc::now();

    assert_eq!(created.id, JobId::from("job-000001"));
    assert!(created.created_at >= before && created.created_at <= after);
    assert_eq!(created.title, "Frontend Developer");
    assert_eq!(store.job_count().unwrap(), 1);
}

#[test]
fn get_after_create_returns_the_created_record() {
    let (service, _) = build_service();
    let created = service.create(frontend_posting()).unwrap();

    let fetched = service.get(&created.id).expect("lookup succeeds");
    assert_eq!(fetched, Some(created));
}

#[test]
fn get_of_unknown_id_is_none() {
    let (service, _) = build_service();
    assert_eq!(service.get(&JobId::from("job-999999")).unwrap(), None);
}

#[test]
fn create_rejects_invalid_payloads_before_the_store() {
    let (service, store) = build_service();
    let mut posting = frontend_posting();
    posting.title = "Dev".to_string();
    posting.category = String::new();

    match service.create(posting) {
        Err(BoardError::Validation(errors)) => {
            assert!(errors.contains("title"));
            assert!(errors.contains("category"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.job_count().unwrap(), 0);
}

#[test]
fn update_changes_only_the_supplied_field() {
    let (service, _) = build_service();
    let created = service.create(frontend_posting()).unwrap();

    let patch = JobPostingPatch {
        salary_range: Some("$95,000 - $135,000".to_string()),
        ..JobPostingPatch::default()
    };
    let updated = service
        .update(&created.id, patch)
        .expect("update succeeds")
        .expect("posting exists");

    assert_eq!(updated.salary_range, "$95,000 - $135,000");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.company, created.company);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.location, created.location);
    assert_eq!(service.get(&created.id).unwrap(), Some(updated));
}

#[test]
fn update_of_unknown_id_is_none() {
    let (service, _) = build_service();
    let patch = JobPostingPatch {
        title: Some("Staff Engineer".to_string()),
        ..JobPostingPatch::default()
    };
    assert_eq!(service.update(&JobId::from("missing"), patch).unwrap(), None);
}

#[test]
fn update_validates_supplied_fields() {
    let (service, _) = build_service();
    let created = service.create(frontend_posting()).unwrap();
    let patch = JobPostingPatch {
        description: Some("short".to_string()),
        ..JobPostingPatch::default()
    };

    assert!(matches!(
        service.update(&created.id, patch),
        Err(BoardError::Validation(_))
    ));
    assert_eq!(service.get(&created.id).unwrap(), Some(created));
}

#[test]
fn delete_of_unknown_id_returns_false_and_keeps_collection() {
    let (service, store, _) = seeded_service();
    let before = store.job_count().unwrap();

    assert!(!service.delete(&JobId::from("job-that-does-not-exist")).unwrap());
    assert_eq!(store.job_count().unwrap(), before);
}

#[test]
fn delete_removes_posting_but_keeps_its_applications() {
    let (service, store) = build_service();
    let created = service.create(frontend_posting()).unwrap();
    service
        .submit_application(application_for(&created.id, "Alex Johnson"))
        .unwrap();

    assert!(service.delete(&created.id).unwrap());
    assert_eq!(service.get(&created.id).unwrap(), None);
    assert!(!service.delete(&created.id).unwrap());
    assert_eq!(service.list_applications(&created.id).unwrap().len(), 1);
    assert_eq!(store.application_count().unwrap(), 1);
}

#[test]
fn submit_assigns_id_and_timestamp() {
    let (service, _) = build_service();
    let job = service.create(frontend_posting()).unwrap();

    let before = Utc::now();
    let first = service
        .submit_application(application_for(&job.id, "Alex Johnson"))
        .unwrap();
    let second = service
        .submit_application(application_for(&job.id, "Jamie Smith"))
        .unwrap();

    assert_eq!(first.id.0, "app-000001");
    assert_eq!(second.id.0, "app-000002");
    assert!(first.submitted_at >= before);
    assert_eq!(first.job_id, job.id);

    let listed = service.list_applications(&job.id).unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[test]
fn submit_rejects_unknown_job_by_default() {
    let (service, store) = build_service();

    match service.submit_application(application_for(&JobId::from("job-404"), "Alex Johnson")) {
        Err(BoardError::UnknownJob(id)) => assert_eq!(id, JobId::from("job-404")),
        other => panic!("expected unknown job error, got {other:?}"),
    }
    assert_eq!(store.application_count().unwrap(), 0);
}

#[test]
fn submit_accepts_unknown_job_when_referential_check_disabled() {
    let (service, _) = build_service_with_policy(BoardPolicy {
        require_existing_job: false,
    });

    let submitted = service
        .submit_application(application_for(&JobId::from("job-404"), "Alex Johnson"))
        .expect("accepted without a posting");
    assert_eq!(submitted.job_id, JobId::from("job-404"));
}

#[test]
fn submit_validates_the_candidate_form() {
    let (service, _) = build_service();
    let job = service.create(frontend_posting()).unwrap();
    let mut application = application_for(&job.id, "Alex Johnson");
    application.email = "not-an-email".to_string();

    match service.submit_application(application) {
        Err(BoardError::Validation(errors)) => assert!(errors.contains("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn list_applications_for_unknown_job_is_empty() {
    let (service, _, _) = seeded_service();
    let applications = service
        .list_applications(&JobId::from("job-that-does-not-exist"))
        .expect("not an error");
    assert!(applications.is_empty());
}

#[test]
fn store_faults_propagate_as_typed_errors() {
    let store = Arc::new(UnavailableStore);
    let service = JobBoardService::new(store.clone(), store, BoardPolicy::default());

    assert!(matches!(
        service.list(&JobFilter::default()),
        Err(BoardError::Store(StoreError::Unavailable(_)))
    ));
    assert!(matches!(
        service.get(&JobId::from("job-000001")),
        Err(BoardError::Store(_))
    ));
    assert!(matches!(
        service.create(frontend_posting()),
        Err(BoardError::Store(_))
    ));
    assert!(matches!(
        service.delete(&JobId::from("job-000001")),
        Err(BoardError::Store(_))
    ));
    assert!(matches!(
        service.list_applications(&JobId::from("job-000001")),
        Err(BoardError::Store(_))
    ));
}

#[test]
fn seeding_only_populates_an_empty_store() {
    let (service, store) = build_service();

    assert_eq!(seed_if_empty(&service).unwrap(), 6);
    assert_eq!(store.job_count().unwrap(), 6);
    assert_eq!(store.application_count().unwrap(), 3);

    let frontend = service
        .list(&JobFilter::default().with_search("Frontend Developer"))
        .unwrap();
    assert_eq!(
        service.list_applications(&frontend[0].id).unwrap().len(),
        2
    );

    assert_eq!(seed_if_empty(&service).unwrap(), 0);
    assert_eq!(store.job_count().unwrap(), 6);
}

#[test]
fn option_sources_are_static() {
    let (service, _) = build_service();
    let before = service.categories();
    service
        .create(super::common::posting(
            "Quantum Researcher",
            "Qubit Labs",
            "Quantum Computing",
            "Zurich",
            "$120,000 - $160,000",
        ))
        .unwrap();

    assert_eq!(service.categories(), before);
    assert!(!service.categories().contains(&"Quantum Computing".to_string()));
    assert!(!service.locations().contains(&"Zurich".to_string()));
    assert_eq!(service.filter_options().categories, before);
}
