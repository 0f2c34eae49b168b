mod support;

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use pf_app::usecases::{ProjectDetailOutcome, ResolveProject, ResolveProjectError};
use pf_app::{MountGuard, RunGuards};
use pf_core::catalog::{ProjectCatalog, ProjectLinks, ProjectRecord};
use pf_core::navigation::NavigationTarget;
use pf_infra::TokioDelay;

use support::{init_tracing, RecordingDelay};

const LOAD_DELAY: Duration = Duration::from_millis(500);

fn catalog() -> Arc<ProjectCatalog> {
    let project = |id: u32, title: &str| ProjectRecord {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string()],
        links: ProjectLinks::default(),
        image: None,
        details: None,
    };
    let projects = vec![project(1, "App E-commerce"), project(2, "Dashboard")];
    Arc::new(ProjectCatalog::new(projects).unwrap())
}

#[tokio::test(start_paused = true)]
async fn known_id_is_shown_after_load_delay() {
    init_tracing();
    let usecase = ResolveProject::new(catalog(), Arc::new(TokioDelay), LOAD_DELAY);

    let start = Instant::now();
    let outcome = usecase.execute("2", &MountGuard::new()).await.unwrap();

    assert_eq!(start.elapsed(), LOAD_DELAY);
    match outcome {
        ProjectDetailOutcome::Show(project) => assert_eq!(project.title, "Dashboard"),
        other => panic!("expected project, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_or_malformed_id_redirects_home() {
    init_tracing();
    let usecase = ResolveProject::new(catalog(), Arc::new(RecordingDelay::default()), LOAD_DELAY);

    for raw in ["42", "abc", ""] {
        let outcome = usecase.execute(raw, &MountGuard::new()).await.unwrap();
        assert_eq!(
            outcome,
            ProjectDetailOutcome::Redirect(NavigationTarget::home()),
            "{raw:?} should redirect"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn unmount_during_load_drops_the_resolution() {
    init_tracing();
    let usecase = ResolveProject::new(catalog(), Arc::new(TokioDelay), LOAD_DELAY);
    let mount = MountGuard::new();

    let (outcome, ()) = futures::join!(usecase.execute("1", &mount), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        mount.unmount();
    });

    assert_eq!(outcome, Err(ResolveProjectError::Unmounted));
}

#[tokio::test(start_paused = true)]
async fn superseded_lookup_never_redirects_after_the_id_changes() {
    init_tracing();
    let usecase = ResolveProject::new(catalog(), Arc::new(TokioDelay), LOAD_DELAY);
    let runs = RunGuards::new();

    let missing = runs.start();
    let (stale, current) = futures::join!(usecase.execute("42", &missing), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let current = runs.start();
        usecase.execute("1", &current).await
    });

    assert_eq!(stale, Err(ResolveProjectError::Unmounted));
    match current.unwrap() {
        ProjectDetailOutcome::Show(project) => assert_eq!(project.id, 1),
        other => panic!("expected project, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_delay_skips_the_timer() {
    init_tracing();
    let delay = Arc::new(RecordingDelay::default());
    let usecase = ResolveProject::new(catalog(), delay.clone(), Duration::ZERO);

    let outcome = usecase.execute("1", &MountGuard::new()).await.unwrap();

    assert!(matches!(outcome, ProjectDetailOutcome::Show(_)));
    assert!(delay.requested().is_empty());
}
