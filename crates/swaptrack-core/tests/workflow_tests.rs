mod common;

use common::{admin_session, create_test_tracker, save};
use swaptrack_core::{
    display::{OperationStatus, Severity},
    params::{Id, ListSites, ToggleTask},
    AdvisorConfig, AdvisorMode, ErrorKind, SaveSite, SiteRepository, SiteStatus,
};

fn toggle(site_id: &str, task_id: &str) -> ToggleTask {
    ToggleTask {
        site_id: site_id.to_string(),
        task_id: task_id.to_string(),
    }
}

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_swap_workflow() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let session = admin_session(&tracker).await;
    let advisor = AdvisorConfig::default().build();

    // Register the inventory
    for (id, name, region) in [
        ("PH-G-0001", "Makati Tower", "NCR"),
        ("PH-G-0002", "Cebu Port", "Visayas"),
    ] {
        tracker
            .create_site(
                &session,
                &SaveSite {
                    name: Some(name.to_string()),
                    region: Some(region.to_string()),
                    ..save(id)
                },
            )
            .await
            .expect("Failed to create site");
    }

    // Plan the rollout
    let schedule = tracker
        .auto_schedule(&session, advisor.as_ref())
        .await
        .expect("Failed to schedule");
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].scheduled_date, schedule[1].scheduled_date);
    let planned = tracker
        .list_sites(&ListSites {
            status: Some(SiteStatus::Planned),
            ..Default::default()
        })
        .await
        .expect("Failed to list sites");
    assert_eq!(planned.len(), 2);

    let site = tracker
        .generate_swap_plan(
            &session,
            advisor.as_ref(),
            &Id {
                id: "PH-G-0001".to_string(),
            },
        )
        .await
        .expect("Failed to generate swap plan");
    assert!(site.technical_instructions.is_some());

    // Work the checklist to completion
    let mut progress = Vec::new();
    for task_id in ["2", "3", "4", "5", "6"] {
        let outcome = tracker
            .toggle_task(&session, &toggle("PH-G-0001", task_id))
            .await
            .expect("Failed to toggle task");
        progress.push(outcome.site().progress);
    }
    assert_eq!(progress, vec![33, 50, 67, 83, 100]);

    let site = tracker.get("PH-G-0001").await.unwrap().unwrap();
    assert_eq!(site.status, SiteStatus::Completed);
    // The generated procedure survives task updates
    assert!(site.technical_instructions.is_some());
    assert!(site.scheduled_date.is_some());

    // Unchecking one task drops back to In Progress
    let outcome = tracker
        .toggle_task(&session, &toggle("PH-G-0001", "6"))
        .await
        .expect("Failed to toggle task");
    assert_eq!(outcome.site().progress, 83);
    assert_eq!(outcome.site().status, SiteStatus::InProgress);

    let stats = tracker.dashboard().await.expect("Failed to load dashboard");
    assert_eq!(stats.total, 2);
    // The untouched site is still Planned
    assert_eq!(stats.in_progress, 1);

    let analysis = tracker
        .run_analysis(&session, advisor.as_ref())
        .await
        .expect("Failed to analyze");
    assert_eq!(analysis.health_percent, "50%");
    assert_eq!(analysis.priorities.len(), 2);
}

#[tokio::test]
async fn test_blocked_status_is_released_by_progress() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let session = admin_session(&tracker).await;

    tracker
        .save_site(&session, &save("PH-G-0001"))
        .await
        .expect("Failed to save site");
    tracker
        .toggle_task(&session, &toggle("PH-G-0001", "1"))
        .await
        .expect("Failed to toggle task");
    tracker
        .save_site(
            &session,
            &SaveSite {
                status: Some(SiteStatus::Blocked),
                ..save("PH-G-0001")
            },
        )
        .await
        .expect("Failed to block site");

    let unknown = tracker
        .toggle_task(&session, &toggle("PH-G-0001", "99"))
        .await
        .expect("Failed to toggle task");
    assert!(!unknown.is_updated());
    assert_eq!(unknown.site().status, SiteStatus::Blocked);

    // Checking a task moves the site forward; unchecking it again leaves
    // In Progress, since zero progress keeps the prior status
    let checked = tracker
        .toggle_task(&session, &toggle("PH-G-0001", "3"))
        .await
        .expect("Failed to toggle task");
    assert_eq!(checked.site().status, SiteStatus::InProgress);

    let unchecked = tracker
        .toggle_task(&session, &toggle("PH-G-0001", "3"))
        .await
        .expect("Failed to toggle task");
    assert_eq!(unchecked.site().progress, 0);
    assert_eq!(unchecked.site().status, SiteStatus::InProgress);
}

#[tokio::test]
async fn test_gemini_without_key_is_a_warning() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let session = admin_session(&tracker).await;
    tracker
        .save_site(&session, &save("PH-G-0001"))
        .await
        .expect("Failed to save site");

    let advisor = AdvisorConfig {
        mode: AdvisorMode::Gemini,
        api_key: None,
        ..Default::default()
    }
    .build();

    let err = tracker
        .run_analysis(&session, advisor.as_ref())
        .await
        .expect_err("no API key configured");
    assert_eq!(err.kind(), ErrorKind::AdvisorUnavailable);

    let status = OperationStatus::from_error(&err);
    assert_eq!(status.severity, Severity::Warning);

    // The inventory is untouched and still usable
    let outcome = tracker
        .toggle_task(&session, &toggle("PH-G-0001", "2"))
        .await
        .expect("Failed to toggle task");
    assert!(outcome.is_updated());
}

#[tokio::test]
async fn test_site_json_export() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let session = admin_session(&tracker).await;
    let site = tracker
        .save_site(&session, &save("PH-G-0001"))
        .await
        .expect("Failed to save site")
        .site;

    let json = serde_json::to_value(&site).expect("Failed to serialize");
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["tasks"].as_array().map(Vec::len), Some(6));
    assert!(json.get("technical_instructions").is_none());
}

#[tokio::test]
async fn test_unreachable_storage_aborts_with_retry_banner() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let session = admin_session(&tracker).await;
    let site = tracker
        .save_site(&session, &save("PH-G-0001"))
        .await
        .expect("Failed to save site")
        .site;

    // Swap the database file for a directory of the same name
    let path = tracker.database_path().to_path_buf();
    std::fs::remove_file(&path).expect("Failed to remove database file");
    std::fs::create_dir(&path).expect("Failed to create directory");

    let read = tracker.get_all().await.expect_err("storage is unreachable");
    assert_eq!(read.kind(), ErrorKind::StorageUnavailable);

    let write = tracker.upsert(site).await.expect_err("storage is unreachable");
    assert_eq!(write.kind(), ErrorKind::StorageUnavailable);

    let status = OperationStatus::from_error(&write);
    assert!(status.is_failure());
    assert!(status
        .to_string()
        .contains("Sync operation aborted, please retry."));
}
