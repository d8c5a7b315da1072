#![allow(dead_code)]

use swaptrack_core::{
    params::{Login, SaveSite},
    Session, Tracker, TrackerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Helper function to sign in as the seeded administrator
pub async fn admin_session(tracker: &Tracker) -> Session {
    let mut session = Session::Anonymous;
    tracker
        .login(
            &mut session,
            &Login {
                email: "admin@ericsson.com".to_string(),
                password: "admin123".to_string(),
            },
        )
        .await
        .expect("Failed to sign in as admin");
    session
}

/// Save parameters for a site with only its ID set
pub fn save(id: &str) -> SaveSite {
    SaveSite {
        id: id.to_string(),
        ..Default::default()
    }
}
