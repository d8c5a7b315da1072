use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a test database
fn swaptrack_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("swaptrack").expect("Failed to find swaptrack binary");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("SWAPTRACK_ADVISOR")
        .env_remove("SWAPTRACK_PASSWORD")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Signs in as the seeded administrator; the session is stored in the database
fn login_admin(temp_dir: &TempDir) {
    swaptrack_cmd(temp_dir)
        .args(["auth", "login", "admin@ericsson.com", "--password", "admin123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Ericsson Admin"));
}

fn create_site(temp_dir: &TempDir, id: &str, extra: &[&str]) {
    swaptrack_cmd(temp_dir)
        .args(["site", "create", id])
        .args(extra)
        .assert()
        .success();
}

#[test]
fn test_cli_list_empty_sites() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["site", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites found."));
}

#[test]
fn test_cli_default_command_lists_sites() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites found."));
}

#[test]
fn test_cli_whoami_and_logout() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));

    login_admin(&temp_dir);

    swaptrack_cmd(&temp_dir)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin@ericsson.com"))
        .stdout(predicate::str::contains("(Admin)"));

    swaptrack_cmd(&temp_dir)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    swaptrack_cmd(&temp_dir)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn test_cli_login_with_wrong_password() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["auth", "login", "admin@ericsson.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_cli_create_requires_sign_in() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["site", "create", "PH-G-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_cli_member_cannot_create_sites() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args([
            "auth",
            "register",
            "--name",
            "Field Lead",
            "--email",
            "lead@globe.example",
            "--password",
            "s3cret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered and signed in as Field Lead"))
        .stdout(predicate::str::contains("(User)"));

    swaptrack_cmd(&temp_dir)
        .args(["site", "create", "PH-G-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));
}

#[test]
fn test_cli_create_site_success() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);

    swaptrack_cmd(&temp_dir)
        .args([
            "site",
            "create",
            "PH-G-0001",
            "--name",
            "Makati Tower",
            "--region",
            "NCR",
            "--lat",
            "14.5547",
            "--lng",
            "121.0244",
            "--vendor",
            "nokia",
            "--risk",
            "high",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created site with ID: PH-G-0001"))
        .stdout(predicate::str::contains("# PH-G-0001. Makati Tower"))
        .stdout(predicate::str::contains("- Progress: 17%"))
        .stdout(predicate::str::contains("- Status: ➤ In Progress"))
        .stdout(predicate::str::contains("- Swap: Nokia → Ericsson"))
        .stdout(predicate::str::contains("- [x] 1. Site Survey & Pre-checks"));
}

#[test]
fn test_cli_create_duplicate_site_fails() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["site", "create", "PH-G-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_create_site_rejects_bad_coordinates() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);

    swaptrack_cmd(&temp_dir)
        .args(["site", "create", "PH-G-0001", "--lat", "-95.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("coordinates"));

    swaptrack_cmd(&temp_dir)
        .args(["site", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites found."));
}

#[test]
fn test_cli_invalid_vendor_is_a_usage_error() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["site", "create", "PH-G-0001", "--vendor", "ericsson"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_toggle_task_updates_progress() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["task", "toggle", "PH-G-0001", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Task 2 on site PH-G-0001 marked done. Progress 33% (In Progress)",
        ));

    swaptrack_cmd(&temp_dir)
        .args(["task", "list", "PH-G-0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] 2."));

    swaptrack_cmd(&temp_dir)
        .args(["task", "toggle", "PH-G-0001", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked open. Progress 17%"));
}

#[test]
fn test_cli_toggle_unknown_task_is_a_warning() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["task", "toggle", "PH-G-0001", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Site PH-G-0001 has no task 99"));
}

#[test]
fn test_cli_toggle_unknown_site_fails() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);

    swaptrack_cmd(&temp_dir)
        .args(["task", "toggle", "PH-G-9999", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Site with ID PH-G-9999 not found"));
}

#[test]
fn test_cli_update_site_shows_changes() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &["--name", "Makati Tower"]);

    swaptrack_cmd(&temp_dir)
        .args([
            "site",
            "update",
            "PH-G-0001",
            "--risk",
            "medium",
            "--team",
            "Team Bravo",
            "--scheduled",
            "2025-06-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated site with ID: PH-G-0001"))
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- Risk: Low → Medium"))
        .stdout(predicate::str::contains("- Scheduled: 2025-06-02"))
        .stdout(predicate::str::contains("- Team: Team Bravo"));
}

#[test]
fn test_cli_update_rejects_contradicting_status() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["site", "update", "PH-G-0001", "--status", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contradicts task progress"));
}

#[test]
fn test_cli_update_blocks_started_site() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["site", "update", "PH-G-0001", "--status", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: In Progress → Blocked"));

    swaptrack_cmd(&temp_dir)
        .args(["site", "list", "--status", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PH-G-0001"));
}

#[test]
fn test_cli_update_missing_site_fails() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);

    swaptrack_cmd(&temp_dir)
        .args(["site", "update", "PH-G-0404", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_list_sites_with_filter() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &["--name", "Makati Tower"]);
    create_site(&temp_dir, "PH-V-0002", &["--name", "Cebu Port", "--region", "Visayas"]);

    swaptrack_cmd(&temp_dir)
        .args(["site", "list", "--query", "cebu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Cebu Port (ID: PH-V-0002) 17%"))
        .stdout(predicate::str::contains("Makati Tower").not());

    swaptrack_cmd(&temp_dir)
        .args(["site", "list", "--status", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites found."));
}

#[test]
fn test_cli_equipment_and_milestone() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args([
            "site",
            "equipment",
            "PH-G-0001",
            "legacy",
            "--model",
            "BBU3900",
            "--serial",
            "hw-001",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Equipment"))
        .stdout(predicate::str::contains("BBU3900"))
        .stdout(predicate::str::contains("HW-001"));

    swaptrack_cmd(&temp_dir)
        .args([
            "site",
            "milestone",
            "PH-G-0001",
            "installation",
            "--planned",
            "2025-03-10",
            "--actual",
            "2025-03-14",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Installation: planned 2025-03-10, actual 2025-03-14 (**4d late**)",
        ));

    swaptrack_cmd(&temp_dir)
        .args(["site", "milestone", "PH-G-0001", "survey"])
        .assert()
        .failure();
}

#[test]
fn test_cli_invalid_date_is_a_usage_error() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["site", "milestone", "PH-G-0001", "survey", "--planned", "next week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &["--name", "Makati Tower"]);

    swaptrack_cmd(&temp_dir)
        .args(["site", "delete", "PH-G-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    swaptrack_cmd(&temp_dir)
        .args(["site", "delete", "PH-G-0001", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted site 'Makati Tower' (ID: PH-G-0001) with 6 tasks",
        ));

    swaptrack_cmd(&temp_dir)
        .args(["site", "show", "PH-G-0001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_dashboard_and_regions() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sites registered."));

    login_admin(&temp_dir);
    create_site(
        &temp_dir,
        "PH-G-0001",
        &["--region", "NCR", "--lat", "14.0", "--lng", "121.0"],
    );
    create_site(
        &temp_dir,
        "PH-G-0002",
        &["--region", "NCR", "--lat", "15.0", "--lng", "122.0", "--risk", "high"],
    );

    swaptrack_cmd(&temp_dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Project Health"))
        .stdout(predicate::str::contains("- Sites: 2"))
        .stdout(predicate::str::contains("- Completed: 0 (0.0%)"))
        .stdout(predicate::str::contains("- In Progress: 2"))
        .stdout(predicate::str::contains("- High Risk: 1"));

    swaptrack_cmd(&temp_dir)
        .args(["regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- NCR: 0/2 completed, 1 high risk, centred at 14.5000, 121.5000",
        ));
}

#[test]
fn test_cli_local_advisor_commands() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &["--name", "Makati Tower", "--risk", "high"]);
    create_site(&temp_dir, "PH-G-0002", &["--name", "Pasig Hub"]);

    swaptrack_cmd(&temp_dir)
        .args(["advisor", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Strategy Analysis"))
        .stdout(predicate::str::contains("Localized analysis of 2 nodes completed."))
        .stdout(predicate::str::contains("Site PH-G-0001: Makati Tower (High Risk)"));

    swaptrack_cmd(&temp_dir)
        .args(["advisor", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Deployment Schedule"))
        .stdout(predicate::str::contains("PH-G-0002"));

    swaptrack_cmd(&temp_dir)
        .args(["advisor", "swap-plan", "PH-G-0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated swap procedure for site PH-G-0001"))
        .stdout(predicate::str::contains("## Swap Procedure"))
        .stdout(predicate::str::contains("BBU3900"));

    swaptrack_cmd(&temp_dir)
        .args(["site", "show", "PH-G-0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Status: ◑ Planned"))
        .stdout(predicate::str::contains("- Scheduled: "))
        .stdout(predicate::str::contains("## Swap Procedure"));
}

#[test]
fn test_cli_gemini_without_key_warns_and_succeeds() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["--advisor", "gemini", "advisor", "analyze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Advisor unavailable"))
        .stdout(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_advisor_requires_admin() {
    let temp_dir = create_cli_test_environment();

    swaptrack_cmd(&temp_dir)
        .args(["advisor", "analyze"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_cli_db_clear() {
    let temp_dir = create_cli_test_environment();
    login_admin(&temp_dir);
    create_site(&temp_dir, "PH-G-0001", &[]);
    create_site(&temp_dir, "PH-G-0002", &[]);

    swaptrack_cmd(&temp_dir)
        .args(["db", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    swaptrack_cmd(&temp_dir)
        .args(["db", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 sites"));

    // Accounts survive, so the session is still valid
    swaptrack_cmd(&temp_dir)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin@ericsson.com"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("swaptrack")
        .expect("Failed to find swaptrack binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("site"))
        .stdout(predicate::str::contains("advisor"))
        .stdout(predicate::str::contains("--database-file"));
}
