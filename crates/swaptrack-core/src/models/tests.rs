#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::{
        display::{LocalDateTime, Sites, Tasks},
        models::{
            default_tasks, Coordinates, Equipment, EquipmentRole, Milestone, MilestoneKind,
            ProjectStats, RegionSummary, RiskLevel, Site, SiteFilter, SiteStatus, SwapStep,
            TechnicalInstructions, Vendor,
        },
    };

    fn create_test_site() -> Site {
        let mut site = Site::new("PH-G-0042");
        site.name = "Makati Tower".to_string();
        site.region = "NCR".to_string();
        site.risk_level = RiskLevel::High;
        site.tasks = default_tasks();
        site.progress = 17;
        site.status = SiteStatus::InProgress;
        site.last_update = Timestamp::from_second(1640995200).unwrap(); // 2022-01-01 00:00:00 UTC
        site
    }

    fn site_at(id: &str, region: &str, lat: f64, lng: f64, status: SiteStatus) -> Site {
        let mut site = Site::new(id);
        site.region = region.to_string();
        site.coordinates = Coordinates { lat, lng };
        site.status = status;
        site
    }

    #[test]
    fn test_site_status_parsing() {
        for status in SiteStatus::ALL {
            assert_eq!(status.as_str().parse::<SiteStatus>(), Ok(status));
        }
        assert_eq!("in_progress".parse::<SiteStatus>(), Ok(SiteStatus::InProgress));
        assert_eq!("IN-PROGRESS".parse::<SiteStatus>(), Ok(SiteStatus::InProgress));
        assert!("done".parse::<SiteStatus>().is_err());
    }

    #[test]
    fn test_site_status_serde_uses_display_form() {
        let json = serde_json::to_string(&SiteStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: SiteStatus = serde_json::from_str("\"Blocked\"").unwrap();
        assert_eq!(parsed, SiteStatus::Blocked);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("HIGH".parse::<RiskLevel>(), Ok(RiskLevel::High));
        assert_eq!("nokia".parse::<Vendor>(), Ok(Vendor::Nokia));
        assert_eq!("install".parse::<EquipmentRole>(), Ok(EquipmentRole::Target));
        assert_eq!("Acceptance".parse::<MilestoneKind>(), Ok(MilestoneKind::Acceptance));
        assert!("zte".parse::<Vendor>().is_err());
    }

    #[test]
    fn test_site_display() {
        let site = create_test_site();
        let output = format!("{site}");

        assert!(output.starts_with("# PH-G-0042. Makati Tower"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("- Progress: 17%"));
        assert!(output.contains("- Risk: High"));
        assert!(output.contains("- Swap: Huawei → Ericsson"));
        assert!(output.contains("- Updated: 2022-01-01") || output.contains("- Updated: 2021-12-31"));

        assert!(output.contains("## Tasks"));
        assert!(output.contains("- [x] 1. Site Survey & Pre-checks *(Surveyor)*"));
        assert!(output.contains("- [ ] 6. Acceptance Sign-off *(Team Lead)*"));
        assert!(output.contains("## Milestones"));
        assert!(!output.contains("## Equipment"));
        assert!(!output.contains("## Swap Procedure"));
    }

    #[test]
    fn test_site_display_with_records() {
        let mut site = create_test_site();
        let mut legacy = Equipment::new(EquipmentRole::Legacy, Vendor::Huawei);
        legacy.model = "BBU3900".to_string();
        site.equipment.push(legacy);
        site.technical_instructions = Some(TechnicalInstructions {
            steps: vec![SwapStep {
                task: "Power isolation".to_string(),
                duration: "30m".to_string(),
                precaution: "Lockout tagout".to_string(),
            }],
            alerts: vec!["Verify grounding".to_string()],
            generated_at: Timestamp::from_second(1641081600).unwrap(),
        });

        let output = format!("{site}");
        assert!(output.contains("## Equipment"));
        assert!(output.contains("- Legacy-Module (Huawei): model BBU3900, serial -"));
        assert!(output.contains("## Swap Procedure"));
        assert!(output.contains("1. Power isolation (30m), *Lockout tagout*"));
        assert!(output.contains("- **Alert**: Verify grounding"));
    }

    #[test]
    fn test_site_display_without_tasks() {
        let site = Site::new("PH-G-0001");
        let output = format!("{site}");
        assert!(output.starts_with("# PH-G-0001. Unnamed Node"));
        assert!(output.contains("No tasks for this site."));
    }

    #[test]
    fn test_milestone_slip_display() {
        let late = Milestone {
            kind: MilestoneKind::Installation,
            planned: Some(date(2025, 3, 10)),
            actual: Some(date(2025, 3, 14)),
        };
        assert_eq!(late.slip_days(), Some(4));
        assert_eq!(
            format!("{late}"),
            "- Installation: planned 2025-03-10, actual 2025-03-14 (**4d late**)\n"
        );

        let early = Milestone {
            actual: Some(date(2025, 3, 8)),
            ..late.clone()
        };
        assert!(format!("{early}").ends_with("(2d early)\n"));

        let open = Milestone::empty(MilestoneKind::Survey);
        assert_eq!(open.slip_days(), None);
        assert_eq!(format!("{open}"), "- Survey: planned -, actual -\n");
    }

    #[test]
    fn test_sites_display() {
        let mut site = create_test_site();
        site.scheduled_date = Some(date(2025, 6, 2));
        let output = format!("{}", Sites(vec![site]));

        assert!(output.contains("## Makati Tower (ID: PH-G-0042) 17%"));
        assert!(output.contains("- **Status**: ➤ In Progress"));
        assert!(output.contains("- **Tasks**: 1/6"));
        assert!(output.contains("- **Scheduled**: 2025-06-02"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_tasks_display() {
        assert_eq!(format!("{}", Tasks(vec![])), "No tasks found.\n");
        let output = format!("{}", Tasks(default_tasks()));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn test_project_stats() {
        let sites = vec![
            site_at("A", "NCR", 14.0, 121.0, SiteStatus::Completed),
            site_at("B", "NCR", 15.0, 122.0, SiteStatus::InProgress),
            site_at("C", "Visayas", 10.3, 123.9, SiteStatus::Blocked),
            site_at("D", "Visayas", 10.7, 122.5, SiteStatus::Pending),
        ];
        let stats = ProjectStats::from_sites(&sites);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.progress_percent, 25.0);

        assert_eq!(stats.regions.len(), 2);
        let ncr = &stats.regions[0];
        assert_eq!(ncr.region, "NCR");
        assert_eq!(ncr.completed, 1);
        assert!((ncr.centroid.lat - 14.5).abs() < 1e-9);
        assert!((ncr.centroid.lng - 121.5).abs() < 1e-9);

        let output = format!("{stats}");
        assert!(output.contains("- Completed: 1 (25.0%)"));
        assert!(output.contains("- NCR: 1/2 completed, 0 high risk, centred at 14.5000, 121.5000"));
    }

    #[test]
    fn test_empty_project_stats() {
        let stats = ProjectStats::from_sites(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.progress_percent, 0.0);
        assert!(RegionSummary::group(&[]).is_empty());
        assert!(!format!("{stats}").contains("## Regions"));
    }

    #[test]
    fn test_site_filter_status() {
        let site = create_test_site();
        let filter = SiteFilter {
            query: Some("  ".to_string()),
            status: Some(SiteStatus::InProgress),
        };
        assert!(filter.matches(&site));

        let filter = SiteFilter {
            query: Some("ph-g-0042".to_string()),
            status: Some(SiteStatus::Blocked),
        };
        assert!(!filter.matches(&site));
    }

    #[test]
    fn test_coordinates_validity() {
        assert!(Coordinates::default().is_valid());
        assert!(Coordinates { lat: -90.0, lng: 180.0 }.is_valid());
        assert!(!Coordinates { lat: 90.5, lng: 0.0 }.is_valid());
        assert!(!Coordinates { lat: 0.0, lng: -181.0 }.is_valid());
    }

    #[test]
    fn test_local_datetime_format() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = format!("{}", LocalDateTime(&ts));
        // YYYY-MM-DD HH:MM:SS followed by a zone abbreviation
        assert!(output.len() > 19);
        assert_eq!(&output[4..5], "-");
        assert_eq!(&output[13..14], ":");
    }
}
