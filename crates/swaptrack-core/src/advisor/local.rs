//! Offline strategy engine built on fixed heuristics.

use async_trait::async_trait;
use jiff::{civil::Date, ToSpan, Zoned};

use super::{Advisor, ProjectAnalysis, ScheduleEntry, SwapPlan};
use crate::{
    error::Result,
    models::{RiskLevel, Site, SiteStatus, SwapStep, Vendor},
};

const FIXED_RISKS: [&str; 3] = [
    "Interoperability issues between Legacy Huawei BBU and Ericsson Radio 4415.",
    "Extreme weather window affecting Visayas/Mindanao tower climbs.",
    "Fiber backhaul capacity limitations during dual-stack operation.",
];

const SWAP_ALERTS: [&str; 3] = [
    "Check 4G/5G cross-layer mapping parameters.",
    "Verify legacy antenna tilt before final handover.",
    "Ensure grounding is bonded to the main ring.",
];

const MAX_PRIORITIES: usize = 3;

/// Deterministic advisor that needs no network access.
///
/// Output depends only on the inventory passed in and, for schedules, the
/// start date.
#[derive(Debug, Clone, Default)]
pub struct LocalStrategyEngine {
    start_date: Option<Date>,
}

impl LocalStrategyEngine {
    /// Engine that schedules from the current local date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that schedules from a fixed date.
    pub fn starting_on(date: Date) -> Self {
        Self {
            start_date: Some(date),
        }
    }

    fn start(&self) -> Date {
        self.start_date.unwrap_or_else(|| Zoned::now().date())
    }

    /// Computes the project analysis synchronously.
    pub fn analysis(&self, sites: &[Site]) -> ProjectAnalysis {
        if sites.is_empty() {
            return ProjectAnalysis {
                insights: vec!["Inventory empty. Please add sites to begin analysis.".to_string()],
                risks: vec!["None".to_string()],
                priorities: vec!["None".to_string()],
                health_percent: "0%".to_string(),
            };
        }

        let total = sites.len();
        let completed = count(sites, |s| s.status == SiteStatus::Completed);
        let blocked = count(sites, |s| s.status == SiteStatus::Blocked);
        let high_risk = count(sites, |s| s.risk_level == RiskLevel::High);

        let at_risk_free = total as f64 - blocked as f64 - high_risk as f64;
        let health = ((completed as f64 + at_risk_free * 0.5) / total as f64 * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8;

        let mut insights = vec![format!("Localized analysis of {total} nodes completed.")];
        insights.push(if blocked > 0 {
            format!(
                "Critical: {blocked} sites are currently in BLOCKED status. Immediate field intervention required."
            )
        } else {
            "No critical path blockages detected.".to_string()
        });
        insights.push(if high_risk > 1 {
            format!(
                "High-risk density detected in {}. Logistics buffer should be increased.",
                densest_region(sites)
            )
        } else {
            "Supply chain parameters remain within nominal limits.".to_string()
        });

        let mut open: Vec<&Site> = sites.iter().filter(|s| !s.is_completed()).collect();
        // Stable: high-risk first, inventory order otherwise
        open.sort_by_key(|s| s.risk_level != RiskLevel::High);
        let priorities = open
            .into_iter()
            .take(MAX_PRIORITIES)
            .map(|s| format!("Site {}: {} ({} Risk)", s.id, s.name, s.risk_level))
            .collect();

        ProjectAnalysis {
            insights,
            risks: FIXED_RISKS.iter().map(|r| r.to_string()).collect(),
            priorities,
            health_percent: format!("{health}%"),
        }
    }

    /// Pairs open sites onto every other day from the start date.
    pub fn proposed_schedule(&self, sites: &[Site]) -> Vec<ScheduleEntry> {
        let start = self.start();
        sites
            .iter()
            .filter(|s| !s.is_completed())
            .enumerate()
            .map(|(i, site)| {
                let offset = ((i / 2) * 2) as i64;
                ScheduleEntry {
                    site_id: site.id.clone(),
                    scheduled_date: start.saturating_add(offset.days()),
                    rationale: format!("Regional cluster optimization for {}.", site.region),
                }
            })
            .collect()
    }

    /// Builds the standard five-step swap procedure for a site.
    pub fn procedure(&self, site: &Site) -> SwapPlan {
        let cabinet = if site.current_vendor == Vendor::Huawei {
            "BBU3900"
        } else {
            "Flexi"
        };
        let steps = [
            ("On-site safety briefing and PPE check".to_string(), "30m", "Climbing gear inspection"),
            (
                format!("De-commissioning of legacy {} {cabinet} cabinet", site.current_vendor),
                "2h",
                "Power isolation protocols",
            ),
            (
                "Installation of Ericsson Baseband 6630 and Router 6000".to_string(),
                "3h",
                "Static discharge prevention",
            ),
            (
                "Radio 4415 installation and fiber re-termination".to_string(),
                "4h",
                "RF radiation safety distance",
            ),
            (
                "Call test and Core Network integration".to_string(),
                "2h",
                "Data session verification",
            ),
        ];

        SwapPlan {
            steps: steps
                .into_iter()
                .map(|(task, duration, precaution)| SwapStep {
                    task,
                    duration: duration.to_string(),
                    precaution: precaution.to_string(),
                })
                .collect(),
            alerts: SWAP_ALERTS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn count(sites: &[Site], predicate: impl Fn(&Site) -> bool) -> usize {
    sites.iter().filter(|s| predicate(s)).count()
}

/// Region holding the most sites; ties go to the region seen first.
fn densest_region(sites: &[Site]) -> &str {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for site in sites {
        match counts.iter_mut().find(|(region, _)| *region == site.region) {
            Some((_, n)) => *n += 1,
            None => counts.push((&site.region, 1)),
        }
    }
    counts
        .iter()
        .fold(None, |best: Option<(&str, usize)>, &(region, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((region, n)),
        })
        .map_or("Unknown", |(region, _)| region)
}

#[async_trait]
impl Advisor for LocalStrategyEngine {
    fn name(&self) -> &str {
        "local"
    }

    async fn analyze(&self, sites: &[Site]) -> Result<ProjectAnalysis> {
        Ok(self.analysis(sites))
    }

    async fn schedule(&self, sites: &[Site]) -> Result<Vec<ScheduleEntry>> {
        Ok(self.proposed_schedule(sites))
    }

    async fn swap_plan(&self, site: &Site) -> Result<SwapPlan> {
        Ok(self.procedure(site))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn site(id: &str, region: &str, status: SiteStatus, risk: RiskLevel) -> Site {
        let mut site = Site::new(id);
        site.name = format!("Node {id}");
        site.region = region.to_string();
        site.status = status;
        site.risk_level = risk;
        site
    }

    #[test]
    fn test_empty_inventory() {
        let analysis = LocalStrategyEngine::new().analysis(&[]);
        assert_eq!(analysis.health_percent, "0%");
        assert_eq!(
            analysis.insights,
            vec!["Inventory empty. Please add sites to begin analysis."]
        );
        assert_eq!(analysis.risks, vec!["None"]);
        assert_eq!(analysis.priorities, vec!["None"]);
    }

    #[test]
    fn test_health_formula() {
        // 1 completed, 1 blocked, 1 high-risk, 1 plain: (1 + (4-1-1)*0.5)/4 = 50%
        let sites = vec![
            site("A", "NCR", SiteStatus::Completed, RiskLevel::Low),
            site("B", "NCR", SiteStatus::Blocked, RiskLevel::Low),
            site("C", "Visayas", SiteStatus::Pending, RiskLevel::High),
            site("D", "Visayas", SiteStatus::Planned, RiskLevel::Medium),
        ];
        let analysis = LocalStrategyEngine::new().analysis(&sites);
        assert_eq!(analysis.health_percent, "50%");
        assert_eq!(analysis.insights.len(), 3);
        assert_eq!(analysis.insights[0], "Localized analysis of 4 nodes completed.");
        assert!(analysis.insights[1].starts_with("Critical: 1 sites"));
        assert_eq!(
            analysis.insights[2],
            "Supply chain parameters remain within nominal limits."
        );
        assert_eq!(analysis.risks.len(), 3);
    }

    #[test]
    fn test_health_is_clamped() {
        // Blocked and high-risk on the same site is counted twice
        let sites = vec![site("A", "NCR", SiteStatus::Blocked, RiskLevel::High)];
        assert_eq!(LocalStrategyEngine::new().analysis(&sites).health_percent, "0%");
    }

    #[test]
    fn test_high_risk_density_and_priorities() {
        let sites = vec![
            site("A", "NCR", SiteStatus::Pending, RiskLevel::Low),
            site("B", "Mindanao", SiteStatus::Pending, RiskLevel::High),
            site("C", "Mindanao", SiteStatus::Completed, RiskLevel::High),
            site("D", "Mindanao", SiteStatus::InProgress, RiskLevel::Medium),
            site("E", "NCR", SiteStatus::Planned, RiskLevel::High),
        ];
        let analysis = LocalStrategyEngine::new().analysis(&sites);
        assert_eq!(
            analysis.insights[1],
            "No critical path blockages detected."
        );
        assert_eq!(
            analysis.insights[2],
            "High-risk density detected in Mindanao. Logistics buffer should be increased."
        );
        assert_eq!(
            analysis.priorities,
            vec![
                "Site B: Node B (High Risk)",
                "Site E: Node E (High Risk)",
                "Site A: Node A (Low Risk)",
            ]
        );
    }

    #[test]
    fn test_schedule_pairs_sites() {
        let sites = vec![
            site("A", "NCR", SiteStatus::Pending, RiskLevel::Low),
            site("B", "NCR", SiteStatus::Completed, RiskLevel::Low),
            site("C", "Visayas", SiteStatus::Pending, RiskLevel::Low),
            site("D", "Visayas", SiteStatus::Blocked, RiskLevel::Low),
            site("E", "Mindanao", SiteStatus::Pending, RiskLevel::Low),
        ];
        let engine = LocalStrategyEngine::starting_on(date(2025, 1, 30));
        let schedule = engine.proposed_schedule(&sites);

        let ids: Vec<&str> = schedule.iter().map(|e| e.site_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "D", "E"]);
        assert_eq!(schedule[0].scheduled_date, date(2025, 1, 30));
        assert_eq!(schedule[1].scheduled_date, date(2025, 1, 30));
        assert_eq!(schedule[2].scheduled_date, date(2025, 2, 1));
        assert_eq!(schedule[3].scheduled_date, date(2025, 2, 1));
        assert_eq!(
            schedule[3].rationale,
            "Regional cluster optimization for Mindanao."
        );
    }

    #[test]
    fn test_swap_plan_mentions_legacy_cabinet() {
        let engine = LocalStrategyEngine::new();
        let mut nokia = site("N", "NCR", SiteStatus::Pending, RiskLevel::Low);
        nokia.current_vendor = Vendor::Nokia;
        let huawei = site("H", "NCR", SiteStatus::Pending, RiskLevel::Low);

        let plan = engine.procedure(&huawei);
        assert_eq!(plan.steps.len(), 5);
        assert_eq!(
            plan.steps[1].task,
            "De-commissioning of legacy Huawei BBU3900 cabinet"
        );
        assert_eq!(plan.alerts.len(), 3);

        let plan = engine.procedure(&nokia);
        assert_eq!(plan.steps[1].task, "De-commissioning of legacy Nokia Flexi cabinet");
        assert_eq!(plan.steps[3].duration, "4h");
    }
}
