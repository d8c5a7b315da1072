//! Aggregate statistics over the site inventory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Coordinates, RiskLevel, Site, SiteStatus};

/// Headline numbers for the monitoring dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectStats {
    /// Number of sites in the inventory
    pub total: u32,
    /// Sites with status Completed
    pub completed: u32,
    /// Sites with status In Progress
    pub in_progress: u32,
    /// Sites with status Blocked
    pub blocked: u32,
    /// Sites rated High risk
    pub high_risk: u32,
    /// Share of completed sites, 0.0 to 100.0
    pub progress_percent: f64,
    /// Per-region breakdown, ordered by region name
    pub regions: Vec<RegionSummary>,
}

/// Sites grouped by region, with the centroid of their coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub total: u32,
    pub completed: u32,
    pub high_risk: u32,
    pub centroid: Coordinates,
}

impl ProjectStats {
    /// Computes dashboard statistics for a set of sites.
    pub fn from_sites(sites: &[Site]) -> Self {
        let count = |status: SiteStatus| sites.iter().filter(|s| s.status == status).count() as u32;

        let total = sites.len() as u32;
        let completed = count(SiteStatus::Completed);
        let progress_percent = if total > 0 {
            f64::from(completed) / f64::from(total) * 100.0
        } else {
            0.0
        };

        Self {
            total,
            completed,
            in_progress: count(SiteStatus::InProgress),
            blocked: count(SiteStatus::Blocked),
            high_risk: sites
                .iter()
                .filter(|s| s.risk_level == RiskLevel::High)
                .count() as u32,
            progress_percent,
            regions: RegionSummary::group(sites),
        }
    }
}

impl RegionSummary {
    /// Groups sites by region name.
    pub fn group(sites: &[Site]) -> Vec<RegionSummary> {
        let mut by_region: BTreeMap<&str, Vec<&Site>> = BTreeMap::new();
        for site in sites {
            by_region.entry(site.region.as_str()).or_default().push(site);
        }

        by_region
            .into_iter()
            .map(|(region, members)| {
                let n = members.len() as f64;
                let lat = members.iter().map(|s| s.coordinates.lat).sum::<f64>() / n;
                let lng = members.iter().map(|s| s.coordinates.lng).sum::<f64>() / n;
                RegionSummary {
                    region: region.to_string(),
                    total: members.len() as u32,
                    completed: members.iter().filter(|s| s.is_completed()).count() as u32,
                    high_risk: members
                        .iter()
                        .filter(|s| s.risk_level == RiskLevel::High)
                        .count() as u32,
                    centroid: Coordinates { lat, lng },
                }
            })
            .collect()
    }
}
