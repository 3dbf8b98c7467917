//! Dashboard use case
//!
//! Fetch the feed, keep the valid rows, apply the user's filters, and
//! recompute every aggregate. Each load rebuilds the whole state; nothing
//! survives from a previous fetch.

use serde::Serialize;

use freta_domain::model::ProcessData;
use freta_domain::service::{
    company_shares, compute_rankings, compute_stats, monthly_trends, CompanyShare,
    DashboardStats, MonthlyTrend, ProcessFilter, Rankings,
};
use freta_feed::{map_rows, valid_rows, FeedClient, FeedTable};
use freta_types::Result;

/// Everything a dashboard render needs, derived from one fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub processes: Vec<ProcessData>,
    pub stats: DashboardStats,
    pub rankings: Rankings,
    pub monthly: Vec<MonthlyTrend>,
    pub companies: Vec<CompanyShare>,
}

/// Fetch the feed and build the dashboard state.
pub async fn load_dashboard(client: &FeedClient, filter: &ProcessFilter) -> Result<Dashboard> {
    let table = client.fetch().await?;
    Ok(build_dashboard(&table, filter))
}

/// Pure half of the load: reshape, filter, aggregate.
pub fn build_dashboard(table: &FeedTable, filter: &ProcessFilter) -> Dashboard {
    let mut processes = valid_rows(map_rows(table));
    if !filter.is_empty() {
        processes = filter.apply(&processes);
    }

    let stats = compute_stats(&processes);
    let rankings = compute_rankings(&processes);
    let monthly = monthly_trends(&processes);
    let companies = company_shares(&processes);

    Dashboard {
        processes,
        stats,
        rankings,
        monthly,
        companies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freta_domain::model::Status;

    fn table() -> FeedTable {
        // Two data rows plus one in-band header row, as the feed publishes
        // them.
        let mut rows = Vec::new();
        for (processo, status, km_real) in [
            ("PROCESSO", "", "0"),
            ("SEI-1", "CONFIRMADA", "R$ 1.000,00"),
            ("SEI-2", "REALIZADA - OK", "R$ 500,00"),
        ] {
            let mut cells = vec![serde_json::Value::Null; 66];
            cells[4] = serde_json::json!({ "v": processo });
            cells[15] = serde_json::json!({ "v": "Date(2026,2,10)" });
            cells[37] = serde_json::json!({ "v": status });
            cells[39] = serde_json::json!({ "v": 2 });
            cells[46] = serde_json::json!({ "v": km_real });
            rows.push(serde_json::json!({ "c": cells }));
        }
        serde_json::from_value(serde_json::json!({ "rows": rows })).expect("table")
    }

    #[test]
    fn test_build_dashboard_filters_and_aggregates() {
        let dashboard = build_dashboard(&table(), &ProcessFilter::default());

        assert_eq!(dashboard.processes.len(), 2);
        assert_eq!(dashboard.stats.total_processes, 2);
        assert_eq!(dashboard.stats.by_status.confirmada, 1);
        assert_eq!(dashboard.stats.by_status.realizada, 1);
        assert_eq!(dashboard.stats.total_value, 1500.0);
        assert_eq!(dashboard.stats.managerial.total_buses, 4.0);
        assert_eq!(dashboard.monthly[2].requests, 2);
    }

    #[test]
    fn test_build_dashboard_applies_status_filter() {
        let filter = ProcessFilter {
            status: Some(Status::Confirmada),
            ..Default::default()
        };
        let dashboard = build_dashboard(&table(), &filter);

        assert_eq!(dashboard.processes.len(), 1);
        assert_eq!(dashboard.processes[0].processo, "SEI-1");
        assert_eq!(dashboard.stats.total_value, 1000.0);
    }
}
