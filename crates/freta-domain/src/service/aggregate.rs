//! Dashboard aggregation
//!
//! Every aggregate is a deterministic pass over the valid-row set. Sums and
//! counts are order-independent; rankings break ties by group name so they
//! are too. Nothing here is cached: a fresh fetch recomputes everything.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{Occupancy, ProcessData, Status};
use crate::service::parse::{month_number, MONTH_SHORT};

/// Entries kept per ranking list.
pub const RANKING_SIZE: usize = 3;

/// Requests opened with less advance notice than this count as delayed.
pub const DELAYED_DEADLINE_DAYS: f64 = 15.0;

/// A planned/actually-incurred pair for one financial sub-metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PrevistoRealizado {
    pub previsto: f64,
    pub realizado: f64,
}

impl PrevistoRealizado {
    fn add(&mut self, previsto: f64, realizado: f64) {
        self.previsto += previsto;
        self.realizado += realizado;
    }
}

/// Requests per status category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "Solicitada")]
    pub solicitada: usize,
    #[serde(rename = "Confirmada")]
    pub confirmada: usize,
    #[serde(rename = "Realizada")]
    pub realizada: usize,
    #[serde(rename = "Cancelada")]
    pub cancelada: usize,
    #[serde(rename = "Não Atendida")]
    pub nao_atendida: usize,
    #[serde(rename = "Cobrança/Diária")]
    pub cobranca_diaria: usize,
}

impl StatusCounts {
    fn bump(&mut self, status: Status) {
        match status {
            Status::Solicitada => self.solicitada += 1,
            Status::Confirmada => self.confirmada += 1,
            Status::Realizada => self.realizada += 1,
            Status::Cancelada => self.cancelada += 1,
            Status::NaoAtendida => self.nao_atendida += 1,
            Status::CobrancaDiaria => self.cobranca_diaria += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Solicitada => self.solicitada,
            Status::Confirmada => self.confirmada,
            Status::Realizada => self.realizada,
            Status::Cancelada => self.cancelada,
            Status::NaoAtendida => self.nao_atendida,
            Status::CobrancaDiaria => self.cobranca_diaria,
        }
    }
}

/// Summed previsto/realizado per financial category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FinancialTotals {
    pub total_geral: PrevistoRealizado,
    pub km_qtd: PrevistoRealizado,
    pub km_val: PrevistoRealizado,
    pub diarias_qtd: PrevistoRealizado,
    pub diarias_val: PrevistoRealizado,
    pub motorista_qtd: PrevistoRealizado,
    pub motorista_val: PrevistoRealizado,
}

/// Requests per occupancy band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OccupancyCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ManagerialStats {
    pub total_buses: f64,
    pub occupancy: OccupancyCounts,
}

/// Cross-cutting aggregates over the valid-row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Distinct process numbers.
    pub total_processes: usize,
    /// Valid rows (one row per request line).
    pub total_requests: usize,
    /// Realized grand total across the three value categories.
    pub total_value: f64,
    pub by_status: StatusCounts,
    pub financial: FinancialTotals,
    pub managerial: ManagerialStats,
}

/// Compute the dashboard aggregates in one pass.
pub fn compute_stats(processes: &[ProcessData]) -> DashboardStats {
    let mut stats = DashboardStats::default();
    let mut distinct: BTreeSet<&str> = BTreeSet::new();

    for process in processes {
        distinct.insert(&process.processo);
        stats.by_status.bump(process.status);

        let financial = &mut stats.financial;
        financial.km_qtd.add(process.km_qtd_previsto, process.km_qtd_realizado);
        financial.km_val.add(process.km_val_previsto, process.km_val_realizado);
        financial
            .diarias_qtd
            .add(process.dia_qtd_previsto, process.dia_qtd_realizado);
        financial
            .diarias_val
            .add(process.dia_val_previsto, process.dia_val_realizado);
        financial
            .motorista_qtd
            .add(process.mot_qtd_previsto, process.mot_qtd_realizado);
        financial
            .motorista_val
            .add(process.mot_val_previsto, process.mot_val_realizado);
        financial.total_geral.add(
            process.km_val_previsto + process.dia_val_previsto + process.mot_val_previsto,
            process.km_val_realizado + process.dia_val_realizado + process.mot_val_realizado,
        );

        stats.managerial.total_buses += process.bus_quantity;
        match process.occupancy {
            Occupancy::Baixa => stats.managerial.occupancy.low += 1,
            Occupancy::Media => stats.managerial.occupancy.medium += 1,
            Occupancy::Boa => stats.managerial.occupancy.high += 1,
            Occupancy::NaoAplicavel => {}
        }
    }

    stats.total_processes = distinct.len();
    stats.total_requests = processes.len();
    stats.total_value = stats.financial.total_geral.realizado;
    stats
}

/// Per-group tallies feeding the ranking lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupTally {
    pub requests: usize,
    pub vehicles: f64,
    pub low_occupancy: usize,
    pub delayed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    #[serde(flatten)]
    pub tally: GroupTally,
}

/// Top-3 lists for one grouping dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingSet {
    pub by_requests: Vec<RankingEntry>,
    pub by_vehicles: Vec<RankingEntry>,
    pub by_low_occupancy: Vec<RankingEntry>,
    pub by_delayed: Vec<RankingEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rankings {
    pub executives: RankingSet,
    pub sectors: RankingSet,
}

/// Rank executives and sectors by request volume, vehicles, low occupancy,
/// and delayed requests (deadline under [`DELAYED_DEADLINE_DAYS`]).
pub fn compute_rankings(processes: &[ProcessData]) -> Rankings {
    let executives = tally_groups(processes, |p| &p.executive, "Não Informado");
    let sectors = tally_groups(processes, |p| &p.sector, "Geral");
    Rankings {
        executives: ranking_set(&executives),
        sectors: ranking_set(&sectors),
    }
}

fn tally_groups<'a>(
    processes: &'a [ProcessData],
    key: impl Fn(&'a ProcessData) -> &'a str,
    fallback: &str,
) -> BTreeMap<String, GroupTally> {
    let mut groups: BTreeMap<String, GroupTally> = BTreeMap::new();
    for process in processes {
        let name = match key(process) {
            "" => fallback,
            name => name,
        };
        let tally = groups.entry(name.to_string()).or_default();
        tally.requests += 1;
        tally.vehicles += process.bus_quantity;
        if process.occupancy == Occupancy::Baixa {
            tally.low_occupancy += 1;
        }
        if process.deadline_days < DELAYED_DEADLINE_DAYS {
            tally.delayed += 1;
        }
    }
    groups
}

fn ranking_set(groups: &BTreeMap<String, GroupTally>) -> RankingSet {
    RankingSet {
        by_requests: top_by(groups, |t| t.requests as f64),
        by_vehicles: top_by(groups, |t| t.vehicles),
        by_low_occupancy: top_by(groups, |t| t.low_occupancy as f64),
        by_delayed: top_by(groups, |t| t.delayed as f64),
    }
}

fn top_by(
    groups: &BTreeMap<String, GroupTally>,
    metric: impl Fn(&GroupTally) -> f64,
) -> Vec<RankingEntry> {
    // Groups arrive name-sorted; the stable sort keeps that order on ties,
    // so the outcome does not depend on input row order.
    let mut entries: Vec<RankingEntry> = groups
        .iter()
        .map(|(name, tally)| RankingEntry {
            name: name.clone(),
            tally: *tally,
        })
        .collect();
    entries.sort_by(|a, b| {
        metric(&b.tally)
            .partial_cmp(&metric(&a.tally))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(RANKING_SIZE);
    entries
}

/// One calendar month of trend data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub requests: usize,
    pub vehicles: f64,
    pub km_value: f64,
    pub daily_value: f64,
    pub driver_value: f64,
}

/// Realized totals per month, always twelve entries in calendar order.
pub fn monthly_trends(processes: &[ProcessData]) -> Vec<MonthlyTrend> {
    let mut trends: Vec<MonthlyTrend> = MONTH_SHORT
        .iter()
        .map(|month| MonthlyTrend {
            month,
            requests: 0,
            vehicles: 0.0,
            km_value: 0.0,
            daily_value: 0.0,
            driver_value: 0.0,
        })
        .collect();

    for process in processes {
        if let Some(month) = month_number(&process.start_date) {
            let trend = &mut trends[month - 1];
            trend.requests += 1;
            trend.vehicles += process.bus_quantity;
            trend.km_value += process.km_val_realizado;
            trend.daily_value += process.dia_val_realizado;
            trend.driver_value += process.mot_val_realizado;
        }
    }
    trends
}

/// A company's share of contracted vehicles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyShare {
    pub name: String,
    pub vehicles: f64,
    pub percentage: f64,
}

/// Vehicle distribution per company, largest share first.
pub fn company_shares(processes: &[ProcessData]) -> Vec<CompanyShare> {
    let mut distribution: BTreeMap<String, f64> = BTreeMap::new();
    for process in processes {
        let name = if process.company.is_empty() {
            "Não Informado"
        } else {
            &process.company
        };
        *distribution.entry(name.to_string()).or_default() += process.bus_quantity;
    }

    let total: f64 = distribution.values().sum();
    let mut shares: Vec<CompanyShare> = distribution
        .into_iter()
        .map(|(name, vehicles)| CompanyShare {
            name,
            vehicles,
            percentage: if total > 0.0 {
                vehicles / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    shares.sort_by(|a, b| {
        b.vehicles
            .partial_cmp(&a.vehicles)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    shares
}
