//! Domain services

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod parse;

pub use aggregate::{
    company_shares, compute_rankings, compute_stats, monthly_trends, CompanyShare,
    DashboardStats, FinancialTotals, MonthlyTrend, Rankings,
};
pub use classify::{classify_occupancy, classify_status};
pub use filter::ProcessFilter;
pub use parse::{
    format_date_br, month_name, month_number, normalize_feed_date, parse_decimal, EMPTY_DATE,
};
