//! Output formatting module

use freta_app::dashboard::Dashboard;
use freta_domain::model::{FieldId, TransportRequest, FIELDS};
use freta_domain::service::aggregate::RankingEntry;
use freta_types::{OutputFormat, Result};

pub fn print_fields(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let fields: Vec<serde_json::Value> = FIELDS
            .iter()
            .map(|definition| {
                serde_json::json!({
                    "id": definition.id.to_string(),
                    "label": definition.label,
                    "kind": definition.kind.label(),
                    "required": definition.required,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("\nRequest Field Schema");
    println!("====================");
    for definition in FIELDS.iter() {
        println!(
            "{:<8} {:<8} {:<10} {}",
            definition.id.to_string(),
            definition.kind.label(),
            if definition.required { "required" } else { "" },
            definition.label
        );
    }
    Ok(())
}

pub fn print_requests(
    output_format: OutputFormat,
    requests: &[TransportRequest],
    total: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&requests)?);
        return Ok(());
    }

    if requests.is_empty() {
        println!("No requests registered.");
        return Ok(());
    }

    println!("\nRegistered Requests");
    println!("===================");
    println!(
        "{:<10} {:<14} {:<28} {:<12} {:<30}",
        "ID", "SEI", "EVENTO", "SAÍDA", "TRAJETO"
    );
    for request in requests {
        let route = format!(
            "{} -> {}",
            truncate(request.value(FieldId::ORIGIN_CITY), 13),
            truncate(request.value(FieldId::DESTINATION_CITY), 13)
        );
        println!(
            "{:<10} {:<14} {:<28} {:<12} {:<30}",
            short_id(request.id()),
            truncate(request.value(FieldId::PROCESS_NUMBER), 13),
            truncate(request.value(FieldId::EVENT_NAME), 27),
            request.value(FieldId::DEPARTURE_DATE),
            route
        );
    }
    if requests.len() < total {
        println!("... showing {} of {} requests", requests.len(), total);
    }
    Ok(())
}

pub fn print_dashboard(output_format: OutputFormat, dashboard: &Dashboard) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
        return Ok(());
    }

    let stats = &dashboard.stats;

    println!("\nPainel de Fretamento");
    println!("====================");
    println!("Processos distintos:   {}", stats.total_processes);
    println!("Solicitações válidas:  {}", stats.total_requests);
    println!("Ônibus contratados:    {:.0}", stats.managerial.total_buses);
    println!("Valor realizado:       {}", format_money(stats.total_value));

    println!("\nStatus");
    println!("------");
    println!("Solicitada:       {}", stats.by_status.solicitada);
    println!("Confirmada:       {}", stats.by_status.confirmada);
    println!("Realizada:        {}", stats.by_status.realizada);
    println!("Cancelada:        {}", stats.by_status.cancelada);
    println!("Não Atendida:     {}", stats.by_status.nao_atendida);
    println!("Cobrança/Diária:  {}", stats.by_status.cobranca_diaria);

    println!("\nFinanceiro (previsto / realizado)");
    println!("---------------------------------");
    let financial = &stats.financial;
    for (label, pair) in [
        ("Quilometragem", financial.km_val),
        ("Diárias", financial.diarias_val),
        ("Motorista extra", financial.motorista_val),
        ("Total geral", financial.total_geral),
    ] {
        println!(
            "{:<16} {:>18} / {:>18}",
            label,
            format_money(pair.previsto),
            format_money(pair.realizado)
        );
    }

    println!("\nOcupação");
    println!("--------");
    println!("Baixa:  {}", stats.managerial.occupancy.low);
    println!("Média:  {}", stats.managerial.occupancy.medium);
    println!("Boa:    {}", stats.managerial.occupancy.high);

    print_ranking(
        "Executivas com mais solicitações",
        &dashboard.rankings.executives.by_requests,
    );
    print_ranking(
        "Setores com mais solicitações",
        &dashboard.rankings.sectors.by_requests,
    );

    if !dashboard.companies.is_empty() {
        println!("\nFrota por empresa");
        println!("-----------------");
        for share in &dashboard.companies {
            println!(
                "{:<34} {:>6.0} ônibus ({:>5.1}%)",
                truncate(&share.name, 33),
                share.vehicles,
                share.percentage
            );
        }
    }

    Ok(())
}

fn print_ranking(title: &str, entries: &[RankingEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("\n{}", title);
    println!("{}", "-".repeat(title.chars().count()));
    for (position, entry) in entries.iter().enumerate() {
        println!(
            "{}. {:<40} {} solicitações",
            position + 1,
            truncate(&entry.name, 39),
            entry.tally.requests
        );
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

/// Brazilian currency formatting: dot for thousands, comma for cents.
fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, fraction)
}
