//! Command handlers

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::ProgressBar;

use freta_app::config::Config;
use freta_app::dashboard::load_dashboard;
use freta_app::export::{
    derive_export_filename, export_passenger_list, export_passenger_list_pdf, export_requests,
    passenger_list_filename, PassengerListDocument,
};
use freta_app::repository::open_request_store;
use freta_domain::model::{RequestDraft, Status};
use freta_domain::service::ProcessFilter;
use freta_feed::FeedClient;
use freta_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Fields => output::print_fields(output_format),
        Commands::Add { draft } => cmd_add(&config, output_format, &draft),
        Commands::Update { id, draft } => cmd_update(&config, &id, &draft),
        Commands::Duplicate { id } => cmd_duplicate(&config, &id),
        Commands::Remove { id, yes } => cmd_remove(&config, &id, yes),
        Commands::List { limit } => cmd_list(&config, output_format, limit),
        Commands::Export { output } => cmd_export(&config, output),
        Commands::Passengers { list, output, pdf } => cmd_passengers(&list, output, pdf),
        Commands::Dashboard {
            url,
            process,
            month,
            executive,
            sector,
            company,
            status,
        } => {
            let filter = ProcessFilter {
                process,
                month: month.map(pad_month),
                executive,
                sector,
                company,
                status: status.as_deref().map(parse_status).transpose()?,
            };
            cmd_dashboard(&config, output_format, url, filter)
        }
        Commands::Config {
            show,
            set_data_dir,
            set_feed_url,
            set_output,
            reset,
        } => cmd_config(show, set_data_dir, set_feed_url, set_output, reset),
    }
}

fn load_draft(path: &Path) -> Result<RequestDraft> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    RequestDraft::from_json(&value)
}

fn cmd_add(config: &Config, output_format: OutputFormat, draft_path: &Path) -> Result<()> {
    let draft = load_draft(draft_path)?;
    draft.validate_required()?;

    let mut store = open_request_store(config)?;
    let record = store.create(draft)?;

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Request registered: {}", record.id());
    }
    Ok(())
}

fn cmd_update(config: &Config, id: &str, draft_path: &Path) -> Result<()> {
    let draft = load_draft(draft_path)?;
    draft.validate_required()?;

    let mut store = open_request_store(config)?;
    store.update(id, draft)?;

    println!("Request updated: {}", id);
    Ok(())
}

fn cmd_duplicate(config: &Config, id: &str) -> Result<()> {
    let mut store = open_request_store(config)?;
    let copy = store.duplicate(id)?;
    println!("Request duplicated: {} -> {}", id, copy.id());
    Ok(())
}

fn cmd_remove(config: &Config, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete request {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }

    let mut store = open_request_store(config)?;
    if store.remove(id)? {
        println!("Request removed: {}", id);
    } else {
        println!("No request found with id {} (nothing removed)", id);
    }
    Ok(())
}

fn cmd_list(config: &Config, output_format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let store = open_request_store(config)?;
    let requests = store.all();
    let shown = match limit {
        Some(limit) => &requests[..limit.min(requests.len())],
        None => requests,
    };
    output::print_requests(output_format, shown, requests.len())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let store = open_request_store(config)?;
    let requests = store.all();

    let output_path =
        output.unwrap_or_else(|| PathBuf::from(derive_export_filename(requests)));

    export_requests(requests, &output_path)?;
    println!(
        "Exported {} request(s) to: {}",
        requests.len(),
        output_path.display()
    );
    Ok(())
}

fn cmd_passengers(list_path: &Path, output: Option<PathBuf>, pdf: bool) -> Result<()> {
    let content = std::fs::read_to_string(list_path)?;
    let document: PassengerListDocument = serde_json::from_str(&content)?;
    let (header, passengers) = document.into_parts();

    let output_path = output.unwrap_or_else(|| {
        let filename = passenger_list_filename(&header);
        if pdf {
            PathBuf::from(filename.replace(".xlsx", ".pdf"))
        } else {
            PathBuf::from(filename)
        }
    });

    if pdf {
        export_passenger_list_pdf(&header, &passengers, &output_path)?;
    } else {
        export_passenger_list(&header, &passengers, &output_path)?;
    }

    println!(
        "Exported {} passenger(s) to: {}",
        passengers.len(),
        output_path.display()
    );
    Ok(())
}

fn cmd_dashboard(
    config: &Config,
    output_format: OutputFormat,
    url: Option<String>,
    filter: ProcessFilter,
) -> Result<()> {
    let client = FeedClient::new(url.unwrap_or_else(|| config.feed_url()));

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Loading published feed...");

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(load_dashboard(&client, &filter));
    spinner.finish_and_clear();

    match result {
        Ok(dashboard) => output::print_dashboard(output_format, &dashboard),
        Err(e) => {
            eprintln!("The feed could not be loaded. Run the command again to retry.");
            Err(e)
        }
    }
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_feed_url: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        changed = true;
    }
    if let Some(feed_url) = set_feed_url {
        config.feed_url = Some(feed_url);
        changed = true;
    }
    if let Some(output_format) = set_output {
        config.output_format = output_format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn pad_month(month: String) -> String {
    if month.len() == 1 {
        format!("0{}", month)
    } else {
        month
    }
}

fn parse_status(raw: &str) -> Result<Status> {
    let needle = raw.trim().to_lowercase();
    Status::ALL
        .into_iter()
        .find(|status| status.label().to_lowercase() == needle)
        .ok_or_else(|| {
            let options: Vec<&str> = Status::ALL.iter().map(|s| s.label()).collect();
            Error::Validation(format!(
                "unknown status '{}' (expected one of: {})",
                raw,
                options.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_accepts_labels() {
        assert_eq!(parse_status("Confirmada").unwrap(), Status::Confirmada);
        assert_eq!(parse_status("não atendida").unwrap(), Status::NaoAtendida);
        assert_eq!(parse_status("cobrança/diária").unwrap(), Status::CobrancaDiaria);
        assert!(parse_status("pendente").is_err());
    }

    #[test]
    fn test_pad_month() {
        assert_eq!(pad_month("3".into()), "03");
        assert_eq!(pad_month("11".into()), "11");
    }
}
