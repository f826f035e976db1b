//! paketkalk - package price calculator CLI
//!
//! Computes per-tier EK/VK package prices from a catalogue snapshot.

use anyhow::Context;
use clap::{Parser, Subcommand};
use paketkalk_rs::config::Config;
use paketkalk_rs::core::catalog::CustomerSizeConfig;
use paketkalk_rs::core::cost::{apply_markup, format_cost};
use paketkalk_rs::services::pricing::{PricingService, source_for};
use paketkalk_rs::utils::logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "paketkalk",
    version,
    about = "Package price calculator for managed service bundles"
)]
struct Cli {
    /// Catalogue snapshot: JSON file path or HTTP(S) URL
    #[arg(long, env = "PAKETKALK_CATALOG")]
    catalog: Option<String>,

    /// Engine configuration file (YAML)
    #[arg(long, env = "PAKETKALK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// EK/VK totals for every tier
    Tiers {
        #[arg(long, default_value_t = 0)]
        clients: u32,
        #[arg(long, default_value_t = 0)]
        servers: u32,
        #[arg(long, default_value_t = 0)]
        users: u32,
        /// Optional markup percentage applied to the EK totals for display
        #[arg(long)]
        markup: Option<f64>,
    },
    /// Detailed breakdown for a single tier
    Quote {
        #[arg(long)]
        tier: String,
        #[arg(long, default_value_t = 0)]
        clients: u32,
        #[arg(long, default_value_t = 0)]
        servers: u32,
        #[arg(long, default_value_t = 0)]
        users: u32,
    },
    /// Catalogue statistics
    Stats,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init("info");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    let currency = config.engine.currency.clone();

    let source_spec = cli
        .catalog
        .clone()
        .or_else(|| config.engine.catalog_source.clone())
        .context("no catalogue source: pass --catalog or set catalog_source in the config file")?;

    let service = PricingService::new(config.engine);
    let source = source_for(&source_spec);
    service.load_from(source.as_ref()).await?;

    match cli.command {
        Commands::Tiers {
            clients,
            servers,
            users,
            markup,
        } => {
            let size = CustomerSizeConfig::new(clients, servers, users);
            println!(
                "{:<16} {:>14} {:>14}{}",
                "TIER",
                "EK",
                "VK",
                if markup.is_some() { "         EK+MARKUP" } else { "" }
            );
            for calc in service.calculate_all_tiers(&size) {
                let marked_up = markup
                    .map(|m| format!(" {:>17}", format_cost(apply_markup(calc.total_cost_ek, m), &currency)))
                    .unwrap_or_default();
                println!(
                    "{:<16} {:>14} {:>14}{}",
                    calc.package_type,
                    format_cost(calc.total_cost_ek, &currency),
                    format_cost(calc.total_price_vk, &currency),
                    marked_up
                );
            }
        }
        Commands::Quote {
            tier,
            clients,
            servers,
            users,
        } => {
            let size = CustomerSizeConfig::new(clients, servers, users);
            let calc = service.calculate_for_tier(&tier, &size);

            println!("Tier: {}", calc.package_type);
            println!("\nServices:");
            for line in &calc.services {
                let sla = match (&line.sla_response_time, &line.sla_availability) {
                    (Some(rt), Some(av)) => format!("  [SLA {} / {}]", rt, av),
                    (Some(rt), None) => format!("  [SLA {}]", rt),
                    (None, Some(av)) => format!("  [SLA {}]", av),
                    (None, None) => String::new(),
                };
                println!(
                    "  {:<32} {:<14} {:>12}{}",
                    line.service_name,
                    line.inclusion_type.to_string(),
                    format_cost(line.adjusted_time_cost, &currency),
                    sla
                );
            }
            println!("\nLicenses (deduplicated):");
            for license in &calc.unique_licenses {
                println!(
                    "  {:<32} x{:<5} {:>12} EK {:>12} VK",
                    license.name,
                    license.quantity,
                    format_cost(license.monthly_cost_ek(), &currency),
                    format_cost(license.monthly_price_vk(), &currency)
                );
            }
            println!("\nTime cost (inclusive):    {:>14}", format_cost(calc.total_inclusive_time_cost, &currency));
            println!("Time cost (effort-based): {:>14}", format_cost(calc.total_effort_based_time_cost, &currency));
            println!("License cost EK:          {:>14}", format_cost(calc.total_license_cost_ek, &currency));
            println!("License price VK:         {:>14}", format_cost(calc.total_license_price_vk, &currency));
            println!("Total EK:                 {:>14}", format_cost(calc.total_cost_ek, &currency));
            println!("Total VK:                 {:>14}", format_cost(calc.total_price_vk, &currency));
        }
        Commands::Stats => {
            let stats = service.statistics();
            println!("Services:        {} ({} active)", stats.total_services, stats.active_services);
            println!("Licenses:        {} ({} active)", stats.total_licenses, stats.active_licenses);
            println!("License links:   {}", stats.license_links);
            println!("Package configs: {}", stats.package_configs);
            let mut tiers: Vec<_> = stats.configs_per_tier.iter().collect();
            tiers.sort();
            for (tier, count) in tiers {
                println!("  {:<16} {}", tier, count);
            }
            println!("Employees:       {} active", stats.active_employees);
            if let Some(exported_at) = stats.exported_at {
                println!("Exported at:     {}", exported_at);
            }
        }
    }

    Ok(())
}
