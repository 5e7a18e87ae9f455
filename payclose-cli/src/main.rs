use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use payclose_core::{
    BillingProfile, BusinessCardMatcher, CyclePhase, PayCloseStrategy, Severity, aggregate_stats,
    build_strategy, list_events, project_event_reminders, time, utilization_summary,
};
use payclose_ingest::{ApiSource, parse_cards_csv_file, parse_cards_json};
use std::fs;
use std::path::PathBuf;

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "payclose", version, about = "Credit-card billing-cycle planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Card snapshot file (.json, or .csv for a card sheet)
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Fetch the snapshot from the backend API at this base URL
    #[arg(long)]
    url: Option<String>,

    /// IANA timezone for resolving "today" (default: from config)
    #[arg(long)]
    tz: Option<String>,

    /// Override today's date (YYYY-MM-DD) for what-if runs
    #[arg(long)]
    today: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upcoming closing/payment events across all cards, soonest first
    Events {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Full Pay Close strategy for one card
    Strategy {
        card_id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Aggregate event counts and configuration rate
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Per-card and portfolio credit utilization
    Utilization {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Reminder intents the notifier would fire for the current snapshot
    Reminders {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write the merged event calendar to a CSV file
    Export {
        /// Output path
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a default config file to ~/.payclose/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Events { source } => {
            let (cards, today) = snapshot(&source, &cfg).await?;
            let events = list_events(&cards, today);
            if source.json {
                println!("{}", serde_json::to_string_pretty(&events)?);
                return Ok(());
            }
            if events.is_empty() {
                println!("No upcoming events (no cards have cycle days configured).");
                return Ok(());
            }
            println!("Upcoming events for {today}:");
            for e in &events {
                let amount = e
                    .amount
                    .map(|a| format!("  min ${a:.2}"))
                    .unwrap_or_default();
                println!(
                    "  {}  {:<8} {:<24} in {:>3} days{amount}",
                    e.date,
                    e.kind.as_str(),
                    e.card_name,
                    e.days_until,
                );
            }
        }

        Command::Strategy { card_id, source } => {
            let (cards, today) = snapshot(&source, &cfg).await?;
            let Some(card) = cards.iter().find(|c| c.id == card_id) else {
                bail!("card '{card_id}' not in snapshot");
            };
            let matcher = BusinessCardMatcher::new(cfg.business_keywords.clone());
            match build_strategy(card, today, &matcher) {
                None => {
                    // Expected state, not a failure.
                    println!("Card '{}' has no closing/due configuration.", card.name);
                }
                Some(strategy) => {
                    if source.json {
                        println!("{}", serde_json::to_string_pretty(&strategy)?);
                    } else {
                        print_strategy(card, &strategy, today);
                    }
                }
            }
        }

        Command::Stats { source } => {
            let (cards, today) = snapshot(&source, &cfg).await?;
            let events = list_events(&cards, today);
            let stats = aggregate_stats(&cards, &events);
            if source.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Events: {} total", stats.total_events);
            println!("  urgent (<= 2 days):   {}", stats.urgent_events);
            println!("  upcoming (<= 7 days): {}", stats.upcoming_events);
            println!(
                "Cards: {}/{} configured ({:.0}%)",
                stats.configured_cards, stats.total_cards, stats.configuration_rate
            );
        }

        Command::Utilization { source } => {
            let (cards, _today) = snapshot(&source, &cfg).await?;
            let summary = utilization_summary(&cards);
            if source.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }
            for card in &summary.cards {
                println!(
                    "  {:<24} ${:>9.2} / ${:>9.2}  ({:.1}%)",
                    card.name, card.balance, card.limit, card.utilization
                );
            }
            println!(
                "Portfolio: ${:.2} / ${:.2} ({:.1}%)",
                summary.total_balance, summary.total_limit, summary.utilization_percentage
            );
        }

        Command::Reminders { source } => {
            let (cards, today) = snapshot(&source, &cfg).await?;
            let events = list_events(&cards, today);
            let intents = project_event_reminders(&events, today);
            if source.json {
                println!("{}", serde_json::to_string_pretty(&intents)?);
                return Ok(());
            }
            if intents.is_empty() {
                println!("No reminders to schedule.");
                return Ok(());
            }
            for intent in &intents {
                println!("  {}  {}", intent.fire_on, intent.title);
                println!("      {}", intent.body);
            }
        }

        Command::Export { out, source } => {
            let (cards, today) = snapshot(&source, &cfg).await?;
            let events = list_events(&cards, today);
            let mut wtr =
                csv::Writer::from_path(&out).with_context(|| format!("open {}", out.display()))?;
            for event in &events {
                wtr.serialize(event)?;
            }
            wtr.flush()?;
            println!("Wrote {} events to {}", events.len(), out.display());
        }

        Command::Init => {
            let path = config::config_path()?;
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            config::save_config(&Config::default())?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Load the card snapshot and resolve "today" once, at the boundary.
async fn snapshot(source: &SourceArgs, cfg: &Config) -> Result<(Vec<BillingProfile>, NaiveDate)> {
    let today = match &source.today {
        Some(s) => time::parse_date(s)?,
        None => {
            let tz = source.tz.as_deref().unwrap_or(&cfg.timezone);
            time::local_date(Utc::now(), tz)?
        }
    };

    let cards = load_cards(source, cfg).await?;
    tracing::debug!(cards = cards.len(), %today, "snapshot ready");
    Ok((cards, today))
}

async fn load_cards(source: &SourceArgs, cfg: &Config) -> Result<Vec<BillingProfile>> {
    // Explicit --url wins, then a snapshot file, then the configured API.
    if let Some(url) = &source.url {
        return fetch_from_api(url, cfg).await;
    }

    if let Some(path) = &source.cards {
        return match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => parse_cards_csv_file(path),
            _ => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_cards_json(&text)
            }
        };
    }

    if let Some(url) = &cfg.api.base_url {
        return fetch_from_api(url, cfg).await;
    }

    bail!("no card source: pass --cards <file>, --url <base>, or set api.base_url in config");
}

async fn fetch_from_api(url: &str, cfg: &Config) -> Result<Vec<BillingProfile>> {
    let mut api = ApiSource::new(url);
    if let Some(token) = &cfg.api.token {
        api = api.with_token(token.clone());
    }
    api.fetch_cards().await
}

fn print_strategy(card: &BillingProfile, s: &PayCloseStrategy, today: NaiveDate) {
    println!("{} ({}) on {today}", card.name, card.bank);
    println!(
        "  next closing: {} ({} days)   next due: {} ({} days)",
        s.next_closing_date, s.days_until_closing, s.next_due_date, s.days_until_due
    );
    let phase = match s.current_phase {
        CyclePhase::Grace => "grace",
        CyclePhase::Billing => "billing",
    };
    println!(
        "  phase: {phase}   amount due now: ${:.2}",
        s.next_payment_amount
    );
    println!(
        "  pay by {} to report low utilization; safe to spend again from {}",
        s.payment_deadline_for_zero_util, s.safe_usage_start_date
    );
    if s.optimize_credit.should_pay_now {
        println!("  >> pay now: the statement cuts in {} days", s.days_until_closing);
    }
    if let Some(biz) = &s.business_strategy {
        println!(
            "  business card: up to {} days financing, interest-free until {}",
            biz.max_financing_days, biz.no_interest_until
        );
    }
    for rec in &s.recommendations {
        let tag = match rec.severity {
            Severity::Urgent => "URGENT",
            Severity::Optimal => "optimal",
            Severity::Info => "info",
        };
        println!("  [{tag}] {}: {}", rec.message, rec.action);
    }
}
