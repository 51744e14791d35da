use std::process;
use std::sync::Arc;
use chrono::Utc;
use clap::Parser;

use crm::{
    analytics::{self, query},
    configuration as cfg,
    logger,
    APIClient,
    ContactStore,
    DashboardSummary,
};

const PER_PAGE: usize = 10;

#[derive(Parser, Debug)]
#[command(about = "CRM Dashboard", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Backend base address, overrides the configuration file
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Only list contacts whose name, email or company contain this text
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Zero-based page of the contact listing
    #[arg(short, long, default_value_t = 0)]
    page: usize,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(url) = opts.url.as_deref() {
        builder.with_base_url(url);
    }
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            process::exit(1);
        }
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("{e}");
    }

    let client = match APIClient::from_config(cfg.as_ref()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let store = ContactStore::new(Arc::new(client));
    let contacts = match store.fetch_all().await {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Failed to load contacts from {}: {e}", cfg.base_url());
            process::exit(1);
        }
    };

    let now = Utc::now();
    println!("CRM Dashboard");
    println!("  {}", DashboardSummary::from_contacts(&contacts, &now));

    println!("Top companies:");
    for (name, count) in analytics::top_companies(&contacts) {
        println!("  {:<24} {}", name, count);
    }

    let recent = analytics::recent_preview(&contacts, &now);
    println!("Recently added ({}):", recent.len());
    for contact in recent {
        println!("  {}", contact);
    }

    let matched = query::filter(&contacts, opts.search.as_deref().unwrap_or(""));
    let pages = query::page_count(matched.len(), PER_PAGE);
    println!("Contacts (page {} of {}, {} matched):", opts.page + 1, pages.max(1), matched.len());
    for contact in query::page(&matched, opts.page, PER_PAGE) {
        println!("  {}", contact);
    }

    logger::teardown();
}
