//! Tradepost Engine - item equivalence diagnostic.
//!
//! Usage: `tradepost-engine <reference.json> <candidate.json> [quantity]`
//!
//! Reports whether the candidate stack is equivalent to the reference under
//! the configured matcher, then validates a trade of `quantity` items against
//! a shop listing the reference item.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradepost_domain::{MatcherSettings, PlayerId, ShopKind, ShopListing};
use tradepost_engine::{
    infrastructure::{item_files::load_item, memory_shops::InMemoryShopRepo},
    matching::StructuralItemMatcher,
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradepost_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(reference_path), Some(candidate_path)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: tradepost-engine <reference.json> <candidate.json> [quantity]");
    };
    let quantity: u32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid quantity '{}'", raw))?,
        None => 1,
    };

    let settings = MatcherSettings::from_env();
    tracing::info!(
        work_type = %settings.work_type,
        filter = ?settings.filter,
        "Loaded matcher settings"
    );

    let reference = load_item(&reference_path).await?;
    let candidate = load_item(&candidate_path).await?;

    let listing = ShopListing::new(PlayerId::new(), reference.clone(), 1, ShopKind::Buying);
    let shop_id = listing.id;
    let app = App::new(
        &settings,
        Arc::new(InMemoryShopRepo::with_listings([listing])),
    );

    let equivalent = app.matcher.matches(&reference, &candidate);
    println!(
        "{} -> {}: {}",
        reference.material,
        candidate.material,
        if equivalent { "match" } else { "no match" }
    );

    if !equivalent && !settings.uses_platform_equality() {
        if let Some(mismatch) = StructuralItemMatcher::new(settings.filter.clone()).explain(
            &reference,
            &candidate,
            &settings.filter,
        ) {
            println!("first difference: {}", mismatch);
        }
    }

    match app
        .use_cases
        .validate_trade
        .execute(shop_id, std::slice::from_ref(&candidate), quantity)
        .await
    {
        Ok(check) => println!(
            "trade of {} covered by {} matching item(s)",
            check.requested, check.matched
        ),
        Err(e) => println!("trade rejected: {}", e),
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
