use anyhow::Result;
use salescrunch::{aggregate, ingest, output, process};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// Fixed locations; the pipeline takes no arguments.
const INPUT_CSV: &str = "train.csv";
const BAR_CHART_CSV: &str = "bar_chart_data.csv";
const LINE_CHART_CSV: &str = "line_chart_data.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) load the order table ─────────────────────────────────────
    let table = ingest::load_csv(Path::new(INPUT_CSV))?;
    info!("loaded {} rows from {}", table.rows.len(), INPUT_CSV);

    // ─── 3) coerce dates, list then drop the failures ────────────────
    let outcome = process::coerce_dates(&table);
    process::log_rejected(&outcome.invalid);
    info!(
        "{} rows kept, {} dropped for unparseable dates",
        outcome.valid.len(),
        outcome.invalid.len()
    );

    // ─── 4) aggregate ────────────────────────────────────────────────
    let by_category = aggregate::by_category(&outcome.valid);
    let by_category_month = aggregate::by_category_month(&outcome.valid);

    // ─── 5) persist both summaries ───────────────────────────────────
    output::write_category_summary(Path::new(BAR_CHART_CSV), &by_category)?;
    info!("wrote {} categories to {}", by_category.len(), BAR_CHART_CSV);

    output::write_category_month_summary(Path::new(LINE_CHART_CSV), &by_category_month)?;
    info!(
        "wrote {} category-month rows to {}",
        by_category_month.len(),
        LINE_CHART_CSV
    );

    info!("all done");
    Ok(())
}
