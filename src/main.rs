use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serviboard::config::Config;
use serviboard::core::money::format_amount;
use serviboard::modules::backend::{DateRange, UploadRequest};
use serviboard::modules::analytics::GeneralAnalytics;
use serviboard::modules::dashboard::{AnalyticsView, Dashboard, Dataset, PendingDataset, ViewState};
use serviboard::modules::periods::{DatedRecord, GLOBAL_SELECTION};

#[derive(Parser)]
#[command(name = "serviboard", about = "Upload a services spreadsheet and summarize it by period")]
struct Cli {
    /// Excel file (.xlsx / .xls) with the service records
    file: PathBuf,

    /// Period to summarize: "Total Global" or a month such as "Enero 2024"
    #[arg(short, long, default_value = GLOBAL_SELECTION)]
    period: String,

    /// First day of the pending-services window (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day of the pending-services window (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    let json = config.app.log_format.eq_ignore_ascii_case("json");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("serviboard={}", config.app.log_level).into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Analytics backend: {}", config.backend.base_url);

    let mut request = UploadRequest::from_path(&cli.file).await?;
    match (cli.from, cli.to) {
        (Some(start), Some(end)) => request = request.with_date_range(DateRange::new(start, end)?),
        (None, None) => {}
        _ => bail!("--from and --to must be given together"),
    }

    let mut dashboard = Dashboard::connect(&config)?;
    dashboard.upload_all(request).await;

    for result in [
        dashboard.general.set_selection(&cli.period),
        dashboard.collection.set_selection(&cli.period),
        dashboard.cash.set_selection(&cli.period),
    ] {
        if let Err(e) = result {
            tracing::warn!(period = %cli.period, error = %e, "Period not applied to view");
        }
    }

    report_general(&dashboard.general);
    report_pending(&dashboard.collection, |s| {
        tracing::info!(
            services = s.total_services,
            overdue = s.overdue_services,
            max_delay_days = s.max_delay_days,
            earliest = ?s.earliest_date,
            "Pending to collect"
        );
    });
    report_pending(&dashboard.cash, |s| {
        tracing::info!(
            services = s.total_services,
            value = %format_amount(s.total_value),
            old = s.old_services,
            earliest = ?s.earliest_date,
            advisory = %s.advisory(),
            "Pending cash to relate"
        );
    });

    Ok(())
}

fn report_general(view: &AnalyticsView<GeneralAnalytics>) {
    if !log_state(view.name(), view.get_state()) {
        return;
    }
    let Some(kpis) = view.selection().and_then(|selection| view.get_kpis(&selection)) else {
        return;
    };

    tracing::info!(
        period = %kpis.selection,
        cash = %format_amount(kpis.summary.cash_total),
        cash_share = %kpis.cash_share,
        transfer = %format_amount(kpis.summary.transfer_total),
        transfer_share = %kpis.transfer_share,
        total = %format_amount(kpis.summary.general_total),
        services = kpis.summary.general_count,
        "General analytics"
    );
    for point in view.get_series() {
        tracing::debug!(
            month = %point.month,
            cash = %format_amount(point.cash),
            transfer = %format_amount(point.transfer),
            "Monthly totals"
        );
    }
}

fn report_pending<D: PendingDataset>(view: &AnalyticsView<D>, summarize: impl Fn(&D::Summary)) {
    if !log_state(view.name(), view.get_state()) {
        return;
    }
    summarize(&view.current_summary());

    let records = view.current_records();
    let overdue = records.iter().filter(|r| r.assessment.is_overdue()).count();
    tracing::info!(view = view.name(), records = records.len(), overdue, "Pending records");
    if let Some(worst) = records.first() {
        tracing::info!(
            view = view.name(),
            date = %worst.record.date(),
            delay_days = worst.assessment.delay_days,
            tier = ?worst.assessment.tier,
            "Most delayed record"
        );
    }
}

/// Log non-loaded states; returns whether the view has data
fn log_state<D: Dataset>(name: &str, state: &ViewState<D>) -> bool {
    match state {
        ViewState::Loaded(_) => true,
        ViewState::Error(error) => {
            tracing::error!(view = name, kind = ?error.kind, "{}", error.message);
            false
        }
        other => {
            tracing::warn!(view = name, state = other.name(), "View has no data");
            false
        }
    }
}
