// View state machine: NoFile -> Loading -> Loaded / Error, selection, and projections

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::*;
use rust_decimal_macros::dec;
use serviboard::config::ThresholdConfig;
use serviboard::core::{AppError, ErrorKind};
use serviboard::modules::analytics::GeneralAnalytics;
use serviboard::modules::backend::Endpoint;
use serviboard::modules::dashboard::{AnalyticsView, ViewState};
use serviboard::modules::pending::{CashAdvisory, DelayTier, PendingCashReport};
use serviboard::modules::periods::Selection;

fn general_view(backend: Arc<QueuedBackend>) -> AnalyticsView<GeneralAnalytics> {
    AnalyticsView::new(backend, ThresholdConfig::default(), Duration::from_secs(5))
        .with_reference_date(reference_date())
}

fn cash_view(backend: Arc<QueuedBackend>) -> AnalyticsView<PendingCashReport> {
    AnalyticsView::new(backend, ThresholdConfig::default(), Duration::from_secs(5))
        .with_reference_date(reference_date())
}

#[tokio::test]
async fn test_initial_state_is_no_file() {
    let mut view = general_view(Arc::new(QueuedBackend::default()));

    assert!(matches!(view.get_state(), ViewState::NoFile));
    assert!(view.get_sorted_months().is_empty());
    assert_eq!(view.current_summary().cash_total, dec!(0));
    assert!(matches!(view.set_selection("Total Global"), Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_begin_upload_enters_loading() {
    let mut view = general_view(Arc::new(QueuedBackend::default()));
    let ticket = view.begin_upload();

    assert!(view.get_state().is_loading());
    assert_eq!(ticket.generation, view.generation());
}

#[tokio::test]
async fn test_end_to_end_single_month() {
    let backend = Arc::new(QueuedBackend::new([Ok(general_payload("Enero 2024", 1000))]));
    let mut view = general_view(backend.clone());

    assert!(view.upload(upload("servicios.xlsx")).await);
    assert_eq!(backend.calls(), vec![Endpoint::General]);

    let global = view.get_period_summary(&Selection::Global);
    view.set_selection("Enero 2024").unwrap();
    let january = view.current_summary();

    assert_eq!(global.cash_total, dec!(1000));
    assert_eq!(global, january, "single month and global must match");
}

#[tokio::test]
async fn test_loaded_view_projects_months_and_kpis() {
    let backend = Arc::new(QueuedBackend::new([Ok(two_month_payload())]));
    let mut view = general_view(backend);
    view.upload(upload("servicios.xlsx")).await;

    let months: Vec<String> = view.get_sorted_months().iter().map(|m| m.to_string()).collect();
    assert_eq!(months, vec!["Enero 2024", "Febrero 2024"]);
    assert_eq!(view.selection(), Some(Selection::Global));

    let kpis = view.get_kpis(&Selection::Global).unwrap();
    assert_eq!(kpis.summary.cash_total, dec!(1200), "NaT bucket must not contribute");
    assert_eq!(kpis.summary.transfer_total, dec!(1300));
    assert_eq!(kpis.summary.general_count, 6);

    view.set_selection("Febrero 2024").unwrap();
    assert_eq!(view.current_summary().transfer_total, dec!(800));
}

#[tokio::test]
async fn test_selection_changes_do_not_refetch() {
    let backend = Arc::new(QueuedBackend::new([Ok(two_month_payload())]));
    let mut view = general_view(backend.clone());
    view.upload(upload("servicios.xlsx")).await;

    view.set_selection("Enero 2024").unwrap();
    view.set_selection("Febrero 2024").unwrap();
    view.set_selection("Total Global").unwrap();

    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn test_new_upload_clears_previous_data_before_resolving() {
    let backend = Arc::new(QueuedBackend::new([
        Ok(two_month_payload()),
        Ok(general_payload("Marzo 2024", 50)),
    ]));
    let mut view = general_view(backend);
    view.upload(upload("first.xlsx")).await;
    view.set_selection("Febrero 2024").unwrap();

    let ticket = view.begin_upload();
    assert!(view.get_sorted_months().is_empty(), "no stale months while loading");
    assert_eq!(view.selection(), None);

    let result = view.fetch(upload("second.xlsx")).await;
    assert!(view.complete(ticket, result));

    let months: Vec<String> = view.get_sorted_months().iter().map(|m| m.to_string()).collect();
    assert_eq!(months, vec!["Marzo 2024"]);
    assert_eq!(view.selection(), Some(Selection::Global));
}

#[tokio::test]
async fn test_failure_then_retry() {
    let backend = Arc::new(QueuedBackend::new([
        Err(AppError::backend("No se encontró la hoja de servicios")),
        Err(AppError::network("HTTP 503 Service Unavailable")),
        Ok(general_payload("Enero 2024", 10)),
    ]));
    let mut view = general_view(backend);

    view.upload(upload("bad.xlsx")).await;
    let error = view.get_state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::BackendValidation);
    assert_eq!(error.message, "No se encontró la hoja de servicios");
    assert!(view.get_sorted_months().is_empty());

    view.upload(upload("bad.xlsx")).await;
    let error = view.get_state().error().cloned().unwrap();
    assert_eq!(error.kind, ErrorKind::Network);

    view.upload(upload("good.xlsx")).await;
    assert!(view.get_state().loaded().is_some());
    assert!(view.get_state().error().is_none());
}

#[tokio::test]
async fn test_malformed_payload_is_backend_error() {
    let backend = Arc::new(QueuedBackend::new([Ok(serde_json::json!({"resumen": [1, 2, 3]}))]));
    let mut view = general_view(backend);
    view.upload(upload("servicios.xlsx")).await;

    let error = view.get_state().error().unwrap();
    assert_eq!(error.kind, ErrorKind::BackendValidation);
}

#[tokio::test]
async fn test_cash_view_records_and_advisory() {
    let backend = Arc::new(QueuedBackend::new([Ok(cash_payload())]));
    let mut view = cash_view(backend);
    view.upload(upload("servicios.xlsx")).await;

    let global = view.current_summary();
    assert_eq!(global.total_services, 3);
    assert_eq!(global.total_value, dec!(200000));
    assert_eq!(global.max_days_unrelated, 45);
    assert_eq!(global.advisory(), CashAdvisory::Stale(1));

    let records = view.current_records();
    assert_eq!(records.len(), 4);
    let tiers: Vec<DelayTier> = records.iter().map(|r| r.assessment.tier).collect();
    assert_eq!(tiers[..3], [DelayTier::Overdue, DelayTier::Attention, DelayTier::Normal]);
    assert_eq!(records[1].record.service_label(), "Copia de llave");
    assert_eq!(records[2].record.status_label(), "Sin Relacionar");
    assert_eq!(records[2].record.service_label(), "No especificado");

    view.set_selection("Febrero 2024").unwrap();
    let february = view.current_records();
    assert_eq!(february.len(), 2, "undated record is excluded from month views");
    assert_eq!(view.current_summary().advisory(), CashAdvisory::RecentPending(2));
}
