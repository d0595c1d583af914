mod support;

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use jobwatch::model::ExecutionStatus;
use support::{exec, job, job_with_err, poller_setup, FakeProvider};

#[tokio::test]
async fn tick_publishes_both_collections() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job("update_prices"), job("backup_grist")]);
    provider.set_executions(vec![exec(
        "backup_grist-1",
        "backup_grist",
        0,
        ExecutionStatus::Completed,
    )]);

    let (poller, state) = poller_setup(provider);
    poller.tick().await;

    let state = state.read().await;
    assert_eq!(state.jobs().len(), 2);
    assert_eq!(state.executions().len(), 1);
}

#[tokio::test]
async fn jobs_are_sorted_by_name() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![
        job("update_prices"),
        job("backup_grist"),
        job("update_kraken"),
    ]);

    let (poller, state) = poller_setup(provider);
    poller.tick().await;

    let state = state.read().await;
    let names: Vec<&str> = state.jobs().iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["backup_grist", "update_kraken", "update_prices"]);
}

#[tokio::test]
async fn failed_job_fetch_keeps_previous_snapshots() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job("update_prices")]);
    provider.set_executions(vec![exec(
        "e1",
        "update_prices",
        0,
        ExecutionStatus::Completed,
    )]);

    let (poller, state) = poller_setup(provider.clone());
    poller.tick().await;

    // Jobs start failing while executions keep flowing.
    provider.fail_jobs("connection refused");
    provider.set_executions(vec![
        exec("e1", "update_prices", 0, ExecutionStatus::Completed),
        exec("e2", "update_prices", 10, ExecutionStatus::Completed),
    ]);
    poller.tick().await;

    let state = state.read().await;
    assert_eq!(state.jobs().len(), 1, "stale job list must be retained");
    assert_eq!(state.executions().len(), 2, "executions must still update");
}

#[tokio::test]
async fn failed_execution_fetch_keeps_previous_history() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job("update_prices")]);
    provider.set_executions(vec![exec(
        "e1",
        "update_prices",
        0,
        ExecutionStatus::Completed,
    )]);

    let (poller, state) = poller_setup(provider.clone());
    poller.tick().await;

    provider.set_jobs(vec![job("update_prices"), job("update_stocks")]);
    provider.fail_executions("timeout");
    poller.tick().await;

    let state = state.read().await;
    assert_eq!(state.jobs().len(), 2, "job list must still update");
    assert_eq!(state.executions().len(), 1, "stale history must be retained");
}

#[tokio::test]
async fn collections_are_replaced_wholesale() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job("a"), job("b"), job("c")]);

    let (poller, state) = poller_setup(provider.clone());
    poller.tick().await;

    // A smaller response is not merged with the previous one.
    provider.set_jobs(vec![job("b")]);
    poller.tick().await;

    let state = state.read().await;
    assert_eq!(state.jobs().len(), 1);
    assert_eq!(state.jobs()[0].name, "b");
}

#[tokio::test]
async fn acknowledged_errors_are_revalidated_every_tick() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job_with_err("update_kraken", "nonce error")]);
    provider.set_executions(vec![exec(
        "update_kraken-1",
        "update_kraken",
        0,
        ExecutionStatus::Failed,
    )]);

    let (poller, state) = poller_setup(provider.clone());
    poller.tick().await;

    {
        let mut state = state.write().await;
        assert!(state.acknowledge_error("update_kraken"));
        assert!(state.is_error_acknowledged("update_kraken"));
    }

    // The error clears remotely; no user action involved.
    provider.set_jobs(vec![job("update_kraken")]);
    poller.tick().await;

    let state = state.read().await;
    assert!(!state.is_error_acknowledged("update_kraken"));
    assert!(!state.has_new_error("update_kraken"));
}

#[tokio::test]
async fn run_stops_deterministically_on_cancel() {
    let provider = Arc::new(FakeProvider::new());
    provider.set_jobs(vec![job("update_prices")]);

    let shared = Arc::new(tokio::sync::RwLock::new(support::state()));
    let poller = jobwatch::sync::Poller::new(
        provider,
        shared.clone(),
        Duration::from_millis(10),
    );

    let token = CancellationToken::new();
    let handle = tokio::spawn(poller.run(token.clone()));

    // Let a few ticks land, then cancel.
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("poller must stop after cancellation")
        .expect("poller task must not panic");

    assert_eq!(shared.read().await.jobs().len(), 1);
}
