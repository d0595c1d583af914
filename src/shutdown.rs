use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;

/// Token cancelled once on SIGTERM or SIGINT.
///
/// The watch command hands clones of it to the poller and the render loop;
/// both drain on the same cancellation. One-shot commands never install it.
pub fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let signal_task = token.clone();

    tokio::spawn(async move {
        let received = wait_for_signal().await;
        tracing::info!(signal = received, "Shutting down");
        signal_task.cancel();
    });

    token
}

async fn wait_for_signal() -> &'static str {
    let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    }
}
