use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::hub::Hub;

/// Probes every connection on a fixed period and reaps the ones that never
/// answered the previous probe.
///
/// Runs until the owning task is aborted; the server does that during
/// shutdown so no tick lands on a torn-down registry.
pub async fn run(hub: Arc<Mutex<Hub>>, period: Duration) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let reaped = {
            let mut hub = hub.lock().unwrap();
            hub.sweep()
        };
        if !reaped.is_empty() {
            info!("heartbeat reaped {} stale connection(s)", reaped.len());
        }
    }
}
