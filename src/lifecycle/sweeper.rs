//! Periodic purge of expired pastes.
//!
//! Reads already purge expired records lazily; the sweeper bounds how long a
//! never-read expired paste lingers in the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::lifecycle::PasteService;

pub struct ExpirySweeper {
    service: Arc<PasteService>,
    period: Duration,
}

impl ExpirySweeper {
    pub fn new(service: Arc<PasteService>, period: Duration) -> Self {
        Self { service, period }
    }

    /// Spawn the sweep loop. Runs until the returned handle is aborted or
    /// the runtime shuts down; sweep failures are logged and retried on the
    /// next tick.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(err) = self.service.purge_expired().await {
                    tracing::warn!(error = %err, "expiry sweep failed");
                }
            }
        })
    }
}
