use async_trait::async_trait;
use restrip_core::{RestripError, Result, ScheduledSnap};
use std::sync::Mutex;
use tracing::info;

/// Accepts a validated snap for future delivery.
///
/// The real backend persists the snap and fires the email/Telegram message
/// at `send_time`; this crate only defines the hand-off.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    async fn schedule(&self, snap: &ScheduledSnap) -> Result<()>;
}

/// Logs each accepted snap and keeps it in memory so tests can observe the
/// hand-off. Nothing is ever sent.
#[derive(Default)]
pub struct LoggingSink {
    accepted: Mutex<Vec<ScheduledSnap>>,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snaps accepted so far, in arrival order. A poisoned lock reads as
    /// empty; `schedule` surfaces poisoning as an error.
    pub fn accepted(&self) -> Vec<ScheduledSnap> {
        self.accepted
            .lock()
            .map(|accepted| accepted.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DeliverySink for LoggingSink {
    async fn schedule(&self, snap: &ScheduledSnap) -> Result<()> {
        info!(
            snap_id = %snap.id,
            send_time = %snap.send_time,
            method = %snap.delivery_method,
            "snap queued for future delivery"
        );
        self.accepted
            .lock()
            .map_err(|_| RestripError::Internal("delivery sink lock poisoned".to_string()))?
            .push(snap.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use restrip_core::{DeliveryMethod, ImageRef, SnapId};

    fn snap() -> ScheduledSnap {
        ScheduledSnap {
            id: SnapId::new(),
            caption: "remember this".to_string(),
            send_time: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2025, 9, 1, 18, 0, 0)
                .unwrap(),
            delivery_method: DeliveryMethod::Email,
            delivery_address: "me@example.com".to_string(),
            image_ref: ImageRef::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn accepted_snaps_are_observable_in_order() {
        let sink = LoggingSink::new();
        let first = snap();
        let second = snap();
        sink.schedule(&first).await.unwrap();
        sink.schedule(&second).await.unwrap();

        let accepted = sink.accepted();
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].id, first.id);
        assert_eq!(accepted[1].id, second.id);
    }
}
