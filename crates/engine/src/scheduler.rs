/// Identifies one frame request; a cancelled request's id never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Cancellable one-shot frame request, re-armed by the runner each frame.
///
/// Times are milliseconds on the runner's monotonic clock.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval_ms: u64,
    next_id: u64,
    pending: Option<(FrameId, u64)>,
}

impl FrameScheduler {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_id: 0,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a frame one interval from `now_ms`.
    ///
    /// An outstanding request is kept as is; there is never more than one.
    pub fn request(&mut self, now_ms: u64) -> FrameId {
        if let Some((id, _)) = self.pending {
            return id;
        }
        let id = FrameId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some((id, now_ms.saturating_add(self.interval_ms)));
        id
    }

    /// Drop the outstanding request. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Keep a request outstanding exactly while `wanted` holds.
    pub fn sync(&mut self, wanted: bool, now_ms: u64) {
        if wanted {
            self.request(now_ms);
        } else if self.cancel() {
            tracing::trace!("frame request cancelled");
        }
    }

    /// Milliseconds until the pending frame is due; `None` when idle.
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.pending.map(|(_, due)| due.saturating_sub(now_ms))
    }

    /// Consume the pending request if it is due.
    pub fn take_due(&mut self, now_ms: u64) -> Option<FrameId> {
        match self.pending {
            Some((id, due)) if due <= now_ms => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(u64::from(crate::types::FRAME_MS))
    }
}
