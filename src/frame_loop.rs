//! Bookkeeping for a self-rescheduling animation-frame loop.
//!
//! The host delivers animation frames on request but offers no way to take a
//! request back. `FrameLoop` records which request is still wanted, so a frame
//! that arrives after [`FrameLoop::cancel`] can be told apart and dropped.

/// Id of one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct FrameLoop {
    next_id: u64,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new frame request, replacing any request still pending.
    pub fn schedule(&mut self) -> FrameHandle {
        if let Some(stale) = self.pending.take() {
            log::trace!("Replacing pending frame {}", stale.id());
        }
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(handle);
        handle
    }

    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Consumes the pending request. Returns `false` when nothing was
    /// pending, i.e. the delivered frame belongs to a cancelled loop.
    pub fn fire(&mut self) -> bool {
        match self.pending.take() {
            Some(_) => {
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of frames fired since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
