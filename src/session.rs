use crate::foundation::error::QrMarkResult;
use crate::model::overlay::OverlaySpec;
use crate::model::request::EncodingRequest;
use crate::render::compositor::{Compositor, RenderOutcome};
use crate::render::surface::CompositedImage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Sequence number identifying one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(pub u64);

#[derive(Debug, Default)]
struct Published {
    ticket: Option<RenderTicket>,
    image: Option<CompositedImage>,
}

/// Shared output buffer that only accepts the newest render.
///
/// Tickets are issued in increasing order. A result is published only when its ticket is the
/// latest one issued; anything older is dropped, so a slow stale render can never replace the
/// output of a newer request.
#[derive(Debug, Default)]
pub struct OutputSlot {
    issued: AtomicU64,
    published: Mutex<Published>,
}

impl OutputSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket.
    pub fn next_ticket(&self) -> RenderTicket {
        RenderTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Newest ticket issued so far.
    pub fn latest_ticket(&self) -> Option<RenderTicket> {
        match self.issued.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RenderTicket(n)),
        }
    }

    /// Store `image` if `ticket` is still the newest. Returns whether it was stored.
    pub fn publish(&self, ticket: RenderTicket, image: CompositedImage) -> bool {
        let mut guard = self.lock();
        // Checked under the lock so a concurrent publish of a newer ticket cannot interleave.
        let is_latest = self.latest_ticket() == Some(ticket);
        let is_newer = guard.ticket.is_none_or(|t| ticket > t);
        if !(is_latest && is_newer) {
            tracing::debug!(ticket = ticket.0, "dropping stale render");
            return false;
        }
        guard.ticket = Some(ticket);
        guard.image = Some(image);
        true
    }

    /// Ticket of the currently published image.
    pub fn published_ticket(&self) -> Option<RenderTicket> {
        self.lock().ticket
    }

    /// Clone of the currently published image.
    pub fn current(&self) -> Option<CompositedImage> {
        self.lock().image.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Published> {
        // A panic while holding the lock cannot leave `Published` half-written.
        self.published
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Result of one session render.
#[derive(Debug)]
pub struct SessionRender {
    /// Ticket the render ran under.
    pub ticket: RenderTicket,
    /// Render outcome (image and recovered overlay failure).
    pub outcome: RenderOutcome,
    /// Whether the image became the session's current output.
    pub published: bool,
}

/// Compositor plus a shared output slot.
///
/// Cloning shares the slot, so clones may render from different threads; the output always
/// reflects the most recently started request that has finished.
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    compositor: Compositor,
    slot: Arc<OutputSlot>,
}

impl RenderSession {
    /// Session around `compositor`.
    pub fn new(compositor: Compositor) -> Self {
        Self {
            compositor,
            slot: Arc::new(OutputSlot::new()),
        }
    }

    /// The shared output slot.
    pub fn slot(&self) -> &Arc<OutputSlot> {
        &self.slot
    }

    /// Start a request. Every input change should begin a new one.
    pub fn begin(&self) -> RenderTicket {
        self.slot.next_ticket()
    }

    /// Render under `ticket` and publish the result if it is still current.
    pub fn render_with_ticket(
        &self,
        ticket: RenderTicket,
        request: &EncodingRequest,
        overlay: Option<&OverlaySpec>,
    ) -> QrMarkResult<SessionRender> {
        let outcome = self.compositor.render_detailed(request, overlay)?;
        let published = self.slot.publish(ticket, outcome.image.clone());
        Ok(SessionRender {
            ticket,
            outcome,
            published,
        })
    }

    /// Begin a request and render it.
    pub fn render(
        &self,
        request: &EncodingRequest,
        overlay: Option<&OverlaySpec>,
    ) -> QrMarkResult<SessionRender> {
        let ticket = self.begin();
        self.render_with_ticket(ticket, request, overlay)
    }

    /// Currently published image.
    pub fn current(&self) -> Option<CompositedImage> {
        self.slot.current()
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
