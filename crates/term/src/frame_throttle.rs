//! Skip redraws when nothing on screen changed.

/// Redraw gate keyed on a snapshot fingerprint.
///
/// A frame is drawn when the fingerprint or viewport differs from the last
/// drawn frame, or when `heartbeat_ms` has passed since the last draw.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    heartbeat_ms: u64,
    last: Option<Drawn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drawn {
    at_ms: u64,
    fingerprint: u64,
    viewport: (u16, u16),
}

impl FrameThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last: None,
        }
    }

    pub fn should_draw(&mut self, now_ms: u64, fingerprint: u64, viewport: (u16, u16)) -> bool {
        let draw = match self.last {
            None => true,
            Some(last) => {
                last.fingerprint != fingerprint
                    || last.viewport != viewport
                    || now_ms.saturating_sub(last.at_ms) >= self.heartbeat_ms
            }
        };
        if draw {
            self.last = Some(Drawn {
                at_ms: now_ms,
                fingerprint,
                viewport,
            });
        }
        draw
    }

    /// Force the next call to draw.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
