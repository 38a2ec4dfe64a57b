//! The capture log and its projection.
//!
//! During matching the VM appends open/close events to a log; the log may be
//! truncated on backtrack but is never edited in place. After a successful
//! match [`apply_captures`] replays it once, driving a
//! [`Capturer`](super::Capturer).

use super::capturer::Capturer;

/// Kind tag of a capture event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum EventKind {
    /// Opens a nesting level.
    Group,
    /// Marks the pending start of a byte-range capture.
    Simple,
    /// Closes the pending simple capture, or failing that, the most recent
    /// open group.
    Close,
}

/// One event in the capture log. Offsets are absolute byte positions into
/// the original input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CaptureEvent {
    pub kind: EventKind,
    pub offset: usize,
}

/// Replay the capture log against `capturer`.
///
/// A `Close` pairs with the pending `Simple` if one exists, yielding the
/// byte range between them; otherwise it closes the most recent group.
/// Nested simple captures are not constructible through the combinator DSL,
/// so a single pending slot suffices.
pub(crate) fn apply_captures<'i, C: Capturer<'i>>(
    input: &'i str,
    log: &[CaptureEvent],
    capturer: &mut C,
) {
    let mut pending: Option<usize> = None;
    for event in log {
        match event.kind {
            EventKind::Group => capturer.open_group(),
            EventKind::Simple => pending = Some(event.offset),
            EventKind::Close => match pending.take() {
                Some(start) => capturer.capture(&input[start..event.offset]),
                None => capturer.close_group(),
            },
        }
    }
}
