//! Capture consumers.
//!
//! A [`Capturer`] receives the projected capture stream: one `capture` call
//! per byte range, bracketed by `open_group`/`close_group` for nesting. The
//! group callbacks default to no-ops so flat consumers only implement
//! `capture`.

use serde::Serialize;

/// Consumer interface for projected captures.
pub trait Capturer<'i> {
    /// A capture group opened.
    fn open_group(&mut self) {}

    /// A capture group closed.
    fn close_group(&mut self) {}

    /// A simple capture matched this byte range of the input.
    fn capture(&mut self, text: &'i str);
}

/// Collects captured ranges into a flat sequence, ignoring grouping.
///
/// The default projector behind [`Program::capture`](crate::Program::capture).
#[derive(Debug, Default)]
pub struct SequentialCapturer<'i> {
    result: Vec<&'i str>,
}

impl<'i> SequentialCapturer<'i> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_result(self) -> Vec<&'i str> {
        self.result
    }
}

impl<'i> Capturer<'i> for SequentialCapturer<'i> {
    fn capture(&mut self, text: &'i str) {
        self.result.push(text);
    }
}

/// Maps each captured range through a projection function.
#[derive(Debug)]
pub struct MapCapturer<T, F> {
    result: Vec<T>,
    func: F,
}

impl<T, F> MapCapturer<T, F> {
    pub fn new(func: F) -> Self {
        Self {
            result: Vec::new(),
            func,
        }
    }

    pub fn into_result(self) -> Vec<T> {
        self.result
    }
}

impl<'i, T, F: FnMut(&'i str) -> T> Capturer<'i> for MapCapturer<T, F> {
    fn capture(&mut self, text: &'i str) {
        self.result.push((self.func)(text));
    }
}

/// A capture materialized with its group structure intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CaptureValue<'i> {
    /// A simple capture: the matched text.
    Text(&'i str),
    /// A capture group: the values captured inside it.
    Group(Vec<CaptureValue<'i>>),
}

/// Builds the nested value tree for grouped captures.
///
/// Keeps a stack of partially-built levels: `open_group` pushes a level,
/// `close_group` pops it into its parent.
#[derive(Debug)]
pub struct TreeCapturer<'i> {
    stack: Vec<Vec<CaptureValue<'i>>>,
}

impl<'i> TreeCapturer<'i> {
    pub fn new() -> Self {
        Self {
            stack: vec![Vec::new()],
        }
    }

    /// The completed top-level values.
    pub fn into_result(mut self) -> Vec<CaptureValue<'i>> {
        debug_assert_eq!(self.stack.len(), 1, "unbalanced capture groups");
        self.stack.pop().unwrap_or_default()
    }

    fn top(&mut self) -> &mut Vec<CaptureValue<'i>> {
        self.stack.last_mut().expect("capturer stack is never empty")
    }
}

impl<'i> Default for TreeCapturer<'i> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'i> Capturer<'i> for TreeCapturer<'i> {
    fn open_group(&mut self) {
        self.stack.push(Vec::new());
    }

    fn close_group(&mut self) {
        if self.stack.len() > 1 {
            let group = self.stack.pop().expect("checked non-empty");
            self.top().push(CaptureValue::Group(group));
        }
    }

    fn capture(&mut self, text: &'i str) {
        self.top().push(CaptureValue::Text(text));
    }
}
