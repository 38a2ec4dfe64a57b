//! The matching engine: stack VM, capture log, capture projection.

mod capture;
mod capturer;
mod frame;
mod machine;

pub use capturer::{CaptureValue, Capturer, MapCapturer, SequentialCapturer, TreeCapturer};

#[cfg(test)]
mod capture_tests;

use crate::bytecode::Program;

use capture::apply_captures;
use machine::Machine;

impl Program {
    /// Match `input` against the program.
    ///
    /// Failure to match is a normal outcome, not an error.
    pub fn matches(&self, input: &str) -> bool {
        Machine::new(self, input).run().0
    }

    /// Match and drive `capturer` with the projected captures.
    ///
    /// Returns whether the match succeeded; on failure the capturer is
    /// untouched.
    pub fn capture_with<'i, C: Capturer<'i>>(&self, input: &'i str, capturer: &mut C) -> bool {
        let (matched, log) = Machine::new(self, input).run();
        if matched {
            apply_captures(input, &log, capturer);
        }
        matched
    }

    /// Match and return the captured ranges in match order, or `None` if
    /// the match failed.
    pub fn capture<'i>(&self, input: &'i str) -> Option<Vec<&'i str>> {
        let mut capturer = SequentialCapturer::new();
        self.capture_with(input, &mut capturer)
            .then(|| capturer.into_result())
    }

    /// Like [`capture`](Self::capture), but projects each captured range
    /// through `func`.
    pub fn capture_map<'i, T>(
        &self,
        input: &'i str,
        func: impl FnMut(&'i str) -> T,
    ) -> Option<Vec<T>> {
        let mut capturer = MapCapturer::new(func);
        self.capture_with(input, &mut capturer)
            .then(|| capturer.into_result())
    }

    /// Like [`capture`](Self::capture), but keeps group nesting.
    pub fn capture_tree<'i>(&self, input: &'i str) -> Option<Vec<CaptureValue<'i>>> {
        let mut capturer = TreeCapturer::new();
        self.capture_with(input, &mut capturer)
            .then(|| capturer.into_result())
    }
}
