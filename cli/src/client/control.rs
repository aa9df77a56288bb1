//! Submit trigger state and loading indicator.

use std::io::{IsTerminal, Write};

/// Something that can show and hide a "working" hint.
pub trait Indicator {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Writes a one-line hint to stderr while a request is in flight. Silent when stderr is not a
/// terminal, so piped output stays clean.
#[derive(Debug)]
pub struct StderrIndicator {
    message: &'static str,
    enabled: bool,
}

impl StderrIndicator {
    pub fn new() -> Self {
        Self {
            message: "Explaining...",
            enabled: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for StderrIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for StderrIndicator {
    fn show(&mut self) {
        if self.enabled {
            let mut err = std::io::stderr();
            let _ = write!(err, "{}", self.message);
            let _ = err.flush();
        }
    }

    fn hide(&mut self) {
        if self.enabled {
            let mut err = std::io::stderr();
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        }
    }
}

/// The submit trigger: enabled when idle, disabled with the indicator shown while busy.
///
/// [`SubmitControl::begin`] hands out a [`Busy`] guard; the control is restored when the guard
/// drops, whichever way the submit ends.
#[derive(Debug)]
pub struct SubmitControl<I: Indicator> {
    enabled: bool,
    loading: bool,
    indicator: I,
}

impl<I: Indicator> SubmitControl<I> {
    pub fn new(indicator: I) -> Self {
        Self {
            enabled: true,
            loading: false,
            indicator,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Disables the trigger and shows the indicator. `None` when already busy.
    pub fn begin(&mut self) -> Option<Busy<'_, I>> {
        if !self.enabled {
            return None;
        }
        self.enabled = false;
        self.loading = true;
        self.indicator.show();
        Some(Busy { control: self })
    }
}

/// Held for the duration of one submit. Drop hides the indicator and re-enables the trigger.
#[derive(Debug)]
pub struct Busy<'a, I: Indicator> {
    control: &'a mut SubmitControl<I>,
}

impl<I: Indicator> Drop for Busy<'_, I> {
    fn drop(&mut self) {
        self.control.loading = false;
        self.control.indicator.hide();
        self.control.enabled = true;
    }
}
