// src/progress.rs

//! Progress reporting while source files are written into the document.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress updates from [`generate`](crate::generate).
///
/// The length is set once discovery is complete; the position advances after
/// each file is appended, and the message names the file being processed.
///
/// # Examples
///
/// ```
/// use ccdoc::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Recorder {
///     positions: Mutex<Vec<u64>>,
/// }
/// impl ProgressReporter for Recorder {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         self.positions.lock().unwrap().push(pos);
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let recorder = Recorder::default();
/// recorder.set_position(1);
/// recorder.set_position(2);
/// assert_eq!(*recorder.positions.lock().unwrap(), vec![1, 2]);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of files.
    fn set_length(&self, len: u64);
    /// Sets the number of files written so far.
    fn set_position(&self, pos: u64);
    /// Names the current file.
    fn set_message(&self, msg: String);
    /// Hides the bar.
    fn finish(&self);
    /// Hides the bar after showing a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing, for non-interactive runs.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

#[cfg(feature = "progress")]
const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {wide_msg}";

/// An `indicatif` progress bar drawn on stderr.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a hidden-until-used bar with the file-count style.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|e| {
                log::debug!("Falling back to the default progress style: {}", e);
                ProgressStyle::default_bar()
            })
            .progress_chars("#>-");
        bar.set_style(style);
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
