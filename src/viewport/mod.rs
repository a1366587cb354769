pub mod waveform;

use crate::config::EditorConfig;

/// Visible time window over the audio, in seconds.
///
/// The controller never draws. Renderers read [`ViewportController::view`]
/// and [`ViewportController::visible_selection`] and map times linearly onto
/// pixels with [`ViewportController::x_for_time`].
///
/// While `duration > 0` the window satisfies
/// `0 <= view_start < view_end <= duration` and spans at least
/// `duration / min_span_divisor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    duration: f64,
    view_start: f64,
    view_end: f64,
    /// Set once the operator (or auto-zoom) picks a window; cleared by fit-all.
    has_view: bool,
    selection: Option<(f64, f64)>,
    zoom_factor: f64,
    min_span_divisor: f64,
    segment_fill_ratio: f64,
    min_segment_sec: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl ViewportController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            duration: 0.0,
            view_start: 0.0,
            view_end: 1.0,
            has_view: false,
            selection: None,
            zoom_factor: config.zoom_factor,
            min_span_divisor: config.min_span_divisor,
            segment_fill_ratio: config.segment_fill_ratio,
            min_segment_sec: config.min_segment_sec,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn view(&self) -> (f64, f64) {
        (self.view_start, self.view_end)
    }

    pub fn view_len(&self) -> f64 {
        self.view_end - self.view_start
    }

    pub fn has_explicit_view(&self) -> bool {
        self.has_view
    }

    pub fn min_span(&self) -> f64 {
        self.duration / self.min_span_divisor
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        if !self.has_view {
            self.view_start = 0.0;
            self.view_end = if self.duration > 0.0 { self.duration } else { 1.0 };
        } else {
            self.clamp();
        }
    }

    pub fn zoom_in(&mut self) {
        if self.duration <= 0.0 {
            return;
        }
        let center = (self.view_start + self.view_end) / 2.0;
        let len = (self.view_len() / self.zoom_factor).max(self.min_span());
        self.view_start = center - len / 2.0;
        self.view_end = center + len / 2.0;
        self.clamp();
        self.has_view = true;
    }

    pub fn zoom_out(&mut self) {
        if self.duration <= 0.0 {
            return;
        }
        let center = (self.view_start + self.view_end) / 2.0;
        let len = (self.view_len() * self.zoom_factor).min(self.duration);
        self.view_start = center - len / 2.0;
        self.view_end = center + len / 2.0;
        self.clamp();
        self.has_view = true;
    }

    pub fn fit_all(&mut self) {
        self.view_start = 0.0;
        self.view_end = if self.duration > 0.0 { self.duration } else { 1.0 };
        self.has_view = false;
    }

    /// Pull the window back inside `[0, duration]` and restore the minimum
    /// span, growing the end first and the start only when the end is pinned.
    pub fn clamp(&mut self) {
        if self.duration <= 0.0 {
            self.view_start = 0.0;
            self.view_end = 1.0;
            return;
        }
        let min_span = self.min_span();
        self.view_start = self.view_start.max(0.0);
        self.view_end = self.view_end.min(self.duration);
        if self.view_end - self.view_start < min_span {
            self.view_end = self.view_start + min_span;
            if self.view_end > self.duration {
                self.view_end = self.duration;
                self.view_start = (self.view_end - min_span).max(0.0);
            }
        }
    }

    /// Frame `[begin, end]` so it fills about `segment_fill_ratio` of the view
    /// with equal margins, shifted to stay inside the audio.
    ///
    /// Falls back to [`Self::fit_all`] when there is no audio or the range is
    /// not a valid timed range.
    pub fn auto_zoom_to_segment(&mut self, begin: f64, end: f64) {
        if self.duration <= 0.0 || !begin.is_finite() || !end.is_finite() || begin < 0.0 || end <= begin
        {
            self.fit_all();
            return;
        }
        let seg_start = begin.max(0.0);
        let seg_end = end.min(self.duration);
        let seg_len = (seg_end - seg_start).max(self.min_segment_sec);

        let view_len = (seg_len / self.segment_fill_ratio)
            .max(self.min_span())
            .min(self.duration);
        let center = (seg_start + seg_end) / 2.0;

        let mut view_start = center - view_len / 2.0;
        let mut view_end = center + view_len / 2.0;
        if view_start < 0.0 {
            view_end -= view_start;
            view_start = 0.0;
        }
        if view_end > self.duration {
            view_start -= view_end - self.duration;
            view_end = self.duration;
            view_start = view_start.max(0.0);
        }

        self.view_start = view_start;
        self.view_end = view_end;
        self.clamp();
        self.has_view = true;
    }

    /// Current sentence range. Partially timed or empty ranges clear it.
    pub fn set_selection(&mut self, begin: Option<f64>, end: Option<f64>) {
        self.selection = match (begin, end) {
            (Some(b), Some(e)) if b >= 0.0 && e > b => Some((b, e)),
            _ => None,
        };
    }

    pub fn selection(&self) -> Option<(f64, f64)> {
        self.selection
    }

    /// Part of the selection inside the current window, if any.
    pub fn visible_selection(&self) -> Option<(f64, f64)> {
        let (begin, end) = self.selection?;
        let b = begin.max(self.view_start);
        let e = end.min(self.view_end);
        (e > b).then_some((b, e))
    }

    pub fn x_for_time(&self, t: f64, left: f64, width: f64) -> f64 {
        left + (t - self.view_start) / self.view_len() * width
    }
}
