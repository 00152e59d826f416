use crate::facade::{Logger, Severity, TagSource};
use crate::time::clock::{Clock, MonotonicClock};

/// One recorded phase boundary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Split {
    /// Timestamp in milliseconds, as reported by the timer's clock.
    pub at_ms: i64,
    /// `None` only for the initial split seeded by construction or reset.
    pub label: Option<String>,
}

/// Records timing splits throughout an operation and reports them.
///
/// ```rust
/// use taglog::time::{ManualClock, SplitTimer};
///
/// let clock = ManualClock::new(0);
/// let mut timings = SplitTimer::with_clock("Loader", "load_profile", &clock);
/// clock.advance(9);
/// timings.add_split("read file");
/// clock.advance(7);
/// timings.add_split("parse");
///
/// assert_eq!(
///     timings.render_to_string(),
///     "load_profile: begin\n\
///      load_profile:    9 ms, read file\n\
///      load_profile:    7 ms, parse\n\
///      load_profile: end, 16 ms\n"
/// );
/// ```
///
/// Not synchronized: a timer belongs to one call stack. Mutation takes
/// `&mut self`, so sharing one across threads needs an outer lock.
#[derive(Debug, Clone)]
pub struct SplitTimer<C: Clock = MonotonicClock> {
    tag: String,
    label: String,
    splits: Vec<Split>,
    clock: C,
}

impl SplitTimer<MonotonicClock> {
    /// Starts a timer on the monotonic clock.
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_clock(tag, label, MonotonicClock)
    }
}

impl<C: Clock> SplitTimer<C> {
    pub fn with_clock(tag: impl Into<String>, label: impl Into<String>, clock: C) -> Self {
        let mut timer = Self {
            tag: tag.into(),
            label: label.into(),
            splits: Vec::new(),
            clock,
        };
        timer.reset();
        timer
    }

    /// Replaces tag and label, then restarts.
    pub fn reset_with(&mut self, tag: impl Into<String>, label: impl Into<String>) {
        self.tag = tag.into();
        self.label = label.into();
        self.reset();
    }

    /// Clears all splits and records a fresh starting point.
    pub fn reset(&mut self) {
        self.splits.clear();
        let at_ms = self.clock.now_millis();
        self.splits.push(Split { at_ms, label: None });
    }

    /// Marks the end of a phase.
    pub fn add_split(&mut self, label: impl Into<String>) {
        let at_ms = self.clock.now_millis();
        self.splits.push(Split { at_ms, label: Some(label.into()) });
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// All splits, including the initial one.
    #[inline]
    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Number of splits added since the last reset.
    #[inline]
    pub fn len(&self) -> usize {
        self.splits.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Milliseconds between the first and the last split.
    pub fn total_millis(&self) -> i64 {
        match (self.splits.first(), self.splits.last()) {
            (Some(first), Some(last)) => last.at_ms - first.at_ms,
            _ => 0,
        }
    }

    /// Report lines: `begin`, one line per split with the time since the
    /// previous split, then `end` with the total.
    ///
    /// Deltas are differences of raw clock readings and are reported as-is,
    /// including negative values from a misbehaving clock.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let label = self.label.as_str();
        let begin = std::iter::once(format!("{label}: begin"));
        let phases = self.splits.windows(2).map(move |pair| {
            let delta = pair[1].at_ms - pair[0].at_ms;
            let name = pair[1].label.as_deref().unwrap_or_default();
            format!("{label}:    {delta} ms, {name}")
        });
        let end = std::iter::once_with(move || format!("{label}: end, {} ms", self.total_millis()));
        begin.chain(phases).chain(end)
    }

    /// Writes the report to the process-wide logger.
    #[track_caller]
    pub fn render_to_log(&self) {
        self.render_to_logger(crate::global());
    }

    /// Writes the report through `logger`, one debug line per report line.
    #[track_caller]
    pub fn render_to_logger(&self, logger: &Logger) {
        if !logger.is_enabled() {
            return;
        }
        for line in self.lines() {
            logger.log(Severity::Debug, TagSource::Literal(&self.tag), format_args!("{line}"), None);
        }
    }

    /// The report as one string, each line terminated by `'\n'`.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::{LoggerConfig, LookupMode};
    use crate::sink::MemorySink;
    use crate::time::ManualClock;

    fn quiet_logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let config = LoggerConfig { enabled: true, lookup_disabled: true, lookup_mode: LookupMode::Short };
        (Logger::new(config, sink.clone()), sink)
    }

    // ── construction / reset ──────────────────────────────────────────────

    #[test]
    fn new_seeds_unlabelled_split() {
        let clock = ManualClock::new(50);
        let t = SplitTimer::with_clock("Tag", "op", &clock);
        assert_eq!(t.splits(), &[Split { at_ms: 50, label: None }]);
        assert!(t.is_empty());
        assert_eq!(t.tag(), "Tag");
        assert_eq!(t.label(), "op");
    }

    #[test]
    fn reset_clears_and_reseeds() {
        let clock = ManualClock::new(0);
        let mut t = SplitTimer::with_clock("Tag", "op", &clock);
        clock.advance(5);
        t.add_split("a");
        clock.advance(5);
        t.reset();
        assert_eq!(t.splits(), &[Split { at_ms: 10, label: None }]);
        assert_eq!(t.tag(), "Tag");
    }

    #[test]
    fn reset_with_replaces_tag_and_label() {
        let clock = ManualClock::new(0);
        let mut t = SplitTimer::with_clock("Tag", "op", &clock);
        t.add_split("a");
        t.reset_with("Other", "next");
        assert_eq!(t.tag(), "Other");
        assert_eq!(t.label(), "next");
        assert_eq!(t.len(), 0);
    }

    // ── report ────────────────────────────────────────────────────────────

    #[test]
    fn empty_report_is_begin_and_end() {
        let t = SplitTimer::with_clock("Tag", "op", ManualClock::new(7));
        assert_eq!(t.render_to_string(), "op: begin\nop: end, 0 ms\n");
    }

    #[test]
    fn deltas_are_between_consecutive_splits() {
        let clock = ManualClock::new(1000);
        let mut t = SplitTimer::with_clock("Tag", "methodA", &clock);
        for (step, name) in [(9, "work A"), (1, "work B"), (6, "work C")] {
            clock.advance(step);
            t.add_split(name);
        }

        let lines: Vec<String> = t.lines().collect();
        assert_eq!(
            lines,
            [
                "methodA: begin",
                "methodA:    9 ms, work A",
                "methodA:    1 ms, work B",
                "methodA:    6 ms, work C",
                "methodA: end, 16 ms",
            ]
        );
        assert_eq!(t.total_millis(), 16);
    }

    #[test]
    fn line_count_is_splits_plus_two() {
        let clock = ManualClock::new(0);
        let mut t = SplitTimer::with_clock("Tag", "op", &clock);
        for n in 0..5 {
            assert_eq!(t.lines().count(), n + 2);
            clock.advance(1);
            t.add_split("step");
        }
    }

    #[test]
    fn duplicate_labels_are_kept() {
        let clock = ManualClock::new(0);
        let mut t = SplitTimer::with_clock("Tag", "op", &clock);
        t.add_split("poll");
        t.add_split("poll");
        assert_eq!(t.len(), 2);
        assert_eq!(t.lines().filter(|l| l.ends_with("poll")).count(), 2);
    }

    #[test]
    fn negative_delta_is_rendered_as_is() {
        let clock = ManualClock::new(100);
        let mut t = SplitTimer::with_clock("Tag", "op", &clock);
        clock.set(97);
        t.add_split("skew");
        assert_eq!(t.render_to_string(), "op: begin\nop:    -3 ms, skew\nop: end, -3 ms\n");
    }

    // ── rendering to a logger ─────────────────────────────────────────────

    #[test]
    fn log_and_string_reports_match() {
        let (logger, sink) = quiet_logger();
        let clock = ManualClock::new(0);
        let mut t = SplitTimer::with_clock("Timings", "load", &clock);
        clock.advance(3);
        t.add_split("open");
        clock.advance(4);
        t.add_split("read");

        t.render_to_logger(&logger);

        let entries = sink.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.severity == Severity::Debug && e.tag == "Timings"));

        let joined: String = entries.iter().map(|e| format!("{}\n", e.message)).collect();
        assert_eq!(joined, t.render_to_string());
    }

    #[test]
    fn disabled_logger_receives_nothing() {
        let (logger, sink) = quiet_logger();
        logger.set_enabled(false);
        let mut t = SplitTimer::with_clock("Timings", "load", ManualClock::new(0));
        t.add_split("open");
        t.render_to_logger(&logger);
        assert!(sink.is_empty());
    }
}
