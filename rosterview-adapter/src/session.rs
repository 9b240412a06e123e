use alloc::string::String;
use alloc::vec::Vec;

use rosterview::{Choice, Developer, FilterSpec, RosterView, SourceSet, ViewportOptions};

use crate::{
    Annotations, Debouncer, LoadError, LoadRequest, Prediction, Rating, RenderSurface,
    RosterSource, render_view,
};

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionOptions {
    pub viewport: ViewportOptions,
    /// Quiet period before filter edits are applied.
    pub debounce_ms: u64,
    /// Loads still pending after this long fail with [`LoadError::TimedOut`]. `None` waits
    /// forever.
    pub load_timeout_ms: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportOptions::default(),
            debounce_ms: 300,
            load_timeout_ms: Some(10_000),
        }
    }
}

impl SessionOptions {
    pub fn with_viewport(mut self, viewport: ViewportOptions) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_load_timeout_ms(mut self, load_timeout_ms: Option<u64>) -> Self {
        self.load_timeout_ms = load_timeout_ms;
        self
    }
}

/// A discrete event from the input surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    DomainChanged(Choice),
    NationalityChanged(Choice),
    NamePatternChanged(String),
    /// A wheel delta. Ignored unless `is_pointer_over` is set, whatever the tracked hover state.
    Scrolled { delta: i64, is_pointer_over: bool },
    PointerEntered,
    PointerLeft,
}

/// Identifies one load attempt. Only the most recent ticket can complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        ticket: LoadTicket,
        started_ms: u64,
    },
    /// The last attempt failed; the previous roster (or the empty one) is still shown.
    Failed(LoadError),
}

/// One user's view of the roster.
///
/// A session owns the [`RosterView`] together with the state the host would otherwise keep in
/// globals: the filter being edited, the debounce timer, pointer hover and the load status.
/// It holds no clocks and no UI objects. The host drives it by calling:
/// - `handle(event, now_ms)` for input events
/// - `tick(now_ms)` from a timer or frame callback (fires debounced filters, expires loads)
/// - `begin_load`/`finish_load` (or `load`) to replace the roster
/// - `render(surface)` whenever a method returned `true`
///
/// Every method that returns `bool` reports whether the visible table may have changed.
#[derive(Clone, Debug)]
pub struct Session {
    options: SessionOptions,
    view: RosterView,
    draft: FilterSpec,
    debouncer: Debouncer<FilterSpec>,
    pointer_over: bool,
    load: LoadState,
    next_ticket: u64,
    annotations: Annotations,
    recomputes: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    /// Starts a session with an empty roster and the filter `(All, All, "")`.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            view: RosterView::new(options.viewport),
            draft: FilterSpec::default(),
            debouncer: Debouncer::new(options.debounce_ms),
            pointer_over: false,
            load: LoadState::Idle,
            next_ticket: 0,
            annotations: Annotations::new(),
            recomputes: 0,
            options,
        }
    }

    /// Starts a session over an already loaded roster.
    pub fn with_source(options: SessionOptions, source: SourceSet) -> Self {
        let mut s = Self::new(options);
        s.view.replace_source(source);
        s
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn view(&self) -> &RosterView {
        &self.view
    }

    /// The filter as edited so far. It reaches the view once the debounce fires.
    pub fn draft(&self) -> &FilterSpec {
        &self.draft
    }

    /// The filter the view currently reflects.
    pub fn applied(&self) -> &FilterSpec {
        self.view.spec()
    }

    pub fn pending_filter(&self) -> Option<&FilterSpec> {
        self.debouncer.peek()
    }

    /// Number of times the filter stage has run.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading { .. })
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        match &self.load {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }

    /// The earliest time `tick` has work to do, for hosts that arm real timers.
    pub fn next_deadline(&self) -> Option<u64> {
        let load_deadline = match (&self.load, self.options.load_timeout_ms) {
            (LoadState::Loading { started_ms, .. }, Some(timeout)) => {
                Some(started_ms.saturating_add(timeout))
            }
            _ => None,
        };
        match (self.debouncer.due_ms(), load_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Processes one input event.
    ///
    /// Filter edits only re-arm the debounce timer. Scroll deltas are applied immediately
    /// against the filtered sequence the view currently shows. A debounced filter that is
    /// already due is applied first, so a scroll never lands on a stale projection.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> bool {
        let mut changed = self.fire_due_filter(now_ms);
        match event {
            InputEvent::DomainChanged(domain) => {
                self.draft.domain = domain;
                self.schedule_filter(now_ms);
            }
            InputEvent::NationalityChanged(nationality) => {
                self.draft.nationality = nationality;
                self.schedule_filter(now_ms);
            }
            InputEvent::NamePatternChanged(name) => {
                self.draft.name = name;
                self.schedule_filter(now_ms);
            }
            InputEvent::Scrolled {
                delta,
                is_pointer_over,
            } => {
                changed |= self.view.scroll(delta, is_pointer_over);
            }
            InputEvent::PointerEntered => self.pointer_over = true,
            InputEvent::PointerLeft => self.pointer_over = false,
        }
        changed
    }

    /// Applies a wheel delta using the hover state tracked from `PointerEntered`/`PointerLeft`.
    pub fn wheel(&mut self, delta: i64, now_ms: u64) -> bool {
        let is_pointer_over = self.pointer_over;
        self.handle(
            InputEvent::Scrolled {
                delta,
                is_pointer_over,
            },
            now_ms,
        )
    }

    /// Replaces the whole filter specification (debounced like any other edit).
    pub fn set_filter(&mut self, spec: FilterSpec, now_ms: u64) {
        self.draft = spec;
        self.schedule_filter(now_ms);
    }

    fn schedule_filter(&mut self, now_ms: u64) {
        atrace!(now_ms, "schedule_filter");
        self.debouncer.schedule(self.draft.clone(), now_ms);
    }

    fn fire_due_filter(&mut self, now_ms: u64) -> bool {
        match self.debouncer.poll(now_ms) {
            Some(spec) => {
                self.apply_now(spec);
                true
            }
            None => false,
        }
    }

    fn apply_now(&mut self, spec: FilterSpec) {
        self.recomputes += 1;
        self.view.apply_filter(spec);
        adebug!(
            filtered = self.view.filtered_len(),
            recomputes = self.recomputes,
            "filter applied"
        );
    }

    /// Advances timers: fires a due debounced filter and expires an overdue load.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = self.fire_due_filter(now_ms);
        let expired = match (&self.load, self.options.load_timeout_ms) {
            (LoadState::Loading { started_ms, .. }, Some(timeout)) => {
                let elapsed = now_ms.saturating_sub(*started_ms);
                (elapsed >= timeout).then_some(elapsed)
            }
            _ => None,
        };
        if let Some(elapsed) = expired {
            awarn!(elapsed, "roster load timed out");
            self.load = LoadState::Failed(LoadError::TimedOut { after_ms: elapsed });
            changed = true;
        }
        changed
    }

    /// Applies a pending filter edit right away, skipping the rest of the quiet period.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(spec) => {
                self.apply_now(spec);
                true
            }
            None => false,
        }
    }

    /// Marks a load as started and returns its ticket. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self, now_ms: u64) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        adebug!(ticket = ticket.0, now_ms, "begin_load");
        self.load = LoadState::Loading {
            ticket,
            started_ms: now_ms,
        };
        ticket
    }

    /// Delivers the outcome of the load identified by `ticket`.
    ///
    /// On success the roster is replaced, the applied filter re-runs and the view returns to the
    /// top. On failure the current roster stays. Outcomes for stale tickets (superseded or
    /// timed out) are dropped. Returns `true` when the session changed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Developer>, LoadError>,
    ) -> bool {
        match self.load {
            LoadState::Loading { ticket: current, .. } if current == ticket => {}
            _ => {
                awarn!(ticket = ticket.0, "dropping outcome of stale roster load");
                return false;
            }
        }

        match result.and_then(|records| SourceSet::new(records).map_err(LoadError::from)) {
            Ok(source) => {
                adebug!(records = source.len(), "roster loaded");
                self.load = LoadState::Idle;
                self.view.replace_source(source);
            }
            Err(e) => {
                awarn!(error = %e, kept = self.view.source().len(), "roster load failed");
                self.load = LoadState::Failed(e);
            }
        }
        true
    }

    /// Loads synchronously from `source`: `begin_load` followed by `finish_load`.
    pub fn load(
        &mut self,
        source: &mut impl RosterSource,
        request: &LoadRequest,
        now_ms: u64,
    ) -> bool {
        let ticket = self.begin_load(now_ms);
        let result = source.load(request);
        self.finish_load(ticket, result)
    }

    /// Draws the header and the visible slice (or the "no match" state).
    pub fn render(&self, surface: &mut impl RenderSurface) {
        render_view(&self.view, surface);
    }

    /// Looks up a developer by exact name and returns their nationality prediction.
    pub fn predict(&self, name: &str) -> Option<(&Developer, &Prediction)> {
        let d = self.view.find_by_name(name)?;
        Some((d, self.annotations.prediction(d.id)?))
    }

    /// Looks up a developer by exact name and returns their rating.
    pub fn rate(&self, name: &str) -> Option<(&Developer, &Rating)> {
        let d = self.view.find_by_name(name)?;
        Some((d, self.annotations.rating(d.id)?))
    }
}
