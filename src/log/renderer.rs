use crate::log::entry::{EventLog, LogEntry};
use crate::log::template::{filter_rule, render_entry};
use crate::region::region_model::RegionId;

/// Distance from the bottom edge, in scroll units, that still counts as
/// "following" the log.
pub const SCROLL_TOLERANCE: f64 = 10.0;

// ============================================================================
// ScrollSurface — the scrollable container the log is drawn into
// ============================================================================

/// Scrollable log container. Geometry follows the DOM's `scrollTop`,
/// `offsetHeight` and `scrollHeight`.
pub trait ScrollSurface {
    fn scroll_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn set_scroll_top(&mut self, top: f64);
    fn insert_html(&mut self, html: &str);
    fn clear(&mut self);
}

/// In-memory surface where every fragment is one fixed-height row.
#[derive(Debug, Clone)]
pub struct VirtualSurface {
    viewport_height: f64,
    row_height: f64,
    scroll_top: f64,
    fragments: Vec<String>,
}

impl VirtualSurface {
    pub fn new(viewport_height: f64, row_height: f64) -> Self {
        Self {
            viewport_height,
            row_height,
            scroll_top: 0.0,
            fragments: Vec::new(),
        }
    }

    /// Simulate the user scrolling the container.
    pub fn scroll_to(&mut self, top: f64) {
        self.set_scroll_top(top);
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.viewport_height).max(0.0)
    }
}

impl Default for VirtualSurface {
    fn default() -> Self {
        Self::new(400.0, 20.0)
    }
}

impl ScrollSurface for VirtualSurface {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn offset_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_height(&self) -> f64 {
        (self.fragments.len() as f64 * self.row_height).max(self.viewport_height)
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top.clamp(0.0, self.max_scroll_top());
    }

    fn insert_html(&mut self, html: &str) {
        self.fragments.push(html.to_string());
    }

    fn clear(&mut self) {
        self.fragments.clear();
        self.scroll_top = 0.0;
    }
}

// ============================================================================
// LogRenderer
// ============================================================================

/// Draws log entries onto a surface and owns the display-only view state:
/// the region filter and the accessible-name toggle.
#[derive(Debug)]
pub struct LogRenderer<S: ScrollSurface> {
    surface: S,
    filter: Option<RegionId>,
    show_acc_name: bool,
}

impl<S: ScrollSurface> LogRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            filter: None,
            show_acc_name: false,
        }
    }

    /// Whether the surface is scrolled to within `SCROLL_TOLERANCE` of its bottom.
    pub fn is_at_bottom(&self) -> bool {
        let s = &self.surface;
        (s.scroll_top() + s.offset_height() - s.scroll_height()).abs() < SCROLL_TOLERANCE
    }

    /// Append one entry. Follows the new bottom only if the view was already
    /// at the bottom before the append.
    pub fn append(&mut self, entry: &LogEntry) {
        let follow = self.is_at_bottom();
        self.surface.insert_html(&render_entry(entry));
        if follow {
            let bottom = self.surface.scroll_height();
            self.surface.set_scroll_top(bottom);
        }
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Redraw the whole log, e.g. after attaching a fresh surface.
    pub fn redraw(&mut self, log: &EventLog) {
        self.surface.clear();
        for entry in log.entries() {
            self.append(entry);
        }
    }

    pub fn set_filter(&mut self, filter: Option<RegionId>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Option<RegionId> {
        self.filter
    }

    /// Whether `entry` passes the active filter.
    pub fn is_visible(&self, entry: &LogEntry) -> bool {
        match self.filter {
            Some(region) => entry.region() == Some(region),
            None => true,
        }
    }

    /// Entries of `log` that pass the active filter, in log order.
    pub fn visible<'a>(&'a self, log: &'a EventLog) -> impl Iterator<Item = &'a LogEntry> + 'a {
        log.entries().iter().filter(move |e| self.is_visible(e))
    }

    /// Stylesheet text that hides every entry outside the filtered region.
    pub fn filter_style(&self) -> String {
        self.filter.map(filter_rule).unwrap_or_default()
    }

    pub fn set_show_acc_name(&mut self, show: bool) {
        self.show_acc_name = show;
    }

    pub fn show_acc_name(&self) -> bool {
        self.show_acc_name
    }

    /// Class list for the events `<ol>`.
    pub fn list_class(&self) -> &'static str {
        if self.show_acc_name { "show-accname" } else { "" }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
