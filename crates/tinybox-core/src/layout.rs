//! Responsive layout reconciliation.
//!
//! The editor pane is drag-resizable. Side by side, a drag sets an inline
//! width; stacked, it sets an inline height. When the host crosses the
//! layout threshold the override from the other layout no longer applies
//! and has to be cleared so the stylesheet's own sizing takes over again.
//!
//! Container-query layout changes fire no event of their own, so the widget
//! polls the host width on every window resize and runs
//! [`LayoutReconciler::reconcile`].

use std::fmt;

use crate::config::DEFAULT_LAYOUT_THRESHOLD;

/// Which arrangement the stylesheet picks for a host width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Editor above preview (`width < threshold`).
    Stacked,
    /// Editor beside preview (`width >= threshold`).
    SideBySide,
}

impl LayoutMode {
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width < threshold {
            LayoutMode::Stacked
        } else {
            LayoutMode::SideBySide
        }
    }

    /// The dimension a manual drag sets in this mode.
    pub fn resizable(self) -> Dimension {
        match self {
            LayoutMode::Stacked => Dimension::Height,
            LayoutMode::SideBySide => Dimension::Width,
        }
    }

    /// The dimension whose override is meaningless in this mode.
    pub fn stale(self) -> Dimension {
        match self {
            LayoutMode::Stacked => Dimension::Width,
            LayoutMode::SideBySide => Dimension::Height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// CSS property name carrying the override.
    pub fn property(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// Inline sizing overrides on the editor pane.
pub trait PaneStyle {
    fn has_override(&self, dimension: Dimension) -> bool;

    fn clear_override(&mut self, dimension: Dimension);
}

/// What a reconcile pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub mode: LayoutMode,
    /// The mode differs from the previous pass (always true on the first).
    pub changed: bool,
    pub cleared: Option<Dimension>,
}

/// Tracks the current layout mode and clears stale overrides.
///
/// Only ever clears; overrides are set by the user dragging the pane.
#[derive(Debug, Clone)]
pub struct LayoutReconciler {
    threshold: f64,
    mode: Option<LayoutMode>,
}

impl Default for LayoutReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT_THRESHOLD)
    }
}

impl LayoutReconciler {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            mode: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Mode as of the last reconcile, if any ran.
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Whether a drag may set `dimension` in the current mode.
    ///
    /// Before the first reconcile nothing is known, so nothing is accepted.
    pub fn accepts_manual(&self, dimension: Dimension) -> bool {
        self.mode.is_some_and(|mode| mode.resizable() == dimension)
    }

    /// Bring `pane` in line with `host_width`.
    pub fn reconcile<P: PaneStyle + ?Sized>(&mut self, host_width: f64, pane: &mut P) -> Reconciled {
        let mode = LayoutMode::for_width(host_width, self.threshold);
        let changed = self.mode != Some(mode);
        self.mode = Some(mode);

        let stale = mode.stale();
        let cleared = if pane.has_override(stale) {
            pane.clear_override(stale);
            Some(stale)
        } else {
            None
        };

        if changed || cleared.is_some() {
            tracing::debug!(host_width, ?mode, changed, ?cleared, "layout reconciled");
        }

        Reconciled {
            mode,
            changed,
            cleared,
        }
    }
}

/// Overrides held in memory, standing in for an element's inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneOverrides {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl PaneOverrides {
    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Width => self.width.as_deref(),
            Dimension::Height => self.height.as_deref(),
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        let value = Some(value.into());
        match dimension {
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }
}

impl PaneStyle for PaneOverrides {
    fn has_override(&self, dimension: Dimension) -> bool {
        self.get(dimension).is_some_and(|v| !v.is_empty())
    }

    fn clear_override(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Width => self.width = None,
            Dimension::Height => self.height = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mode_boundary() {
        assert_eq!(LayoutMode::for_width(899.9, 900.0), LayoutMode::Stacked);
        assert_eq!(LayoutMode::for_width(900.0, 900.0), LayoutMode::SideBySide);
        assert_eq!(LayoutMode::for_width(0.0, 900.0), LayoutMode::Stacked);
    }

    #[test]
    fn test_stacking_clears_width() {
        let mut reconciler = LayoutReconciler::default();
        let mut pane = PaneOverrides::default();

        reconciler.reconcile(1200.0, &mut pane);
        pane.set(Dimension::Width, "400px");

        let result = reconciler.reconcile(600.0, &mut pane);
        assert_eq!(result.mode, LayoutMode::Stacked);
        assert!(result.changed);
        assert_eq!(result.cleared, Some(Dimension::Width));
        assert_eq!(pane, PaneOverrides::default());
    }

    #[test]
    fn test_side_by_side_clears_height() {
        let mut reconciler = LayoutReconciler::default();
        let mut pane = PaneOverrides::default();

        reconciler.reconcile(500.0, &mut pane);
        pane.set(Dimension::Height, "300px");

        let result = reconciler.reconcile(1000.0, &mut pane);
        assert_eq!(result.cleared, Some(Dimension::Height));
        assert!(pane.height.is_none());
    }

    #[test]
    fn test_same_mode_keeps_override() {
        let mut reconciler = LayoutReconciler::default();
        let mut pane = PaneOverrides::default();

        reconciler.reconcile(500.0, &mut pane);
        pane.set(Dimension::Height, "300px");

        let result = reconciler.reconcile(700.0, &mut pane);
        assert!(!result.changed);
        assert_eq!(result.cleared, None);
        assert_eq!(pane.get(Dimension::Height), Some("300px"));
    }

    #[test]
    fn test_empty_override_is_not_reported() {
        let mut reconciler = LayoutReconciler::default();
        let mut pane = PaneOverrides {
            width: Some(String::new()),
            height: None,
        };
        let result = reconciler.reconcile(100.0, &mut pane);
        assert_eq!(result.cleared, None);
    }

    #[test]
    fn test_accepts_manual_follows_mode() {
        let mut reconciler = LayoutReconciler::default();
        let mut pane = PaneOverrides::default();
        assert!(!reconciler.accepts_manual(Dimension::Width));

        reconciler.reconcile(1000.0, &mut pane);
        assert!(reconciler.accepts_manual(Dimension::Width));
        assert!(!reconciler.accepts_manual(Dimension::Height));

        reconciler.reconcile(400.0, &mut pane);
        assert!(reconciler.accepts_manual(Dimension::Height));
    }

    #[derive(Debug, Clone)]
    enum Event {
        Resize(f64),
        Drag(u16),
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            (0.0f64..2000.0).prop_map(Event::Resize),
            (1u16..1000).prop_map(Event::Drag),
        ]
    }

    proptest! {
        #[test]
        fn overrides_are_never_both_set(events in prop::collection::vec(event(), 0..64)) {
            let mut reconciler = LayoutReconciler::default();
            let mut pane = PaneOverrides::default();

            for event in events {
                match event {
                    Event::Resize(width) => {
                        reconciler.reconcile(width, &mut pane);
                    }
                    Event::Drag(px) => {
                        let dimension = match reconciler.mode() {
                            Some(mode) => mode.resizable(),
                            None => continue,
                        };
                        prop_assert!(reconciler.accepts_manual(dimension));
                        pane.set(dimension, format!("{px}px"));
                    }
                }
                prop_assert!(
                    !(pane.has_override(Dimension::Width) && pane.has_override(Dimension::Height))
                );
            }
        }
    }
}
