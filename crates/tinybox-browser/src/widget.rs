//! The `<tiny-box>` widget: shadow tree, buffers, preview and listeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use tinybox_core::{
    BufferKind, LayoutMode, LayoutReconciler, Playground, Reconciled, Registration,
    RenderOutcome, TinyBoxConfig, TinyBoxError, register_once,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::font::DocumentFonts;
use crate::frame::FrameTarget;
use crate::keys::{KeyOutcome, handle_key};
use crate::pane::DomPane;
use crate::shadow::ShadowParts;
use crate::template::source_from_host;

struct State {
    playground: Playground,
    reconciler: LayoutReconciler,
}

/// Everything the event callbacks need. Callbacks hold it weakly.
struct Inner {
    parts: ShadowParts,
    config: TinyBoxConfig,
    state: RefCell<State>,
}

impl Inner {
    /// Pull the textarea's value into its buffer and re-render.
    fn sync_input(&self, kind: BufferKind) -> RenderOutcome {
        let value = self.parts.input(kind).value();
        match self.state.try_borrow_mut() {
            Ok(mut state) => state.playground.edit(kind, value),
            Err(_) => {
                tracing::warn!(%kind, "widget busy, dropping input event");
                return RenderOutcome::Skipped;
            }
        }
        self.render()
    }

    fn render(&self) -> RenderOutcome {
        let Ok(state) = self.state.try_borrow() else {
            tracing::warn!("widget busy, skipping render");
            return RenderOutcome::Skipped;
        };
        let mut target = FrameTarget::new(&self.parts.frame);
        state.playground.render(&mut target)
    }

    fn reconcile(&self) -> Option<Reconciled> {
        let width = f64::from(self.parts.container.offset_width());
        let Ok(mut state) = self.state.try_borrow_mut() else {
            tracing::warn!("widget busy, skipping layout pass");
            return None;
        };
        let mut pane = DomPane::new(&self.parts.editor);
        Some(state.reconciler.reconcile(width, &mut pane))
    }

    fn keydown(&self, kind: BufferKind, event: &KeyboardEvent) {
        match handle_key(event, self.parts.input(kind), &self.config.indent) {
            // No input event follows a direct write.
            Ok(KeyOutcome::Direct) => {
                self.sync_input(kind);
            }
            Ok(KeyOutcome::Native | KeyOutcome::PassThrough) => {}
            Err(err) => tracing::warn!(%kind, error = %err, "tab insertion failed"),
        }
    }
}

/// One playground widget mounted on a host element.
///
/// Listeners exist only between [`connect`](Self::connect) and
/// [`disconnect`](Self::disconnect). They are RAII guards, so dropping the
/// widget removes them as well.
pub struct TinyBoxElement {
    host: HtmlElement,
    inner: Rc<Inner>,
    listeners: Vec<EventListener>,
}

impl TinyBoxElement {
    /// Build the shadow tree on `host` and register the editor font.
    ///
    /// The host's template is read on the first [`connect`](Self::connect).
    pub fn new(host: HtmlElement, config: TinyBoxConfig) -> Result<Self, TinyBoxError> {
        config.validate()?;
        let parts = ShadowParts::build(&host, &config)?;

        match DocumentFonts::current().map(|mut fonts| register_once(&mut fonts, &config.font)) {
            Some(Ok(Registration::Registered | Registration::AlreadyPresent)) => {}
            Some(Err(err)) => tracing::warn!(error = %err, "editor font not registered"),
            None => tracing::warn!("no document to register the editor font in"),
        }

        let state = State {
            playground: Playground::new(&config),
            reconciler: LayoutReconciler::new(config.layout_threshold),
        };
        Ok(Self {
            host,
            inner: Rc::new(Inner {
                parts,
                config,
                state: RefCell::new(state),
            }),
            listeners: Vec::new(),
        })
    }

    pub fn host(&self) -> &HtmlElement {
        &self.host
    }

    pub fn parts(&self) -> &ShadowParts {
        &self.inner.parts
    }

    pub fn config(&self) -> &TinyBoxConfig {
        &self.inner.config
    }

    pub fn is_connected(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Attach listeners, load the template on first attach and render.
    ///
    /// Connecting an already connected widget does nothing.
    pub fn connect(&mut self) {
        if self.is_connected() {
            return;
        }
        self.listeners = listen(&self.inner);
        self.load_initial_content();
        self.inner.reconcile();
        self.inner.render();
        tracing::debug!(listeners = self.listeners.len(), "tiny-box connected");
    }

    /// Remove every listener. Buffers and preview are kept for a re-attach.
    pub fn disconnect(&mut self) {
        if !self.is_connected() {
            return;
        }
        self.listeners.clear();
        tracing::debug!("tiny-box disconnected");
    }

    /// Current content of a buffer.
    pub fn buffer(&self, kind: BufferKind) -> Option<String> {
        let state = self.inner.state.try_borrow().ok()?;
        Some(state.playground.buffer(kind).to_string())
    }

    /// Replace a buffer as if the user had typed it, and re-render.
    pub fn set_buffer(&self, kind: BufferKind, text: &str) -> RenderOutcome {
        self.inner.parts.input(kind).set_value(text);
        self.inner.sync_input(kind)
    }

    pub fn render(&self) -> RenderOutcome {
        self.inner.render()
    }

    /// Run a layout pass against the container's current width.
    pub fn reconcile_layout(&self) -> Option<Reconciled> {
        self.inner.reconcile()
    }

    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.inner.state.try_borrow().ok()?.reconciler.mode()
    }

    fn load_initial_content(&self) {
        let Ok(mut state) = self.inner.state.try_borrow_mut() else {
            tracing::warn!("widget busy, template not loaded");
            return;
        };
        if !state.playground.load(source_from_host(&self.host)) {
            return;
        }
        for kind in BufferKind::ALL {
            self.inner
                .parts
                .input(kind)
                .set_value(state.playground.buffer(kind));
        }
    }
}

fn listen(inner: &Rc<Inner>) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(BufferKind::ALL.len() * 2 + 1);

    for kind in BufferKind::ALL {
        let input = inner.parts.input(kind);

        let weak = Rc::downgrade(inner);
        listeners.push(EventListener::new(input, "input", move |_| {
            with_inner(&weak, |inner| {
                inner.sync_input(kind);
            });
        }));

        let weak = Rc::downgrade(inner);
        listeners.push(EventListener::new_with_options(
            input,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                with_inner(&weak, |inner| inner.keydown(kind, event));
            },
        ));
    }

    match web_sys::window() {
        Some(window) => {
            let weak = Rc::downgrade(inner);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                with_inner(&weak, |inner| {
                    inner.reconcile();
                });
            }));
        }
        None => tracing::warn!("no window, layout will not follow resizes"),
    }

    listeners
}

/// Run `f` if the widget is still alive.
fn with_inner(weak: &Weak<Inner>, f: impl FnOnce(&Inner)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}
