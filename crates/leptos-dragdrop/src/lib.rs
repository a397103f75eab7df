//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged key `D` and the drop target `T`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
pub struct DndSignals<D: 'static, T: 'static> {
    pub dragging_read: ReadSignal<Option<D>>,
    pub dragging_write: WriteSignal<Option<D>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Set when a drag finished; the click that follows mouseup should be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<D>>,
    pub pending_write: WriteSignal<Option<D>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<D: 'static, T: 'static> Clone for DndSignals<D, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static, T: 'static> Copy for DndSignals<D, T> {}

impl<D, T> DndSignals<D, T>
where
    D: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `key` is the one currently being dragged (tracked)
    pub fn is_dragging(&self, key: &D) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(key))
    }

    /// Whether `target` is the current drop target (tracked)
    pub fn is_drop_target(&self, target: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }

    /// Whether any drag is in progress (tracked)
    pub fn is_active(&self) -> bool {
        self.dragging_read.with(Option::is_some)
    }
}

pub fn create_dnd_signals<D, T>() -> DndSignals<D, T>
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<D>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<D>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True when the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag<D, T>(dnd: &DndSignals<D, T>, was_dragging: bool)
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    // Cleared again on the next mousedown
    dnd.drag_just_ended_write.set(was_dragging);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<D, T>(
    dnd: DndSignals<D, T>,
    key: D,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    D: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        dnd.drag_just_ended_write.set(false);
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(key.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove - starts the drag once the pointer passes the threshold
pub fn bind_global_mousemove<D, T, S>(dnd: DndSignals<D, T>, on_start: S)
where
    D: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
    S: Fn(D) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_write.set(Some(pending.clone()));
            on_start(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<D, T>(
    dnd: DndSignals<D, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    D: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<D, T>(dnd: DndSignals<D, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_start` fires when a pending press turns into a drag, `on_drop` when a
/// drag is released over a target and `on_cancel` when released anywhere else.
pub fn bind_global_mouseup<D, T, S, F, C>(dnd: DndSignals<D, T>, on_start: S, on_drop: F, on_cancel: C)
where
    D: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    S: Fn(D) + 'static,
    F: Fn(D, T) + 'static,
    C: Fn(D) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd, dragging.is_some());
        match (dragging, drop_target) {
            (Some(dragged), Some(target)) => on_drop(dragged, target),
            (Some(dragged), None) => on_cancel(dragged),
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd, on_start);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_movement_is_a_click() {
        assert!(!exceeds_threshold(0, 0));
        assert!(!exceeds_threshold(DRAG_THRESHOLD_PX, -DRAG_THRESHOLD_PX));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        assert!(exceeds_threshold(DRAG_THRESHOLD_PX + 1, 0));
        assert!(exceeds_threshold(0, -(DRAG_THRESHOLD_PX + 1)));
    }
}
