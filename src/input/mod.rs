mod gestures;
pub mod throttle;

pub use gestures::{GestureEvent, GesturePhase, GestureRouter};
pub use throttle::PointThrottler;

use egui::{Context, Event, PointerButton, Pos2, Rect, TouchPhase};

use crate::geometry::CanvasTransform;

/// Turns raw egui input into gesture events in page coordinates.
///
/// Only the primary button draws. A gesture has to start on the page, but
/// once started it follows the pointer anywhere until release.
#[derive(Debug, Clone)]
pub struct InputHandler {
    view: CanvasTransform,
    gesture_active: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            view: CanvasTransform::identity(canvas_rect),
            gesture_active: false,
            last_pointer_pos: None,
        }
    }

    /// Update where the page is shown (e.g. if window is resized)
    pub fn set_view(&mut self, view: CanvasTransform) {
        self.view = view;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.view.page_rect()
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        self.view.to_canvas(pos)
    }

    /// Read this frame's raw input from egui
    pub fn process_input(&mut self, ctx: &Context) -> Vec<GestureEvent> {
        let events = ctx.input(|input| input.events.clone());
        self.process_events(&events)
    }

    /// Convert a batch of egui events, in order
    pub fn process_events(&mut self, events: &[Event]) -> Vec<GestureEvent> {
        let mut gestures = Vec::new();

        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    if *pressed {
                        if self.canvas_rect().contains(*pos) {
                            self.gesture_active = true;
                            gestures.push(GestureEvent::begin(self.to_canvas(*pos)));
                        }
                    } else if self.gesture_active {
                        self.gesture_active = false;
                        gestures.push(GestureEvent::end(self.to_canvas(*pos)));
                    }
                }
                Event::PointerMoved(pos) => {
                    self.last_pointer_pos = Some(*pos);
                    if self.gesture_active {
                        gestures.push(GestureEvent::moved(self.to_canvas(*pos)));
                    }
                }
                Event::PointerGone => {
                    if self.gesture_active {
                        self.gesture_active = false;
                        let last = self.last_pointer_pos.unwrap_or(self.canvas_rect().min);
                        gestures.push(GestureEvent::cancel(self.to_canvas(last)));
                    }
                    self.last_pointer_pos = None;
                }
                Event::Touch {
                    phase: TouchPhase::Cancel,
                    pos,
                    ..
                } => {
                    if self.gesture_active {
                        self.gesture_active = false;
                        gestures.push(GestureEvent::cancel(self.to_canvas(*pos)));
                    }
                }
                _ => {}
            }
        }

        gestures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Modifiers};

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(400.0, 450.0)))
    }

    #[test]
    fn test_press_drag_release_in_canvas_space() {
        let mut input = handler();
        let gestures = input.process_events(&[
            press(pos2(110.0, 60.0), true),
            Event::PointerMoved(pos2(120.0, 70.0)),
            press(pos2(120.0, 70.0), false),
        ]);
        assert_eq!(
            gestures,
            vec![
                GestureEvent::begin(pos2(10.0, 10.0)),
                GestureEvent::moved(pos2(20.0, 20.0)),
                GestureEvent::end(pos2(20.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let gestures = input.process_events(&[
            press(pos2(10.0, 10.0), true),
            Event::PointerMoved(pos2(150.0, 100.0)),
            press(pos2(150.0, 100.0), false),
        ]);
        assert!(gestures.is_empty());
    }

    #[test]
    fn test_scaled_page_maps_back_to_page_coordinates() {
        let mut input = handler();
        let panel = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(400.0, 600.0));
        input.set_view(CanvasTransform::fit(egui::vec2(800.0, 600.0), panel));

        let gestures = input.process_events(&[
            // Above the letterboxed page
            press(pos2(50.0, 100.0), true),
            press(pos2(50.0, 100.0), false),
            press(pos2(50.0, 200.0), true),
            press(pos2(60.0, 200.0), false),
        ]);
        assert_eq!(
            gestures,
            vec![
                GestureEvent::begin(pos2(100.0, 100.0)),
                GestureEvent::end(pos2(120.0, 100.0)),
            ]
        );
    }

    #[test]
    fn test_pointer_gone_cancels() {
        let mut input = handler();
        let gestures = input.process_events(&[
            press(pos2(110.0, 60.0), true),
            Event::PointerMoved(pos2(130.0, 60.0)),
            Event::PointerGone,
        ]);
        assert_eq!(gestures.last(), Some(&GestureEvent::cancel(pos2(30.0, 10.0))));
    }
}
