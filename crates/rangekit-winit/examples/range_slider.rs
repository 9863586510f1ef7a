//! Range slider driven by winit input
//!
//! Drag the handles across the window (or the gap between them) and watch the
//! title bar and the log. Nothing is drawn; the window only provides input.
//!
//! Controls:
//! - V: toggle vertical orientation
//! - R: switch the range between 0..100 and -500..500
//! - ESC: quit
//!
//! Run with `RUST_LOG=debug` to see drag sessions start and end.

use rangekit::{NumericRange, PointerState, RangeSliderState, Rect};
use rangekit_interactive::{abbreviate, RangeBinding, RangeSliderStyle, RangeSliderView};
use rangekit_winit::WinitSliderExt;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Margin between the window edge and the slider frame
const MARGIN: f64 = 40.0;

struct App {
    window: Option<Arc<Window>>,
    slider: RangeSliderView,
    pointer: PointerState,
    binding: Rc<RefCell<RangeBinding>>,
}

impl App {
    fn new() -> Self {
        let mut state = RangeSliderState::new(NumericRange::default(), 40.0, 60.0);
        state.on_end_movement(|value| log::info!("selected [{}, {}]", value.lower, value.upper));
        let binding = RangeBinding::attach(&mut state);

        Self {
            window: None,
            slider: RangeSliderView::new(state, Rect::default(), RangeSliderStyle::default()),
            pointer: PointerState::new(),
            binding,
        }
    }

    /// Fit the slider frame to the window, keeping the track centred
    fn layout_slider(&mut self, width: f64, height: f64) {
        let girth = 2.0 * self.slider.metrics().touch_radius() + 2.0 * MARGIN;
        let frame = if self.slider.style().vertical {
            Rect::from_xywh(
                (width - girth).max(0.0) / 2.0,
                MARGIN,
                girth,
                (height - 2.0 * MARGIN).max(0.0),
            )
        } else {
            Rect::from_xywh(
                MARGIN,
                (height - girth).max(0.0) / 2.0,
                (width - 2.0 * MARGIN).max(0.0),
                girth,
            )
        };
        self.slider.set_frame(frame);
    }

    fn relayout(&mut self) {
        if let Some(window) = &self.window {
            let size = window.inner_size();
            self.layout_slider(size.width as f64, size.height as f64);
        }
    }

    fn update_title(&self) {
        let Some(window) = &self.window else {
            return;
        };

        let binding = self.binding.borrow();
        let range = self.slider.state().range();
        window.set_title(&format!(
            "{} .. {}  [{} to {}]{}",
            binding.min_text(),
            binding.max_text(),
            abbreviate(range.lower_bound(), true),
            abbreviate(range.upper_bound(), true),
            if binding.moving { "  (dragging)" } else { "" },
        ));
    }

    fn toggle_range(&mut self) {
        let state = self.slider.state_mut();
        if state.range().upper_bound() > 100.0 {
            state.set_range(0.0, 100.0);
        } else {
            state.set_range(-500.0, 500.0);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Range slider")
            .with_inner_size(winit::dpi::LogicalSize::new(640.0, 240.0));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                self.window = Some(Arc::new(window));
                self.relayout();
                self.update_title();
            }
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.slider.handle_winit_event(&mut self.pointer, &event) {
            let layout = self.slider.layout();
            log::trace!(
                "handles at {:?} / {:?}",
                layout.foreground_handle.center(),
                layout.background_handle.center()
            );
            self.update_title();
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.layout_slider(size.width as f64, size.height as f64);
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if key_event.state == ElementState::Pressed => match key_event.physical_key {
                PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                PhysicalKey::Code(KeyCode::KeyV) => {
                    let vertical = !self.slider.style().vertical;
                    self.slider.set_vertical(vertical);
                    self.relayout();
                    log::info!("vertical: {vertical}");
                }
                PhysicalKey::Code(KeyCode::KeyR) => {
                    self.toggle_range();
                    self.update_title();
                }
                _ => {}
            },

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("failed to create event loop: {err}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    println!("Range slider controls:");
    println!("  Drag         - move a handle, or the selection between them");
    println!("  V            - toggle vertical");
    println!("  R            - toggle range");
    println!("  ESC          - quit");

    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {err}");
    }
}
