use crate::event::InputEvent;
use std::collections::VecDeque;

/// Buffers host input events between frames and replays them into the GUI
/// library at the start of each update. Gamepad axis values pass through
/// a dead-zone filter; everything else is forwarded as-is. Routing stops
/// while the overlay is hidden.
#[derive(Debug)]
pub struct InputRouter {
    queue: VecDeque<InputEvent>,
    joy_axis_dead_zone: f32,
    enabled: bool,
}

impl InputRouter {
    pub fn new(joy_axis_dead_zone: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            joy_axis_dead_zone,
            enabled: true,
        }
    }

    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.joy_axis_dead_zone = dead_zone;
    }

    pub fn dead_zone(&self) -> f32 {
        self.joy_axis_dead_zone
    }

    /// Enables or disables routing. Disabling drops anything buffered.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.queue.clear();
        }
        self.enabled = enabled;
    }

    /// Queues an event for the next update.
    pub fn push(&mut self, event: InputEvent) {
        if !self.enabled {
            return;
        }
        let event = match event {
            InputEvent::JoyAxis { axis, value } => InputEvent::JoyAxis {
                axis,
                value: self.filter_axis(value),
            },
            other => other,
        };
        self.queue.push_back(event);
    }

    /// Drains everything buffered since the previous frame, in arrival
    /// order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.queue.drain(..)
    }

    /// Maps the dead zone to 0 and rescales the remaining range so full
    /// deflection stays at 1.
    fn filter_axis(&self, value: f32) -> f32 {
        let dead_zone = self.joy_axis_dead_zone;
        if value.abs() < dead_zone {
            0.0
        } else {
            value.signum() * ((value.abs() - dead_zone) / (1.0 - dead_zone))
        }
    }
}
