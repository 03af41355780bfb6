use glam::Vec2;

/// Where the cursor icon should be drawn, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorIcon {
    pub position: Vec2,
    pub visible: bool,
}

/// Tracks the replacement cursor icon. Every handler returns `true` when the
/// icon changed and the element needs restyling.
#[derive(Clone, Debug, Default)]
pub struct CursorFollower {
    icon: CursorIcon,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self) -> CursorIcon {
        self.icon
    }

    pub fn on_mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.update(Some(Vec2::new(x, y)), Some(true))
    }

    pub fn on_mouse_enter(&mut self) -> bool {
        self.update(None, Some(true))
    }

    pub fn on_mouse_leave(&mut self) -> bool {
        self.update(None, Some(false))
    }

    /// `first_touch` is the first active touch point, if any.
    pub fn on_touch_start(&mut self, first_touch: Option<Vec2>) -> bool {
        match first_touch {
            Some(p) => self.update(Some(p), Some(true)),
            None => false,
        }
    }

    pub fn on_touch_move(&mut self, first_touch: Option<Vec2>) -> bool {
        match first_touch {
            Some(p) => self.update(Some(p), None),
            None => false,
        }
    }

    pub fn on_touch_end(&mut self, remaining_touches: u32) -> bool {
        if remaining_touches == 0 {
            self.update(None, Some(false))
        } else {
            false
        }
    }

    fn update(&mut self, position: Option<Vec2>, visible: Option<bool>) -> bool {
        let before = self.icon;
        if let Some(p) = position {
            self.icon.position = p;
        }
        if let Some(v) = visible {
            self.icon.visible = v;
        }
        self.icon != before
    }
}
