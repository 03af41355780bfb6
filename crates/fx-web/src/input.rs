use glam::Vec2;
use web_sys as web;

/// Map a client-space point into normalized device coordinates of a
/// rectangle (x right, y up, both in `[-1, 1]` inside the rectangle).
#[inline]
pub fn ndc_in_rect(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Option<Vec2> {
    if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = ((client_x - left) / width) * 2.0 - 1.0;
    let y = -((client_y - top) / height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

// ---------------- Event helpers ----------------
#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn mouse_ndc(ev: &web::MouseEvent, element: &web::Element) -> Option<Vec2> {
    let rect = element.get_bounding_client_rect();
    ndc_in_rect(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Client position of the first active touch.
#[inline]
pub fn first_touch(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

#[inline]
pub fn active_touches(ev: &web::TouchEvent) -> u32 {
    ev.touches().length()
}

/// CSS pixel length, e.g. `12.5px`.
#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}
