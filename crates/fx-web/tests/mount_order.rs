// The effect mounts only run in a browser, so these tests check their source:
// a canvas joins the page only after its GPU context exists, and a failed
// mount removes it again.

const BOOK_SRC: &str = include_str!("../src/book.rs");
const SPARKLES_SRC: &str = include_str!("../src/sparkles.rs");
const DOM_SRC: &str = include_str!("../src/dom.rs");

fn position(src: &str, needle: &str, name: &str) -> usize {
    src.find(needle)
        .unwrap_or_else(|| panic!("{}: `{}` not found", name, needle))
}

fn assert_canvas_attached_after_gpu(src: &str, name: &str) {
    let created = position(src, "dom::create_canvas(", name);
    let gpu = position(src, "GpuContext::new(", name);
    let appended = position(src, "append_child(", name);
    assert!(created < gpu, "{}: canvas created after the GPU context", name);
    assert!(gpu < appended, "{}: canvas appended before the GPU context", name);
    assert_eq!(src.matches("append_child(").count(), 1, "{}", name);
}

fn assert_failed_mount_removes_canvas(src: &str, name: &str) {
    let failed = position(src, "if mounted.is_err()", name);
    let removed = position(src, "canvas.remove()", name);
    assert!(failed < removed, "{}: canvas not removed on failure", name);
}

#[test]
fn book_canvas_is_attached_only_after_gpu_setup() {
    assert_canvas_attached_after_gpu(BOOK_SRC, "book");
    assert_failed_mount_removes_canvas(BOOK_SRC, "book");
}

#[test]
fn sparkle_canvas_is_attached_only_after_gpu_setup() {
    assert_canvas_attached_after_gpu(SPARKLES_SRC, "sparkles");
    assert_failed_mount_removes_canvas(SPARKLES_SRC, "sparkles");
}

#[test]
fn created_canvas_starts_detached() {
    assert!(!DOM_SRC.contains("append_child("));
    assert!(DOM_SRC.contains("pub fn create_canvas("));
}
