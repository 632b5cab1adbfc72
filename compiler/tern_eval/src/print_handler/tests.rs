#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_captures_lines_in_order() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.println("world");
    assert_eq!(handler.output(), "hello\nworld\n");
}

#[test]
fn take_output_empties_the_buffer() {
    let handler = buffer_handler();
    handler.println("once");
    assert_eq!(handler.take_output(), "once\n");
    assert_eq!(handler.output(), "");
}

#[test]
fn silent_handler_keeps_nothing() {
    let handler = silent_handler();
    handler.println("dropped");
    assert_eq!(handler.output(), "");
    assert_eq!(handler.take_output(), "");
}

#[test]
fn buffer_is_shared_across_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.println("a");
        }
    });
    for _ in 0..50 {
        handler.println("b");
    }
    worker.join().unwrap();
    assert_eq!(handler.output().lines().count(), 100);
}
