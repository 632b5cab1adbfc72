//! Stack growth for deeply recursive parsing and evaluation.
//!
//! Both the parser and the evaluator recurse once per nested expression, and
//! user functions recurse once per call. Wrapping those recursion points in
//! [`ensure_sufficient_stack`] moves the limit from the native thread stack
//! to the evaluator's configured call depth.
//!
//! On WASM targets the guard is a passthrough.

/// Grow the stack when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
