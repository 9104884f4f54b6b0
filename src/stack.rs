//! Stack growth for recursive evaluation.
//!
//! Operator chains nest one tree node per operator, so a single long line can
//! recurse far deeper than the main thread's stack allows. Recursive entry
//! points wrap themselves in [`ensure_sufficient_stack`], which moves onto a
//! freshly allocated segment when the current one runs low.

/// Space that must remain before recursing further (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; `f` runs directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
