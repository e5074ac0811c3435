//! Stack growth for recursive grammar rules.
//!
//! Pointer chains (`****T`) and nested scopes recurse once per level. Each
//! recursive step runs inside [`ensure_sufficient_stack`], which moves to a
//! freshly allocated stack segment when the current one runs low.

/// Grow when less than this much stack remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// wasm32 manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }
}
