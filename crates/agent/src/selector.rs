//! Template selection
//!
//! GREETING and THANKS pick one of several equivalent texts. The choice goes
//! through `TemplateSelector` so tests can pin it.

use rand::Rng;

/// Picks an index in `0..len`
pub trait TemplateSelector: Send + Sync {
    /// `len` is never zero for the built-in template lists.
    fn select(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn select(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same index, wrapped into range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0 % len
        }
    }
}

/// Pick one item through `selector`
pub(crate) fn pick<'a>(selector: &dyn TemplateSelector, items: &[&'a str]) -> &'a str {
    let index = selector.select(items.len()).min(items.len().saturating_sub(1));
    items.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_selector_stays_in_range() {
        let selector = RandomSelector;
        for _ in 0..200 {
            assert!(selector.select(3) < 3);
        }
        assert_eq!(selector.select(0), 0);
    }

    #[test]
    fn test_fixed_selector_wraps() {
        assert_eq!(FixedSelector(1).select(3), 1);
        assert_eq!(FixedSelector(4).select(3), 1);
        assert_eq!(FixedSelector(2).select(0), 0);
    }

    #[test]
    fn test_pick() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&FixedSelector(2), &items), "c");
        assert_eq!(pick(&FixedSelector(0), &[]), "");
    }
}
