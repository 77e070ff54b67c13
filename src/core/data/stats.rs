use std::{iter::Sum, ops::AddAssign};

use serde::Serialize;

/// Per-file counters collected while walking one AST.
///
/// Files never share a `ScanStats`; the caller sums them after each file completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    /// Translation calls whose key is not a plain literal.
    pub dynamic_keys: usize,
    /// Translator factories called with a non-literal namespace.
    pub dynamic_namespaces: usize,
    /// Translator-shaped calls that could not be bound.
    pub unbound_translator_calls: usize,
    /// Calls through translators created without a namespace.
    pub root_scoped_calls: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.dynamic_keys += rhs.dynamic_keys;
        self.dynamic_namespaces += rhs.dynamic_namespaces;
        self.unbound_translator_calls += rhs.unbound_translator_calls;
        self.root_scoped_calls += rhs.root_scoped_calls;
    }
}

impl Sum for ScanStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assign() {
        let mut a = ScanStats {
            dynamic_keys: 1,
            dynamic_namespaces: 2,
            unbound_translator_calls: 3,
            root_scoped_calls: 4,
        };
        a += ScanStats {
            dynamic_keys: 10,
            ..Default::default()
        };
        assert_eq!(a.dynamic_keys, 11);
        assert_eq!(a.dynamic_namespaces, 2);
        assert_eq!(a.root_scoped_calls, 4);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let stats = [
            ScanStats {
                dynamic_keys: 1,
                ..Default::default()
            },
            ScanStats {
                unbound_translator_calls: 2,
                ..Default::default()
            },
        ];
        let forward: ScanStats = stats.iter().copied().sum();
        let backward: ScanStats = stats.iter().rev().copied().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward.dynamic_keys, 1);
        assert_eq!(forward.unbound_translator_calls, 2);
    }
}
