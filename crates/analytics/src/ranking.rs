use serde::Serialize;
use std::collections::HashMap;

/// One entry of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K, M> {
    pub key: K,
    pub label: String,
    pub value: M,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub value: u32,
    /// Percentage of the total, `0.0..=100.0`.
    pub share_pct: f64,
}

/// Ranks a tally and keeps the best `n` entries.
///
/// Entries are sorted by value descending. Ties are broken by label
/// ascending, then by key ascending, so the output is the same on every call
/// regardless of hash-map iteration order. Fewer than `n` entries are
/// returned as-is, without padding.
pub fn top_n<K, M, L>(tally: HashMap<K, M>, n: usize, label: L) -> Vec<Ranked<K, M>>
where
    K: Ord,
    M: Ord,
    L: Fn(&K) -> String,
{
    let mut ranked: Vec<Ranked<K, M>> = tally
        .into_iter()
        .map(|(key, value)| Ranked {
            label: label(&key),
            key,
            value,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.key.cmp(&b.key))
    });
    ranked.truncate(n);
    ranked
}

/// Turns a tally into pie slices, ordered like `top_n`.
pub fn shares<K, L>(tally: HashMap<K, u32>, label: L) -> Vec<Share>
where
    K: Ord,
    L: Fn(&K) -> String,
{
    let total: u32 = tally.values().sum();
    if total == 0 {
        return Vec::new();
    }

    top_n(tally, usize::MAX, label)
        .into_iter()
        .map(|entry| Share {
            share_pct: f64::from(entry.value) * 100.0 / f64::from(total),
            label: entry.label,
            value: entry.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(entries: &[(u32, &str, u32)]) -> HashMap<u32, u32> {
        entries.iter().map(|&(k, _, v)| (k, v)).collect()
    }

    fn labels(entries: &'static [(u32, &'static str, u32)]) -> impl Fn(&u32) -> String {
        move |k| {
            entries
                .iter()
                .find(|(id, _, _)| id == k)
                .map(|(_, name, _)| name.to_string())
                .unwrap_or_default()
        }
    }

    const DRIVERS: &[(u32, &str, u32)] = &[
        (1, "Lewis Hamilton", 103),
        (30, "Michael Schumacher", 91),
        (830, "Max Verstappen", 63),
        (102, "Ayrton Senna", 41),
        (117, "Alain Prost", 51),
    ];

    #[test]
    fn test_sorted_descending_and_truncated() {
        let top = top_n(tally(DRIVERS), 3, labels(DRIVERS));
        let names: Vec<_> = top.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, ["Lewis Hamilton", "Michael Schumacher", "Max Verstappen"]);
        assert_eq!(top[0].value, 103);
    }

    #[test]
    fn test_fewer_than_n_returns_all_without_padding() {
        let top = top_n(tally(DRIVERS), 50, labels(DRIVERS));
        assert_eq!(top.len(), DRIVERS.len());
        assert!(top_n(tally(DRIVERS), 0, labels(DRIVERS)).is_empty());
        assert!(top_n(HashMap::<u32, u32>::new(), 10, |k| k.to_string()).is_empty());
    }

    #[test]
    fn test_ties_break_by_label_then_key() {
        const TIED: &[(u32, &str, u32)] = &[
            (3, "Zeta", 5),
            (2, "Alpha", 5),
            (1, "Alpha", 5),
            (4, "Beta", 9),
        ];
        let top = top_n(tally(TIED), 10, labels(TIED));
        let keys: Vec<_> = top.iter().map(|r| r.key).collect();
        // Keys 1 and 2 share a label, so the key decides.
        assert_eq!(keys, [4, 1, 2, 3]);
    }

    #[test]
    fn test_shares_sum_to_one_hundred() {
        let wins: HashMap<&str, u32> = [("British", 3), ("German", 1)].into_iter().collect();
        let slices = shares(wins, |k| k.to_string());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "British");
        assert!((slices[0].share_pct - 75.0).abs() < 1e-9);
        let total: f64 = slices.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(shares(HashMap::<u8, u32>::new(), |k| k.to_string()).is_empty());
    }
}
