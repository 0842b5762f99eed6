//! Partition counting and exhaustive enumeration

/// `C(n, k)` with checked `u128` arithmetic; `None` on overflow
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) · (n − i) / (i + 1), exact at every step
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}

/// `C(2n, n)`, saturating at `u128::MAX`
pub fn total_partitions(n: usize) -> u128 {
    binomial(2 * n as u64, n as u64).unwrap_or(u128::MAX)
}

/// Size-`k` subsets of `0..n` in lexicographic order
///
/// Each item is sorted ascending. The first item is always `0..k`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            current: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();

        // rightmost position that can still move
        let (n, k) = (self.n, self.k);
        match (0..k).rev().find(|&i| self.current[i] != i + n - k) {
            Some(i) => {
                self.current[i] += 1;
                for j in i + 1..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(item)
    }
}
