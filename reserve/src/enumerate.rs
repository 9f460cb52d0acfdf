/*
* Licensed to Elasticsearch B.V. under one or more contributor
* license agreements. See the NOTICE file distributed with
* this work for additional information regarding copyright
* ownership. Elasticsearch B.V. licenses this file to you under
* the Apache License, Version 2.0 (the "License"); you may
* not use this file except in compliance with the License.
* You may obtain a copy of the License at
*
*  http://www.apache.org/licenses/LICENSE-2.0
*
* Unless required by applicable law or agreed to in writing,
* software distributed under the License is distributed on an
* "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
* KIND, either express or implied.  See the License for the
* specific language governing permissions and limitations
* under the License.
*/

//! Lazy enumeration of all ascending k-subsets of `{0..n-1}` in lexicographic order,
//! the same order the reserve ranks them in. Handy for bulk traversal and for checking
//! the rank arithmetic against plain counting.

use crate::reservable::IdSet;

/// An iterator over every size-`k` combination of `{0..n-1}`, lexicographically.
/// `k > n` enumerates nothing, and so does `k = 0` (an empty id-set never binds a slot).
/// Clone it to restart from the beginning.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: u8,
    k: u8,
    current: IdSet,
    exhausted: bool,
}

impl Combinations {
    /// Positions the iterator at the first combination, `{0, 1, .., k-1}`.
    pub fn new(n: u8, k: u8) -> Combinations {
        let exhausted = k == 0 || k > n;
        let current = if exhausted {
            IdSet::new()
        } else {
            (0..k).collect()
        };
        Combinations {
            n,
            k,
            current,
            exhausted,
        }
    }
}

impl Iterator for Combinations {
    type Item = IdSet;

    fn next(&mut self) -> Option<IdSet> {
        if self.exhausted {
            return None;
        }
        let item = self.current.clone();
        // odometer step: bump the rightmost id that still has headroom, reset the tail
        let k = self.k as usize;
        let mut pos = k;
        loop {
            if pos == 0 {
                self.exhausted = true;
                break;
            }
            pos -= 1;
            let ceiling = self.n - (self.k - pos as u8);
            if self.current[pos] < ceiling {
                self.current[pos] += 1;
                for p in pos + 1..k {
                    self.current[p] = self.current[p - 1] + 1;
                }
                break;
            }
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binomial::choose;

    #[test]
    fn counts_match_the_binomial() {
        for n in 1..=12u8 {
            for k in 1..=n {
                assert_eq!(
                    Combinations::new(n, k).count(),
                    choose(n, k).unwrap(),
                    "({}, {})",
                    n,
                    k
                );
            }
        }
    }

    #[test]
    fn lexicographic_and_ascending() {
        let mut previous: Option<IdSet> = None;
        for combo in Combinations::new(9, 4) {
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            if let Some(p) = previous {
                assert!(p.as_slice() < combo.as_slice());
            }
            previous = Some(combo);
        }
    }

    #[test]
    fn first_and_last() {
        let mut iter = Combinations::new(5, 3);
        assert_eq!(iter.next().unwrap().as_slice(), &[0, 1, 2]);
        assert_eq!(iter.last().unwrap().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(Combinations::new(5, 6).count(), 0);
        assert_eq!(Combinations::new(5, 0).count(), 0);
        assert_eq!(Combinations::new(5, 5).count(), 1);
        assert_eq!(Combinations::new(1, 1).next().unwrap().as_slice(), &[0]);
    }
}
