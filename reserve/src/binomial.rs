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

//! The exact binomial coefficient, shared by bucket sizing and by ranking.

use crate::errors::{ReserveError, ReserveResult};
use std::convert::TryFrom;

/// Computes `n choose k` exactly via the left-to-right multiplicative formula.
///
/// After the `i`th step the accumulator is exactly `C(n - k + i, i)`, so every intermediate
/// value is itself a binomial coefficient bounded by the result and every division is exact.
/// The accumulator is 128 bits wide, wide enough that any result representable as a `usize`
/// is computed without wrapping. Narrowing to `usize` is checked: a coefficient too large for
/// the native integer width is an [`ReserveError::Overflow`], never a silent truncation.
///
/// `k > n` yields 0, the empty sum over an impossible selection.
pub fn choose(n: u8, k: u8) -> ReserveResult<usize> {
    if k > n {
        return Ok(0);
    }
    if k == 0 {
        return Ok(1);
    }
    let delta = (n - k) as u128;
    let mut ans: u128 = delta + 1;
    for i in 2..=(k as u128) {
        ans = ans
            .checked_mul(delta + i)
            .ok_or(ReserveError::Overflow { n, k })?
            / i;
    }
    usize::try_from(ans).map_err(|_| ReserveError::Overflow { n, k })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        assert_eq!(choose(5, 0).unwrap(), 1);
        assert_eq!(choose(5, 5).unwrap(), 1);
        assert_eq!(choose(5, 6).unwrap(), 0);
        assert_eq!(choose(0, 0).unwrap(), 1);
        assert_eq!(choose(255, 1).unwrap(), 255);
    }

    #[test]
    fn known_values() {
        assert_eq!(choose(5, 2).unwrap(), 10);
        assert_eq!(choose(5, 3).unwrap(), 10);
        assert_eq!(choose(8, 3).unwrap(), 56);
        assert_eq!(choose(20, 10).unwrap(), 184756);
        assert_eq!(choose(52, 5).unwrap(), 2598960);
    }

    #[test]
    fn matches_pascals_triangle() {
        // row by row, every coefficient up to n = 64 fits in a u64
        let mut row: Vec<u128> = vec![1];
        for n in 0..=64u8 {
            for (k, &c) in row.iter().enumerate() {
                assert_eq!(choose(n, k as u8).unwrap() as u128, c, "C({}, {})", n, k);
            }
            let mut next = vec![1u128; row.len() + 1];
            for k in 1..row.len() {
                next[k] = row[k - 1] + row[k];
            }
            row = next;
        }
    }

    #[test]
    fn symmetry() {
        for n in 0..=60u8 {
            for k in 0..=n {
                assert_eq!(choose(n, k).unwrap(), choose(n, n - k).unwrap());
            }
        }
    }

    #[test]
    fn overflow_is_reported() {
        match choose(255, 127) {
            Err(ReserveError::Overflow { n: 255, k: 127 }) => {}
            other => panic!("expected overflow, got {:?}", other),
        }
        assert!(choose(70, 35).is_err());
    }
}
