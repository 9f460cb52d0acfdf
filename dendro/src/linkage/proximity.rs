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

//! The condensed proximity matrix. One `f64` per unordered pair of matrix rows, packed
//! upper-triangular. Rows are recycled as clusters merge, a merge result takes over the
//! lower of the two rows it frees, so the matrix never grows past its initial `n`.

use super::FORBIDDEN;

#[derive(Debug, Clone)]
pub(crate) struct ProximityMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl ProximityMatrix {
    /// A matrix over `n` rows, all pairs starting out forbidden.
    pub(crate) fn new(n: usize) -> ProximityMatrix {
        ProximityMatrix {
            n,
            cells: vec![FORBIDDEN; n * n.saturating_sub(1) / 2],
        }
    }

    /// The packed index of the unordered row pair `(i, j)`.
    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i != j && i < self.n && j < self.n);
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        i * self.n + j - (i + 1) * (i + 2) / 2
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.index(i, j)]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, distance: f64) {
        let index = self.index(i, j);
        self.cells[index] = distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_is_a_bijection() {
        let n = 7;
        let m = ProximityMatrix::new(n);
        let mut seen = vec![false; n * (n - 1) / 2];
        for i in 0..n {
            for j in i + 1..n {
                let index = m.index(i, j);
                assert!(!seen[index], "({}, {}) collided", i, j);
                seen[index] = true;
                assert_eq!(index, m.index(j, i));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn get_set_round_trip() {
        let mut m = ProximityMatrix::new(4);
        m.set(0, 1, 3.5);
        m.set(3, 2, 0.25);
        assert_approx_eq!(m.get(0, 1), 3.5);
        assert_approx_eq!(m.get(1, 0), 3.5);
        assert_approx_eq!(m.get(2, 3), 0.25);
        assert_eq!(m.get(0, 3), FORBIDDEN);
    }

    #[test]
    fn single_row_has_no_cells() {
        let m = ProximityMatrix::new(1);
        assert!(m.cells.is_empty());
    }
}
