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

//! # The Linkage Tree
//! Nearest-neighbor agglomerative clustering with O(n^2) proximity bookkeeping. The builder
//! seeds a singleton cluster per base element, then repeatedly merges the closest pair of
//! active clusters, reserving the merged id-set in the reserve so the new cluster gets a
//! slot and a one-time initialized payload like any other combination.
//!
//! Two terminal states, both valid: one active cluster left (the tree is complete, the
//! merge stack holds `2n - 1` addresses) or no finite pair left (everything remaining is
//! forbidden, the stack is simply shorter).

use super::proximity::ProximityMatrix;
use super::FORBIDDEN;
use crate::errors::DendroResult;
use core_dendro::SlotAddress;
use log::{debug, trace};
use reserve::{CombinatorialReserve, IdSet, Reservable};
use serde::{Deserialize, Serialize};

/// A linkage tree, the merge order of a hierarchical clustering.
///
/// The stack pops root-first: the last merge is the widest cluster, so popping walks the
/// dendrogram from the root down to the singleton leaves. Every entry addresses a slot in
/// the reserve the tree was built over, that slot holds the cluster's id-set and payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkageTree {
    stack: Vec<SlotAddress>,
}

impl LinkageTree {
    /// Builds the tree over the base elements of `reserve`, which must be sized for every
    /// combination size (`limit = n`) so merge results always have a slot to land in.
    ///
    /// `distance` is caller-supplied and symmetric by convention, not enforced. It may
    /// close over mutable state; returning [`FORBIDDEN`] vetoes a pairing, and the
    /// recorded minimum is re-checked right before every merge so a veto still wins over
    /// a stale cached value. Ties on the minimum go to the first pair encountered in
    /// registry order, which is insertion order, so rebuilding over the same input walks
    /// the same merges.
    pub fn new<T, F>(
        reserve: &mut CombinatorialReserve<T>,
        mut distance: F,
    ) -> DendroResult<LinkageTree>
    where
        T: Reservable,
        F: FnMut(&T, &T) -> f64,
    {
        let n = reserve.n() as usize;
        let mut stack: Vec<SlotAddress> = Vec::with_capacity(2 * n - 1);
        // sequence id -> reserve address; 0..n are the base elements, n.. the merge results
        let mut clusters: Vec<SlotAddress> = Vec::with_capacity(2 * n - 1);
        for i in 0..n {
            let address = reserve.reserve(&[i as u8])?;
            stack.push(address);
            clusters.push(address);
        }

        // the active registry, (sequence id, matrix row) in insertion order
        let mut active: Vec<(usize, usize)> = (0..n).map(|i| (i, i)).collect();
        let mut matrix = ProximityMatrix::new(n);
        let mut min = FORBIDDEN;
        let mut min_pair = (0, 0); // positions in the registry
        for a in 0..n {
            for b in (a + 1)..n {
                let d = distance(reserve.get(clusters[a])?, reserve.get(clusters[b])?);
                matrix.set(a, b, d);
                if d < min {
                    min = d;
                    min_pair = (a, b);
                }
            }
        }

        while active.len() > 1 && min != FORBIDDEN {
            // keep the lower matrix row as the first distance argument everywhere, the
            // distance is only symmetric by convention
            let (seq_x, row_x) = active[min_pair.0];
            let (seq_y, row_y) = active[min_pair.1];
            let (seq_x, row_x, seq_y, row_y) = if row_x < row_y {
                (seq_x, row_x, seq_y, row_y)
            } else {
                (seq_y, row_y, seq_x, row_x)
            };
            // the cached minimum gets a final say before the merge is acted on
            let d = distance(reserve.get(clusters[seq_x])?, reserve.get(clusters[seq_y])?);
            if d == FORBIDDEN {
                matrix.set(row_x, row_y, FORBIDDEN);
                trace!(
                    "merge of {} and {} vetoed",
                    clusters[seq_x],
                    clusters[seq_y]
                );
            } else {
                let merged = merged_ids(
                    reserve.get(clusters[seq_x])?.ids(),
                    reserve.get(clusters[seq_y])?.ids(),
                );
                let address = reserve.reserve(&merged)?;
                trace!(
                    "merged {} and {} into {}",
                    clusters[seq_x],
                    clusters[seq_y],
                    address
                );
                stack.push(address);
                let seq_new = clusters.len();
                clusters.push(address);

                // the merge result takes over the lower of the two freed rows
                let row_new = row_x;
                active.retain(|&(seq, _)| seq != seq_x && seq != seq_y);
                for &(seq_p, row_p) in active.iter() {
                    let (first, second) = if row_p < row_new {
                        (clusters[seq_p], clusters[seq_new])
                    } else {
                        (clusters[seq_new], clusters[seq_p])
                    };
                    let d = distance(reserve.get(first)?, reserve.get(second)?);
                    matrix.set(row_new, row_p, d);
                }
                active.push((seq_new, row_new));
                if active.len() <= 1 {
                    break;
                }
            }

            min = FORBIDDEN;
            for a in 0..active.len() {
                for b in (a + 1)..active.len() {
                    let d = matrix.get(active[a].1, active[b].1);
                    if d < min {
                        min = d;
                        min_pair = (a, b);
                    }
                }
            }
        }
        debug!(
            "linkage tree complete, {} of a possible {} clusters",
            stack.len(),
            2 * n - 1
        );
        Ok(LinkageTree { stack })
    }

    /// The merge stack in push order, base elements first, the final merge last.
    pub fn stack(&self) -> &[SlotAddress] {
        &self.stack
    }

    /// The dendrogram root-first: the widest cluster, then every merge in reverse, then
    /// the singletons in reverse seeding order.
    pub fn pop_order(&self) -> impl Iterator<Item = SlotAddress> + '_ {
        self.stack.iter().rev().copied()
    }

    /// The number of clusters the build realized. `2n - 1` for a fully merged tree,
    /// fewer when forbidden distances starved the merge loop.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    ///
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Consumes the tree, keeping only the merge stack.
    pub fn into_stack(self) -> Vec<SlotAddress> {
        self.stack
    }
}

/// Merge of two ascending id sequences, linear in their combined length.
fn merged_ids(cx: &[u8], cy: &[u8]) -> IdSet {
    let mut merged = IdSet::with_capacity(cx.len() + cy.len());
    let (mut i, mut j) = (0, 0);
    while i < cx.len() || j < cy.len() {
        if i < cx.len() && (j >= cy.len() || cx[i] < cy[j]) {
            merged.push(cx[i]);
            i += 1;
        } else {
            merged.push(cy[j]);
            j += 1;
        }
    }
    merged
}
