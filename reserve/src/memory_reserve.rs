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

//! # The Reserve
//! One buffer, one bucket per combination size, and the rank arithmetic that ties an id-set
//! to its slot. Bucket `k` holds the `C(n, k)` slots for the size-`k` combinations in
//! lexicographic order, buckets are laid out back to back in increasing `k` and their
//! boundaries never move after construction.

use crate::binomial::choose;
use crate::errors::{ReserveError, ReserveResult};
use crate::reservable::{IdSet, Reservable};
use core_dendro::SlotAddress;
use log::debug;
use rayon::prelude::*;

/// Contiguous storage for every combination of `{0..n-1}` of size `1..=limit`.
///
/// Addressing is a pure function of the id-set, so two distinct id-sets always land on two
/// distinct slots. First-time binding of the *same* id-set from two threads is a data race,
/// partition the id-sets between threads instead (that's what [`populate`] does for a whole
/// bucket). Access to already-bound slots through disjoint addresses is safe to share.
///
/// [`populate`]: CombinatorialReserve::populate
#[derive(Debug)]
pub struct CombinatorialReserve<T: Reservable> {
    n: u8,
    limit: u8,
    /// Global start offset of each bucket, `starts[i]` is where the size-`i+1` bucket begins
    starts: Vec<usize>,
    /// `sizes[i]` is `C(n, i+1)`
    sizes: Vec<usize>,
    combinations: usize,
    data: Vec<T>,
}

impl<T: Reservable> CombinatorialReserve<T> {
    /// A reserve covering every combination size, `limit = n`.
    pub fn new(n: u8) -> ReserveResult<CombinatorialReserve<T>> {
        CombinatorialReserve::with_limit(n, n)
    }

    /// A reserve storing no slots for combinations larger than `limit`. A `limit` above `n`
    /// clamps to `n`, the largest combination the universe admits.
    pub fn with_limit(n: u8, limit: u8) -> ReserveResult<CombinatorialReserve<T>> {
        if n == 0 {
            return Err(ReserveError::InvalidIds {
                message: "the universe needs at least one element",
            });
        }
        if limit == 0 {
            return Err(ReserveError::InvalidIds {
                message: "a reserve needs at least one bucket",
            });
        }
        let limit = limit.min(n);
        let lim = limit as usize;

        let overflow = |k: usize| ReserveError::Overflow { n, k: k as u8 };
        let mut sizes = vec![0usize; lim];
        let mut total: usize = 0;
        if limit == n {
            // the full-set bucket has exactly one slot
            sizes[n as usize - 1] = 1;
            total = 1;
        }
        // C(n, k) = C(n, n - k): evaluate the lower half and mirror it into the upper
        // half whenever the mirrored bucket is stored
        let half = (n as usize - 1) / 2;
        for i in 0..half.min(lim) {
            let c = choose(n, (i + 1) as u8)?;
            sizes[i] = c;
            total = total.checked_add(c).ok_or_else(|| overflow(i + 1))?;
            let j = n as usize - 2 - i;
            if j < lim {
                sizes[j] = c;
                total = total.checked_add(c).ok_or_else(|| overflow(j + 1))?;
            }
        }
        // even n leaves the exact-middle size unmirrored
        if n % 2 == 0 && half < lim {
            let c = choose(n, (half + 1) as u8)?;
            sizes[half] = c;
            total = total.checked_add(c).ok_or_else(|| overflow(half + 1))?;
        }

        let mut starts = vec![0usize; lim];
        let mut u = 0;
        for i in 0..lim {
            starts[i] = u;
            u += sizes[i];
        }

        let data = (0..total).map(|_| T::default()).collect();
        debug!(
            "reserved {} slots across {} buckets for a universe of {}",
            total, lim, n
        );
        Ok(CombinatorialReserve {
            n,
            limit,
            starts,
            sizes,
            combinations: total,
            data,
        })
    }

    /// The number of elements available to combine
    pub fn n(&self) -> u8 {
        self.n
    }

    /// The largest combination size the reserve stores
    pub fn limit(&self) -> u8 {
        self.limit
    }

    /// The number of slots stored in all the buckets
    pub fn combinations(&self) -> usize {
        self.combinations
    }

    fn validate(&self, ids: &[u8]) -> ReserveResult<()> {
        if ids.is_empty() {
            return Err(ReserveError::InvalidIds {
                message: "an id-set needs at least one id",
            });
        }
        if ids.len() > self.limit as usize {
            return Err(ReserveError::InvalidIds {
                message: "the id-set is longer than the largest stored combination size",
            });
        }
        if ids[ids.len() - 1] >= self.n {
            return Err(ReserveError::InvalidIds {
                message: "an id is outside the universe",
            });
        }
        for w in ids.windows(2) {
            if w[0] >= w[1] {
                return Err(ReserveError::InvalidIds {
                    message: "ids must be strictly ascending and duplicate-free",
                });
            }
        }
        Ok(())
    }

    /// The address of the slot an id-set maps to, the combinatorial number system rank.
    ///
    /// The offset is the 0-based position of the id-set in the lexicographic order of all
    /// same-size subsets of `{0..n-1}`. For `n = 5, k = 3` this runs `{0,1,2} -> 0` through
    /// `{2,3,4} -> 9`. Pure arithmetic, the slot itself is untouched.
    pub fn rank(&self, ids: &[u8]) -> ReserveResult<SlotAddress> {
        self.validate(ids)?;
        let k = ids.len() as u8;
        let mut r = choose(self.n, k)?;
        for (i, &id) in ids.iter().enumerate() {
            r -= choose(self.n - id - 1, k - i as u8)?;
        }
        r -= 1;
        Ok(SlotAddress::from((k, r)))
    }

    /// The id-set a slot address maps back to, the inverse of [`rank`](CombinatorialReserve::rank).
    pub fn unrank(&self, address: SlotAddress) -> ReserveResult<IdSet> {
        let (k, offset) = address.unpack();
        let size = self.bucket_size(k)?;
        if offset >= size {
            return Err(ReserveError::OutOfBounds { bucket: k, offset });
        }
        unrank_ids(self.n, k, offset)
    }

    /// Ranks the id-set and binds the slot if this is the first time the id-set is seen:
    /// the ids are written into the slot and its one-time initializer runs before the
    /// address is returned. Idempotent, a second call with the same id-set is a pure lookup.
    pub fn reserve(&mut self, ids: &[u8]) -> ReserveResult<SlotAddress> {
        let address = self.rank(ids)?;
        let global = self.global_offset(address)?;
        let slot = &mut self.data[global];
        if !slot.is_bound() {
            slot.ids_mut().extend_from_slice(ids);
            slot.initialize();
        }
        Ok(address)
    }

    /// A reference to the slot at an address
    pub fn get(&self, address: SlotAddress) -> ReserveResult<&T> {
        let global = self.global_offset(address)?;
        Ok(&self.data[global])
    }

    /// A mutable reference to the slot at an address
    pub fn get_mut(&mut self, address: SlotAddress) -> ReserveResult<&mut T> {
        let global = self.global_offset(address)?;
        Ok(&mut self.data[global])
    }

    /// The flat index of an address into the single backing buffer. Derived from the
    /// precomputed bucket starts, bucket-relative addressing stays the canonical form.
    pub fn global_offset(&self, address: SlotAddress) -> ReserveResult<usize> {
        let (k, offset) = address.unpack();
        if offset >= self.bucket_size(k)? {
            return Err(ReserveError::OutOfBounds { bucket: k, offset });
        }
        Ok(self.starts[k as usize - 1] + offset)
    }

    /// A reference to the slot at a flat index previously obtained from
    /// [`global_offset`](CombinatorialReserve::global_offset)
    pub fn by_offset(&self, global: usize) -> ReserveResult<&T> {
        self.data.get(global).ok_or(ReserveError::OutOfBounds {
            bucket: 0,
            offset: global,
        })
    }

    /// A mutable reference to the slot at a flat index
    pub fn by_offset_mut(&mut self, global: usize) -> ReserveResult<&mut T> {
        self.data.get_mut(global).ok_or(ReserveError::OutOfBounds {
            bucket: 0,
            offset: global,
        })
    }

    /// The slots of bucket `k` in offset order
    pub fn bucket(&self, k: u8) -> ReserveResult<&[T]> {
        let size = self.bucket_size(k)?;
        let start = self.starts[k as usize - 1];
        Ok(&self.data[start..start + size])
    }

    /// The slots of bucket `k` in offset order, mutably
    pub fn bucket_mut(&mut self, k: u8) -> ReserveResult<&mut [T]> {
        let size = self.bucket_size(k)?;
        let start = self.starts[k as usize - 1];
        Ok(&mut self.data[start..start + size])
    }

    fn bucket_size(&self, k: u8) -> ReserveResult<usize> {
        if k == 0 || k > self.limit {
            return Err(ReserveError::OutOfBounds {
                bucket: k,
                offset: 0,
            });
        }
        Ok(self.sizes[k as usize - 1])
    }
}

impl<T: Reservable + Send> CombinatorialReserve<T> {
    /// Binds and initializes every slot of bucket `k` in parallel. Each offset unranks to
    /// its own id-set, so the writes are disjoint and the work partitions cleanly across
    /// threads. Slots that are already bound are left alone.
    pub fn populate(&mut self, k: u8) -> ReserveResult<()> {
        let n = self.n;
        let size = self.bucket_size(k)?;
        let start = self.starts[k as usize - 1];
        debug!("populating bucket {}, {} slots", k, size);
        self.data[start..start + size]
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(offset, slot)| {
                if !slot.is_bound() {
                    let ids = unrank_ids(n, k, offset)?;
                    *slot.ids_mut() = ids;
                    slot.initialize();
                }
                Ok(())
            })
    }
}

/// Lexicographic unranking: walk the candidate ids upward, skipping over the block of
/// combinations each candidate would lead, until the offset falls inside a block.
fn unrank_ids(n: u8, k: u8, offset: usize) -> ReserveResult<IdSet> {
    let mut ids = IdSet::new();
    let mut next: u8 = 0;
    let mut r = offset;
    for pos in 0..k {
        let remaining = k - pos;
        loop {
            let led = choose(n - next - 1, remaining - 1)?;
            if r < led {
                break;
            }
            r -= led;
            next += 1;
        }
        ids.push(next);
        next += 1;
    }
    Ok(ids)
}
