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
//! # Combinatorial Reserve
//! One contiguous allocation holding a slot for every combination of `{0..n-1}` up to a chosen
//! size, addressed in O(k) by a closed form rank over the combinatorial number system. No hashing,
//! no search. The buffer is partitioned into buckets, one per combination size, and a slot is
//! located by the pair of its bucket and its lexicographic rank within that bucket.
//!
//! Slots are lazily bound: the first time an id-set is reserved the slot records the set and runs
//! its one-time initializer, after that the slot is plain read/write storage.

#![allow(dead_code)]
#![warn(missing_docs)]

mod binomial;
pub use binomial::choose;

pub mod errors;
pub use errors::{ReserveError, ReserveResult};

mod reservable;
pub use reservable::{IdSet, Reservable};

mod memory_reserve;
pub use memory_reserve::CombinatorialReserve;

pub mod enumerate;
pub use enumerate::Combinations;

pub use core_dendro::SlotAddress;
