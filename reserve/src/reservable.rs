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

//! The behavioral contract every stored element type satisfies.

use smallvec::SmallVec;

/// An ascending, duplicate-free sequence of element ids drawn from `[0, n)`.
/// Sets of up to 16 ids live inline with the slot, larger ones spill to the heap.
pub type IdSet = SmallVec<[u8; 16]>;

/// A type that can live in a [`CombinatorialReserve`](crate::CombinatorialReserve).
///
/// A slot is *bound* once its id-set is non-empty. The reserve binds a slot the first
/// time its id-set is reserved: it writes the ids and then calls [`initialize`]
/// exactly once, before the address is handed to any caller. The binding is permanent,
/// a given id-set always maps to the same slot and the ids never change once set.
///
/// `initialize` is where a payload derives its cluster-level state (an average, a
/// centroid) purely from the ids and whatever reference data the type closes over.
///
/// [`initialize`]: Reservable::initialize
pub trait Reservable: Default {
    /// The defining id-set of the slot. Empty until the slot is bound.
    fn ids(&self) -> &[u8];

    /// The id-set storage, used by the reserve to bind the slot.
    fn ids_mut(&mut self) -> &mut IdSet;

    /// One-shot initialization hook, run by the reserve immediately after the ids are
    /// written. Never called again for the same slot.
    fn initialize(&mut self);

    /// Whether the slot has been bound to an id-set.
    fn is_bound(&self) -> bool {
        !self.ids().is_empty()
    }
}
