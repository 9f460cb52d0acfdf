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

#![allow(dead_code)]
//#![deny(warnings)]

//! # Dendro
//! An agglomerative hierarchical clustering over the slots of a combinatorial memory reserve.
//! Every cluster, internal node or leaf, is a combination of the base elements, so every
//! cluster lives at a closed-form address in the reserve and its contents never need a
//! hash-map or a search to find.
//!
//! ## Usage Guide
//! Size a [`CombinatorialReserve`](reserve::CombinatorialReserve) for your `n` base elements
//! with the default limit, pick a payload implementing
//! [`Reservable`](reserve::Reservable) whose `initialize` derives whatever per-cluster state
//! your distance needs, and hand both to [`LinkageTree::new`] together with the distance
//! function. The distance decides the linkage strategy entirely, single, average or complete
//! linkage are all just different payloads and distances to this crate. Return [`FORBIDDEN`]
//! from the distance to veto a pairing, a configuration where everything remaining is
//! forbidden simply ends the tree early.
//!
//! Construction is intentionally single-threaded, every merge depends on the proximity
//! updates of the one before it.

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod errors;
pub use errors::{DendroError, DendroResult};

mod linkage;
pub use linkage::*;

/// The merge stack and every cluster address in it point back into the reserve the tree
/// was built over, the addressing scheme is the bucket and in-bucket offset pair.
pub use core_dendro::*;
