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

pub(crate) mod proximity;

mod builder;
pub use builder::*;

/// The sentinel distance meaning "these two clusters must never be merged".
///
/// A distance function returns this to veto a pairing. The builder also re-checks the
/// recorded minimum pair right before acting on it, so a distance that turns forbidden
/// after it was cached still blocks the merge.
pub const FORBIDDEN: f64 = f64::MAX;
