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

//! The errors that can occur while a linkage tree is building. All of them float up from
//! the reserve, the clustering loop itself has no failure path of its own: running out of
//! mergeable pairs is a normal terminal state, not an error.

use reserve::errors::ReserveError;
use std::error::Error;
use std::fmt;

/// Helper type for a call that could go wrong.
pub type DendroResult<T> = Result<T, DendroError>;

/// Error type for dendro. A wrapper around `ReserveError`, as the reserve is where the
/// addressing and storage, and so the failures, live.
#[derive(Debug)]
pub enum DendroError {
    /// Ranking, binding or reading a cluster slot failed
    ReserveError(ReserveError),
}

impl fmt::Display for DendroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DendroError::ReserveError(ref e) => write!(f, "{}", e),
        }
    }
}

#[allow(deprecated)]
impl Error for DendroError {
    fn description(&self) -> &str {
        match *self {
            DendroError::ReserveError(ref e) => e.description(),
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        match *self {
            DendroError::ReserveError(ref e) => Some(e),
        }
    }
}

impl From<ReserveError> for DendroError {
    fn from(err: ReserveError) -> Self {
        DendroError::ReserveError(err)
    }
}
