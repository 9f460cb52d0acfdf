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

//! The errors that can occur when a reserve is sized, ranked or accessed.
//! All of them are synchronous and surface immediately to the caller, nothing is retried.
use std::error::Error;
use std::fmt;

///
pub type ReserveResult<T> = Result<T, ReserveError>;

/// Error type for the combinatorial reserve
#[derive(Debug)]
pub enum ReserveError {
    /// A malformed id-set: empty, longer than the largest stored bucket, not strictly
    /// ascending, or containing an id outside `[0, n)`. These are caller bugs and are
    /// validated eagerly on every ranking entry point.
    InvalidIds {
        /// What was wrong with the id-set
        message: &'static str,
    },
    /// A binomial coefficient, or the total slot count, does not fit in a `usize`.
    /// Never silently wrapped, keep `n` small enough that every bucket size fits.
    Overflow {
        /// The universe size of the offending coefficient
        n: u8,
        /// The combination size of the offending coefficient
        k: u8,
    },
    /// An address outside the valid range of its bucket. A rank and its bucket bound are
    /// computed from the same arithmetic, so seeing this from a reserve-produced address
    /// means an invariant was broken, not a recoverable condition.
    OutOfBounds {
        /// The bucket that was addressed, 0 for flat-index access
        bucket: u8,
        /// The offending offset
        offset: usize,
    },
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &ReserveError::InvalidIds { message } => {
                write!(f, "invalid id-set: {}", message)
            }
            &ReserveError::Overflow { n, k } => {
                write!(f, "{} choose {} does not fit the native integer width", n, k)
            }
            &ReserveError::OutOfBounds { bucket, offset } => {
                write!(f, "offset {} is outside bucket {}", offset, bucket)
            }
        }
    }
}

#[allow(deprecated)]
impl Error for ReserveError {
    fn description(&self) -> &str {
        match self {
            &ReserveError::InvalidIds { .. } => "there was an issue with a supplied id-set",
            &ReserveError::Overflow { .. } => {
                "a binomial coefficient does not fit the native integer width"
            }
            &ReserveError::OutOfBounds { .. } => "an offset was outside its bucket",
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}
