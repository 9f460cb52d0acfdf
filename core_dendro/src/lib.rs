//! Trait to bitpack a u64 with both the bucket id and the in-bucket offset of a reserved slot.
//! We store the bucket id in the top 8 bits, so we can handle combination sizes in [1, 255].
//! The offset is stored in the rest, so we can handle 2^56, or about 7.2e16 slots per bucket.
use serde::{Deserialize, Serialize};
use std::convert::From;
use std::fmt;

const BMASK_U64: u64 = 0b1111111100000000000000000000000000000000000000000000000000000000;
const OMASK_U64: u64 = 0b0000000011111111111111111111111111111111111111111111111111111111;

/// The bitpacked type. Ordering is derived from the raw u64, so addresses sort
/// by bucket first and then by offset, which is exactly storage order.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, std::hash::Hash, PartialOrd, Ord)]
pub struct SlotAddress {
    sa: u64,
}

impl From<(u8, usize)> for SlotAddress {
    fn from(a: (u8, usize)) -> SlotAddress {
        assert!(a.0 != 0, "bucket 0 does not address a slot");
        assert!(a.1.leading_zeros() >= 8, "{:#066b}", a.1);
        let sa = (a.0 as u64) << 56 | a.1 as u64;
        SlotAddress { sa }
    }
}

impl From<SlotAddress> for (u8, usize) {
    fn from(a: SlotAddress) -> (u8, usize) {
        a.unpack()
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.bucket(), self.offset())
    }
}

impl fmt::Debug for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SlotAddress")
            .field("bucket", &self.bucket())
            .field("offset", &self.offset())
            .finish()
    }
}

impl fmt::Binary for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#066b}", self.sa)
    }
}

impl SlotAddress {
    /// The underlying u64
    pub fn raw(&self) -> u64 {
        self.sa
    }
    /// Converts a u64 into a slot address. The u64s with zeroed bucket bits don't
    /// correspond to any slot, those yield `None`.
    #[inline]
    pub fn from_u64(sa: u64) -> Option<SlotAddress> {
        if sa & BMASK_U64 == 0 {
            None
        } else {
            Some(SlotAddress { sa })
        }
    }
    /// Borrowed unpack into the pair
    pub fn unpack(&self) -> (u8, usize) {
        (self.bucket(), self.offset())
    }
    /// The bucket id of the address, this is the combination size the slot belongs to
    #[inline]
    pub fn bucket(&self) -> u8 {
        ((self.sa & BMASK_U64) >> 56) as u8
    }
    /// The in-bucket offset of the address
    #[inline]
    pub fn offset(&self) -> usize {
        (self.sa & OMASK_U64) as usize
    }
}

/// Helper trait that cleans up code.
pub trait AddressesToVec {
    fn to_buckets(&self) -> Vec<u8>;
    fn to_offsets(&self) -> Vec<usize>;
}

impl AddressesToVec for [SlotAddress] {
    fn to_buckets(&self) -> Vec<u8> {
        self.iter().map(|sa| sa.bucket()).collect()
    }
    fn to_offsets(&self) -> Vec<usize> {
        self.iter().map(|sa| sa.offset()).collect()
    }
}

pub trait TuplesToAddresses {
    fn to_addresses(&self) -> Vec<SlotAddress>;
}

impl TuplesToAddresses for [(u8, usize)] {
    fn to_addresses(&self) -> Vec<SlotAddress> {
        self.iter().map(|t| (*t).into()).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn reconstruction() {
        let bucket = 3;
        let offset = 12345;
        let sa = SlotAddress::from((bucket, offset));
        println!("{:#066b}", sa);
        assert_eq!(bucket, sa.bucket());
        assert_eq!(offset, sa.offset());
    }

    #[test]
    fn reconstruction_minimum_bucket_min_offset() {
        let bucket = 1;
        let offset = 0;
        let sa = SlotAddress::from((bucket, offset));
        println!("{:#066b}", sa);
        assert_eq!(sa.sa, 1u64 << 56);
        assert_eq!(bucket, sa.bucket());
        assert_eq!(offset, sa.offset());
    }

    #[test]
    fn reconstruction_maximum_bucket_max_offset() {
        let bucket = 255;
        let offset = (1usize << 56) - 1;
        let sa = SlotAddress::from((bucket, offset));
        println!("{:#066b}", sa);
        assert_eq!(
            0b1111111111111111111111111111111111111111111111111111111111111111, sa.sa,
            "{:b}",
            sa
        );
        assert_eq!(bucket, sa.bucket());
        assert_eq!(offset, sa.offset());
    }

    #[test]
    fn reconstruction_array() {
        for offset in 1234..12345 {
            for bucket in 1..32 {
                let sa = SlotAddress::from((bucket, offset));
                assert_eq!(bucket, sa.bucket());
                assert_eq!(offset, sa.offset());
            }
        }
    }

    #[test]
    fn zeroed_bucket_is_invalid() {
        assert!(SlotAddress::from_u64(0).is_none());
        assert!(SlotAddress::from_u64((1u64 << 56) - 1).is_none());
        let sa = SlotAddress::from_u64(1u64 << 56).unwrap();
        assert_eq!(1, sa.bucket());
        assert_eq!(0, sa.offset());
    }

    #[test]
    #[should_panic]
    fn zeroed_bucket_does_not_pack() {
        let _sa = SlotAddress::from((0, 17));
    }

    #[test]
    fn sorts_in_storage_order() {
        let a = SlotAddress::from((1, 100));
        let b = SlotAddress::from((2, 0));
        let c = SlotAddress::from((2, 1));
        assert!(a < b);
        assert!(b < c);
    }
}
