mod key;
pub use key::Key;

mod sdbm;
pub use sdbm::Sdbm;

use std::borrow::Cow;

pub trait Hash {
    fn hash<S: HashKey>(&self, key: &S) -> u64;
}

pub trait HashKey {
    fn len(&self) -> usize;
    fn at(&self, idx: usize) -> u8;
}

impl HashKey for &[u8] {
    #[inline(always)]
    fn len(&self) -> usize {
        (*self).len()
    }
    #[inline(always)]
    fn at(&self, idx: usize) -> u8 {
        self[idx]
    }
}

impl HashKey for Vec<u8> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    #[inline(always)]
    fn at(&self, idx: usize) -> u8 {
        self[idx]
    }
}

impl HashKey for Cow<'_, [u8]> {
    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
    #[inline(always)]
    fn at(&self, idx: usize) -> u8 {
        self[idx]
    }
}

/// table与sharding共用的唯一hash：先对key做规范编码，再计算sdbm。
#[inline]
pub fn hash(key: &Key) -> u64 {
    Sdbm.hash(&key.encode())
}
