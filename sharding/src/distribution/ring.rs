use super::Distribution;
use crate::{Error, Result};
use std::ops::Range;

// 把[0, ring)按顺序切成shards段左闭右开的弧，每段宽度arc = ring / shards。
// 比如ring=360，3个shard：[0,120) [120,240) [240,360)。
// 不能整除时余数归最后一个shard，比如ring=10，3个shard：[0,3) [3,6) [6,10)。
#[derive(Clone, Debug)]
pub struct Ring {
    ring: u64,
    arc: u64,
    shards: usize,
}

impl Ring {
    pub fn from(ring: u64, shards: usize) -> Result<Self> {
        if shards == 0 {
            return Err(Error::NoServers);
        }
        if ring < shards as u64 {
            return Err(Error::InvalidRing { ring, shards });
        }
        Ok(Self {
            ring,
            arc: ring / shards as u64,
            shards,
        })
    }
    #[inline]
    pub fn size(&self) -> u64 {
        self.ring
    }
    // hash在环上的位置，[0, ring)
    #[inline]
    pub fn position(&self, hash: u64) -> u64 {
        hash % self.ring
    }
    #[inline]
    pub fn owner(&self, position: u64) -> usize {
        debug_assert!(position < self.ring);
        ((position / self.arc) as usize).min(self.shards - 1)
    }
    /// 第idx个shard负责的区间，idx越界时返回None
    pub fn arc(&self, idx: usize) -> Option<Range<u64>> {
        if idx >= self.shards {
            return None;
        }
        let start = idx as u64 * self.arc;
        let end = if idx + 1 == self.shards {
            self.ring
        } else {
            start + self.arc
        };
        Some(start..end)
    }
}

impl Distribution for Ring {
    #[inline]
    fn index(&self, hash: u64) -> usize {
        self.owner(self.position(hash))
    }
    #[inline]
    fn shards(&self) -> usize {
        self.shards
    }
}
