pub struct Sharding {
    hasher: Sdbm,
    distribution: Distribute,
    num: usize,
}

mod error;
pub use error::*;

mod shard;
pub use shard::Shard;

pub mod distribution;
pub use distribution::{
    distribute_modulo, distribute_ring, Distribute, Distribution, DEFAULT_RING_SIZE,
};

mod cfg;
pub use cfg::{Basic, ShardingCfg};

pub use ds::{ChainedHashTable, Key, Upsert};

use hash::{Hash, Sdbm};
use std::collections::HashMap;

impl Sharding {
    /// distribution: modula | ring | ring-<size>
    pub fn from(distribution: &str, names: &[String]) -> Result<Self> {
        let num = names.len();
        let d = Distribute::from(distribution, num)?;
        Ok(Self {
            hasher: Sdbm,
            distribution: d,
            num,
        })
    }
    #[inline]
    pub fn distribution(&self) -> &Distribute {
        &self.distribution
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.num
    }
    #[inline(always)]
    pub fn sharding(&self, key: &Key) -> usize {
        let hash = self.hasher.hash(&key.encode());
        let idx = self.distribution.index(hash);
        debug_assert!(idx < self.num);
        idx
    }
    // key: sharding idx
    // value: 是keys idx列表
    #[inline]
    pub fn shardings(&self, keys: &[Key]) -> HashMap<usize, Vec<usize>> {
        let mut shards: HashMap<usize, Vec<usize>> = HashMap::with_capacity(self.num);
        for (ki, key) in keys.iter().enumerate() {
            let idx = self.sharding(key);
            shards.entry(idx).or_default().push(ki);
        }
        shards
    }
    /// 按当前的distribution把src中的所有entry分发到shards中。shards数量必须与构建时一致。
    pub fn distribute<V: Clone>(
        &self,
        src: &ChainedHashTable<V>,
        shards: &mut [Shard<V>],
    ) -> Result<()> {
        if shards.is_empty() {
            return Err(Error::NoServers);
        }
        if shards.len() != self.num {
            return Err(Error::ShardMismatch {
                expected: self.num,
                actual: shards.len(),
            });
        }
        distribution::fan_out(src, shards, &self.distribution)
    }
}
