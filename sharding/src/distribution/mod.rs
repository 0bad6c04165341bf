mod modula;
mod ring;

pub use modula::Modula;
pub use ring::Ring;

use crate::{Error, Result, Shard};
use ds::ChainedHashTable;
use enum_dispatch::enum_dispatch;

/// ring的默认大小，即[0, 360)
pub const DEFAULT_RING_SIZE: u64 = 360;
const RING_PREFIX: &str = "ring-";

#[enum_dispatch]
pub trait Distribution {
    // 返回值在[0, shards)内
    fn index(&self, hash: u64) -> usize;
    fn shards(&self) -> usize;
}

#[enum_dispatch(Distribution)]
#[derive(Clone, Debug)]
pub enum Distribute {
    Modula(Modula),
    Ring(Ring),
}

impl Distribute {
    pub fn from(distribution: &str, shards: usize) -> Result<Self> {
        if shards == 0 {
            return Err(Error::NoServers);
        }
        let dist = distribution.to_ascii_lowercase();
        match dist.as_str() {
            "modula" | "" => Ok(Self::Modula(Modula::from(shards)?)),
            "ring" => Ok(Self::Ring(Ring::from(DEFAULT_RING_SIZE, shards)?)),
            d if d.starts_with(RING_PREFIX) => {
                let ring = d[RING_PREFIX.len()..].parse::<u64>().unwrap_or_else(|_| {
                    log::warn!("found unknown ring:{}, use {}", distribution, DEFAULT_RING_SIZE);
                    DEFAULT_RING_SIZE
                });
                Ok(Self::Ring(Ring::from(ring, shards)?))
            }
            _ => {
                log::warn!("'{}' is not valid , use modula instead", distribution);
                Ok(Self::Modula(Modula::from(shards)?))
            }
        }
    }
    /// 同一批hash在两种分布下落到不同shard的数量
    pub fn moved<I: IntoIterator<Item = u64>>(&self, other: &Distribute, hashes: I) -> usize {
        hashes
            .into_iter()
            .filter(|h| self.index(*h) != other.index(*h))
            .count()
    }
}

/// naive取模：shard = hash % shards.len()。shard数量变化时几乎所有key都要迁移。
pub fn distribute_modulo<V: Clone>(
    src: &ChainedHashTable<V>,
    shards: &mut [Shard<V>],
) -> Result<()> {
    let modula = Modula::from(shards.len())?;
    fan_out(src, shards, &modula)
}

/// 一致性hash环：把[0, ring_size)等分给各个shard，最后一个shard负责余数部分。
pub fn distribute_ring<V: Clone>(
    src: &ChainedHashTable<V>,
    shards: &mut [Shard<V>],
    ring_size: u64,
) -> Result<()> {
    if shards.is_empty() {
        return Err(Error::NoServers);
    }
    let ring = Ring::from(ring_size, shards.len())?;
    fan_out(src, shards, &ring)
}

// 遇到第一个错误即返回，已经分发的entry不回滚
pub(crate) fn fan_out<V, D>(
    src: &ChainedHashTable<V>,
    shards: &mut [Shard<V>],
    dist: &D,
) -> Result<()>
where
    V: Clone,
    D: Distribution + std::fmt::Debug,
{
    let num = shards.len();
    log::info!("distribute {} entries to {} servers by {:?}", src.len(), num, dist);
    for (key, value) in src {
        let idx = dist.index(hash::hash(key));
        if idx >= num {
            return Err(Error::IndexOverflow { idx, shards: num });
        }
        let table = shards[idx].table_mut().ok_or(Error::NilServer(idx))?;
        table.insert(key, value.clone())?;
        log::trace!("key:{} => server {}", key, idx);
    }
    if log::log_enabled!(log::Level::Debug) {
        let sizes: Vec<usize> = shards.iter().map(|s| s.len()).collect();
        log::debug!("shard sizes after distribute: {:?}", sizes);
    }
    Ok(())
}
