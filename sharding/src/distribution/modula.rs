use super::Distribution;
use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct Modula {
    len: usize,
}

impl Modula {
    pub fn from(shard_num: usize) -> Result<Self> {
        if shard_num == 0 {
            return Err(Error::NoServers);
        }
        Ok(Self { len: shard_num })
    }
}

impl Distribution for Modula {
    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash % self.len as u64) as usize
    }
    #[inline]
    fn shards(&self) -> usize {
        self.len
    }
}
