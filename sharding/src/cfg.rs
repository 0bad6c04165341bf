use crate::{Error, Result, Shard, Sharding};
use ds::Upsert;
use serde::{Deserialize, Serialize};

// 示例：
// basic:
//   distribution: ring-360
//   duplicate: overwrite
// backends:
//   - 127.0.0.1:11211
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShardingCfg {
    #[serde(default)]
    pub basic: Basic,
    #[serde(default)]
    pub backends: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Basic {
    #[serde(default)]
    pub distribution: String, // eg: modula, ring, ring-720
    #[serde(default)]
    pub duplicate: String, // eg: overwrite, keep
}

impl ShardingCfg {
    pub fn parse(cfg: &str) -> Result<Self> {
        log::debug!("sharding cfg: {}", cfg);
        serde_yaml::from_str::<ShardingCfg>(cfg).map_err(|e| {
            log::warn!("parse sharding cfg failed:{:?}", e);
            Error::Config(format!("{:?}", e))
        })
    }
    #[inline]
    pub fn policy(&self) -> Upsert {
        Upsert::from(&self.basic.duplicate)
    }
    // 每个backend一个空shard，table使用配置的upsert策略
    pub fn shards<V>(&self) -> Vec<Shard<V>> {
        let policy = self.policy();
        self.backends
            .iter()
            .map(|name| Shard::with_policy(name.as_str(), policy))
            .collect()
    }
    pub fn sharding(&self) -> Result<Sharding> {
        Sharding::from(&self.basic.distribution, &self.backends)
    }
}
