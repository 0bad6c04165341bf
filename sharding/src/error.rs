#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no servers available for distribution")]
    NoServers,
    // 取模后不可能越界，保留作为不变式检查
    #[error("hash index {idx} overflows the amount of servers {shards}")]
    IndexOverflow { idx: usize, shards: usize },
    #[error("server at index {0} is nil")]
    NilServer(usize),
    #[error("ring size {ring} is too small for {shards} servers")]
    InvalidRing { ring: u64, shards: usize },
    #[error("expect {expected} servers, found {actual}")]
    ShardMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Table(#[from] ds::Error),
    #[error("parse cfg error:{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
