#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("table is empty")]
    EmptyTable,
    // 正常情况下不会出现，出现说明bucket不变式被破坏
    #[error("bucket {idx} does not exist, buckets:{buckets}")]
    BucketMissing { idx: usize, buckets: usize },
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
