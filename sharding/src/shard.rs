use ds::{ChainedHashTable, Upsert};

/// 一个后端server的本地存储。table为None时即nil server，分发时会返回`Error::NilServer`。
#[derive(Debug, Clone)]
pub struct Shard<V> {
    name: String,
    table: Option<ChainedHashTable<V>>,
}

// 零值是nil server
impl<V> Default for Shard<V> {
    fn default() -> Self {
        Self::nil(String::new())
    }
}

impl<V> Shard<V> {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::with_policy(name, Upsert::default())
    }
    pub fn with_policy<N: Into<String>>(name: N, policy: Upsert) -> Self {
        Self {
            name: name.into(),
            table: Some(ChainedHashTable::with_policy(policy)),
        }
    }
    pub fn nil<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            table: None,
        }
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.table.is_none()
    }
    #[inline]
    pub fn table(&self) -> Option<&ChainedHashTable<V>> {
        self.table.as_ref()
    }
    #[inline]
    pub fn table_mut(&mut self) -> Option<&mut ChainedHashTable<V>> {
        self.table.as_mut()
    }
    // nil server返回0
    #[inline]
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, |t| t.len())
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
