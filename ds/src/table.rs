use crate::{Error, Result};
use hash::Key;

/// 插入重复key时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Upsert {
    /// 用新值覆盖旧值
    #[default]
    Overwrite,
    /// 保留旧值，忽略新值
    Keep,
}

impl Upsert {
    pub fn from(policy: &str) -> Self {
        match policy.to_ascii_lowercase().as_str() {
            "overwrite" | "" => Self::Overwrite,
            "keep" => Self::Keep,
            _ => {
                log::warn!("found unknown upsert policy:{}, use overwrite instead", policy);
                Self::Overwrite
            }
        }
    }
}

type Bucket<V> = Vec<(Key, V)>;

/// 拉链法hash表。bucket数量按0 -> 1 -> 2 -> 4 ...增长，从不收缩。
///
/// 插入前如果`count == 0`或`count > 3 * buckets / 4`，先把bucket数量翻倍并rehash全部entry，
/// 因此单次insert最坏是O(n)。
#[derive(Debug, Clone)]
pub struct ChainedHashTable<V> {
    buckets: Vec<Bucket<V>>,
    count: usize,
    policy: Upsert,
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedHashTable<V> {
    pub fn new() -> Self {
        Self::with_policy(Upsert::default())
    }
    pub fn with_policy(policy: Upsert) -> Self {
        Self {
            buckets: Vec::new(),
            count: 0,
            policy,
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    // bucket数量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    #[inline]
    pub fn policy(&self) -> Upsert {
        self.policy
    }

    pub fn insert<K: Into<Key>>(&mut self, key: K, value: V) -> Result<()> {
        let key = key.into();
        if self.count == 0 || self.count > 3 * self.buckets.len() / 4 {
            self.resize();
        }
        if self.buckets.is_empty() {
            return Err(Error::EmptyTable);
        }

        let idx = index(&key, self.buckets.len());
        let bucket = &mut self.buckets[idx];
        match bucket.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                if self.policy == Upsert::Overwrite {
                    entry.1 = value;
                }
            }
            None => {
                bucket.push((key, value));
                self.count += 1;
            }
        }
        Ok(())
    }

    pub fn get<K: Into<Key>>(&self, key: K) -> Result<&V> {
        let key = key.into();
        let idx = self.bucket(&key)?;
        self.buckets[idx]
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Result<&mut V> {
        let key = key.into();
        let idx = self.bucket(&key)?;
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    #[inline]
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.get(key).is_ok()
    }

    // swap remove，bucket内剩余entry的顺序不保留
    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Result<V> {
        let key = key.into();
        let idx = self.bucket(&key)?;
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or(Error::KeyNotFound)?;
        let (_, value) = bucket.swap_remove(pos);
        self.count -= 1;
        Ok(value)
    }

    /// key所在的bucket下标。表中没有entry时返回`EmptyTable`。
    pub fn bucket(&self, key: &Key) -> Result<usize> {
        if self.count == 0 {
            return Err(Error::EmptyTable);
        }
        let buckets = self.buckets.len();
        let idx = index(key, buckets);
        if idx >= buckets {
            return Err(Error::BucketMissing { idx, buckets });
        }
        Ok(idx)
    }

    /// 按bucket顺序、bucket内顺序遍历，不是插入顺序。
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.buckets.iter().flatten(),
        }
    }

    fn resize(&mut self) {
        let cap = match self.buckets.len() {
            0 => 1,
            n => n * 2,
        };
        let mut buckets: Vec<Bucket<V>> = (0..cap).map(|_| Vec::new()).collect();
        for (k, v) in std::mem::take(&mut self.buckets).into_iter().flatten() {
            buckets[index(&k, cap)].push((k, v));
        }
        log::debug!("table resized: {} entries, buckets {}", self.count, cap);
        self.buckets = buckets;
    }
}

#[inline(always)]
fn index(key: &Key, buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    (hash::hash(key) % buckets as u64) as usize
}

pub struct Iter<'a, V> {
    inner: std::iter::Flatten<std::slice::Iter<'a, Bucket<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashTable<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
