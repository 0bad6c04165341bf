// h = c + (h << 6) + (h << 16) - h，等价于 h * 65599 + c，不需要乘法
#[derive(Debug, Clone, Copy, Default)]
pub struct Sdbm;

impl super::Hash for Sdbm {
    #[inline]
    fn hash<K: super::HashKey>(&self, key: &K) -> u64 {
        let mut h = 0u64;
        for i in 0..key.len() {
            h = (key.at(i) as u64)
                .wrapping_add(h << 6)
                .wrapping_add(h << 16)
                .wrapping_sub(h);
        }
        h
    }
}
