mod error;
pub use error::*;

mod table;
pub use table::{ChainedHashTable, Iter, Upsert};

pub use hash::Key;
