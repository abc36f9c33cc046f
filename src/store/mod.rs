//! Key-value persistence used by the session tracker.

pub mod codec;
pub mod memory;

use crate::errors::AppResult;

pub use memory::MemoryStore;

/// Key holding the JSON array of completed work records.
pub const RECORDS_KEY: &str = "workRecords";
/// Key holding the RFC 3339 start of the open session, if any.
pub const ACTIVE_START_KEY: &str = "activeStart";
/// Key where an unreadable record list is preserved before it can be overwritten.
pub const MALFORMED_RECORDS_KEY: &str = "workRecords.malformed";

/// One write inside a batch passed to `KeyValueStore::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvOp<'a> {
    Set(&'a str, &'a str),
    Remove(&'a str),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Apply the writes in order. Backends that can do so apply them all or
    /// none; the default runs them one by one and stops at the first error.
    fn apply(&mut self, ops: &[KvOp<'_>]) -> AppResult<()> {
        for op in ops {
            match *op {
                KvOp::Set(key, value) => self.set(key, value)?,
                KvOp::Remove(key) => self.remove(key)?,
            }
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }

    fn apply(&mut self, ops: &[KvOp<'_>]) -> AppResult<()> {
        (**self).apply(ops)
    }
}
