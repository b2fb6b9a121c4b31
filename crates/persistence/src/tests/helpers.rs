// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::backend::{MemoryBackend, StorageBackend};
use crate::error::StorageError;
use std::cell::RefCell;
use std::rc::Rc;

/// A memory backend that can be observed from outside the session owning
/// it. Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedBackend {
    inner: Rc<RefCell<MemoryBackend>>,
}

impl SharedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).unwrap()
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.inner.borrow().keys_with_prefix(prefix)
    }
}

impl StorageBackend for SharedBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().remove(key)
    }
}

/// A backend whose writes always fail, simulating disabled or exhausted
/// storage. Reads report an empty store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingBackend;

impl StorageBackend for FailingBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::BackendError(String::from("storage disabled")))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::BackendError(String::from("storage disabled")))
    }
}
