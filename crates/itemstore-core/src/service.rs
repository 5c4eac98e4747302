//! CRUD contract over an [`ItemBackend`].
//!
//! "Not found" is decided per operation with the primitive the store offers
//! for it: read checks for an empty result, update probes `exists` before
//! writing, delete looks at the removed count.

use std::sync::Arc;

use crate::backend::ItemBackend;
use crate::error::{ItemStoreError, Result};
use crate::item::{Item, ItemPayload};

#[derive(Clone)]
pub struct ItemService {
    backend: Arc<dyn ItemBackend>,
}

impl ItemService {
    pub fn new(backend: Arc<dyn ItemBackend>) -> Self {
        Self { backend }
    }

    /// Validate and store a new item. Existing ids are overwritten.
    pub async fn create(&self, payload: ItemPayload) -> Result<Item> {
        let item = payload.into_item()?;
        self.backend.set(&item.id, &item.name).await?;
        Ok(item)
    }

    pub async fn fetch(&self, id: &str) -> Result<Item> {
        match self.backend.get(id).await? {
            Some(name) if !name.is_empty() => Ok(Item {
                id: id.to_owned(),
                name,
            }),
            _ => Err(ItemStoreError::NotFound),
        }
    }

    /// Replace the name of an existing item. Validation runs before any
    /// backend call; absent ids are never created here.
    pub async fn update(&self, id: &str, payload: ItemPayload) -> Result<Item> {
        let name = payload.into_name()?;
        if !self.backend.exists(id).await? {
            return Err(ItemStoreError::NotFound);
        }
        self.backend.set(id, &name).await?;
        Ok(Item {
            id: id.to_owned(),
            name,
        })
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        match self.backend.delete(id).await? {
            0 => Err(ItemStoreError::NotFound),
            _ => Ok(()),
        }
    }
}
