//! In-memory product store.
//!
//! An owned, encapsulated collection (not a process-wide global). Records
//! keep insertion order for display. Every operation either fully succeeds
//! or rejects before any mutation; id uniqueness is enforced on every write.

use prodreg_core::{DomainError, DomainResult};

use crate::product::{Product, ProductChanges};

/// The authoritative in-memory collection of product records.
///
/// Not safe for unsynchronized concurrent mutation; callers serving
/// concurrent requests must wrap it in a mutex and treat each call as a
/// critical section.
#[derive(Debug, Default)]
pub struct ProductStore {
    records: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a validated record. A duplicate `id` violates the uniqueness
    /// invariant and is rejected before any mutation.
    pub fn create(&mut self, product: Product) -> DomainResult<Product> {
        if self.position(&product.id).is_some() {
            return Err(DomainError::invariant(format!(
                "product id '{}' already exists",
                product.id
            )));
        }
        self.records.push(product.clone());
        Ok(product)
    }

    /// Removes every record whose id matches. Silently removes nothing if
    /// the id is absent; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        self.records.len() < before
    }

    /// Full update: overwrites every field of the record at `path_id`.
    ///
    /// The incoming record's own `id` may differ from `path_id`; renaming
    /// onto an id held by another record is rejected, so the collection
    /// afterward still holds exactly one record per distinct id.
    pub fn replace(&mut self, path_id: &str, product: Product) -> DomainResult<Product> {
        let pos = self.position(path_id).ok_or(DomainError::NotFound)?;
        self.check_id_free(&product.id, pos)?;

        self.records[pos] = product.clone();
        Ok(product)
    }

    /// Partial update: shallow-merges only the supplied fields over the
    /// record at `path_id`, leaving the rest untouched.
    ///
    /// Signals `NotFound` for an absent id rather than touching an
    /// undefined position. The changes come pre-validated from
    /// [`crate::schema::validate_patch`].
    pub fn merge_patch(&mut self, path_id: &str, patch: ProductChanges) -> DomainResult<Product> {
        let pos = self.position(path_id).ok_or(DomainError::NotFound)?;
        if let Some(id) = &patch.id {
            self.check_id_free(id, pos)?;
        }

        let record = &mut self.records[pos];
        if let Some(id) = patch.id {
            record.id = id;
        }
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(model) = patch.model {
            record.model = model;
        }
        if let Some(date_manufacture) = patch.date_manufacture {
            record.date_manufacture = date_manufacture;
        }
        if let Some(year) = patch.year {
            record.year = year;
        }
        if let Some(brand) = patch.brand {
            record.brand = brand;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(cpf) = patch.cpf {
            record.cpf = cpf;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }

        Ok(record.clone())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|p| p.id == id)
    }

    /// Rejects an id that is already held by a record other than the one at
    /// `own_pos`.
    fn check_id_free(&self, id: &str, own_pos: usize) -> DomainResult<()> {
        match self.position(id) {
            Some(other) if other != own_pos => Err(DomainError::invariant(format!(
                "product id '{id}' already exists"
            ))),
            _ => Ok(()),
        }
    }
}
