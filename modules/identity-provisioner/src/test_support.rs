//! In-memory implementations of the consumed ports.
//!
//! Used by this crate's tests and by downstream crates that need a live
//! store or directory without a backend (policy symmetry tests, examples).
//! Both fixtures support fault injection so error paths stay testable.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tenantguard_query::{Expr, SelectQuery, evaluate};
use tenantguard_security::Principal;

use crate::directory::{DirectoryError, UserDirectory};
use crate::store::{Document, DocumentStore, StoreError};

/// In-memory [`UserDirectory`].
#[derive(Default)]
pub struct InMemoryDirectory {
    records: Mutex<BTreeMap<String, Principal>>,
    failing: AtomicBool,
}

impl InMemoryDirectory {
    /// Make every subsequent call fail with a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Seed a record directly, bypassing provisioning.
    pub fn insert(&self, principal: Principal) {
        self.lock().insert(principal.id.clone(), principal);
    }

    /// Inspect a record without going through the port.
    #[must_use]
    pub fn principal(&self, id: &str) -> Option<Principal> {
        self.lock().get(id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Principal>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), DirectoryError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(DirectoryError::Backend("injected failure".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<String>, DirectoryError> {
        self.check()?;
        Ok(self
            .lock()
            .values()
            .find(|principal| principal.email == email)
            .map(|principal| principal.id.clone()))
    }

    async fn create_bare(&self, id: &str) -> Result<String, DirectoryError> {
        self.check()?;
        let mut records = self.lock();
        if records.contains_key(id) {
            return Err(DirectoryError::Conflict { id: id.to_owned() });
        }
        records.insert(id.to_owned(), Principal::bare(id));
        Ok(id.to_owned())
    }

    async fn get_principal(&self, id: &str) -> Result<Principal, DirectoryError> {
        self.check()?;
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound { id: id.to_owned() })
    }

    async fn update_principal(&self, principal: Principal) -> Result<Principal, DirectoryError> {
        self.check()?;
        let mut records = self.lock();
        if !records.contains_key(&principal.id) {
            return Err(DirectoryError::NotFound {
                id: principal.id.clone(),
            });
        }
        records.insert(principal.id.clone(), principal.clone());
        Ok(principal)
    }

    fn email_field(&self) -> &str {
        "email"
    }

    fn id_field(&self) -> &str {
        "username"
    }
}

/// In-memory [`DocumentStore`] backed by the structural query evaluator.
///
/// A document that cannot be evaluated against a filter (unknown field,
/// operand mismatch) simply does not match it.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<Vec<Document>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    /// Make every subsequent call fail with a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Seed a document, replacing any existing document at the same path.
    pub fn insert(&self, document: Document) {
        let mut documents = self.lock();
        if let Some(existing) = documents.iter_mut().find(|d| d.path == document.path) {
            *existing = document;
        } else {
            documents.push(document);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Document>> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("injected failure".to_owned()));
        }
        Ok(())
    }
}

/// Field map seen by filters: document fields plus the `path` pseudo-field.
fn effective_fields(document: &Document) -> BTreeMap<String, serde_json::Value> {
    let mut fields = document.fields.clone();
    fields
        .entry("path".to_owned())
        .or_insert_with(|| serde_json::Value::String(document.path.clone()));
    fields
}

fn matches(document: &Document, filter: &Expr) -> bool {
    matches!(evaluate(filter, &effective_fields(document)), Ok(true))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn query_one(&self, filter: &Expr) -> Result<Option<Document>, StoreError> {
        self.check()?;
        Ok(self
            .lock()
            .iter()
            .find(|document| matches(document, filter))
            .cloned())
    }

    async fn save(&self, document: Document) -> Result<(), StoreError> {
        self.check()?;
        self.insert(document);
        Ok(())
    }

    async fn search(&self, query: &SelectQuery) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        let documents = self.lock();
        let matched = documents
            .iter()
            .filter(|document| {
                query
                    .where_clause
                    .as_ref()
                    .is_none_or(|filter| matches(document, filter))
            })
            .cloned();

        let offset = usize::try_from(query.offset.unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(usize::MAX);
        Ok(matched.skip(offset).take(limit).collect())
    }
}
