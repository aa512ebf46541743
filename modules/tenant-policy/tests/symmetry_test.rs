#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Exercises both halves of the tenant policy against one document set: the
//! per-document check and the query rewriter. The rewriter's path filter is
//! vacuously true (legacy behavior, kept for compatibility), so the two
//! halves intentionally disagree — these tests pin the divergence so any
//! change to it is a conscious one.

use std::collections::BTreeMap;
use std::sync::Arc;

use identity_provisioner::test_support::InMemoryStore;
use identity_provisioner::{Document, DocumentStore};
use tenant_policy::{check_access, rewrite_query, tenant_path_filter};
use tenantguard_query::{SelectQuery, evaluate};
use tenantguard_security::Principal;

fn acme_user() -> Principal {
    let mut principal = Principal::bare("alice@acme.com");
    principal.tenant_id = "acme".to_owned();
    principal.company = "acme".to_owned();
    principal
}

fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());
    store.insert(Document::new("/acme/report").with_string_field("state", "published"));
    store.insert(Document::new("/acme/draft").with_string_field("state", "draft"));
    store.insert(Document::new("/globex/secret").with_string_field("state", "published"));
    store
}

#[test]
fn legacy_path_filter_matches_every_path() {
    let filter = tenant_path_filter(&acme_user());

    for path in ["/acme/report", "/globex/secret", "/", "/anything/else"] {
        let mut fields = BTreeMap::new();
        fields.insert("path".to_owned(), serde_json::json!(path));
        assert!(
            evaluate(&filter, &fields).unwrap(),
            "filter unexpectedly rejected {path}"
        );
    }
}

#[tokio::test]
async fn rewritten_search_still_returns_foreign_documents() {
    let store = seeded_store();
    let alice = acme_user();

    let rewritten = rewrite_query(&alice, SelectQuery::from_source("Document"));
    let results = store.search(&rewritten).await.unwrap();
    let paths: Vec<&str> = results.iter().map(|d| d.path.as_str()).collect();

    // The vacuous filter lets the foreign document through the search...
    assert!(paths.contains(&"/globex/secret"));
    // ...and the per-document check is what actually stops it.
    assert!(check_access(&alice, "/globex/secret").is_deny());
    assert!(check_access(&alice, "/acme/report").is_delegate());
}

#[tokio::test]
async fn rewrite_preserves_the_caller_filter() {
    let store = seeded_store();
    let alice = acme_user();

    let query = SelectQuery::from_source("Document")
        .with_where(tenantguard_query::Expr::eq_field("state", "published"));
    let results = store.search(&rewrite_query(&alice, query)).await.unwrap();
    let paths: Vec<&str> = results.iter().map(|d| d.path.as_str()).collect();

    assert!(paths.contains(&"/acme/report"));
    assert!(!paths.contains(&"/acme/draft"), "caller filter must survive the rewrite");
}

#[tokio::test]
async fn superuser_sees_everything_through_both_halves() {
    let store = seeded_store();
    let system = Principal::bare("system");

    let query = SelectQuery::from_source("Document");
    let rewritten = rewrite_query(&system, query.clone());
    assert_eq!(rewritten, query);

    let results = store.search(&rewritten).await.unwrap();
    assert_eq!(results.len(), 3);
    for document in &results {
        assert!(check_access(&system, &document.path).is_delegate());
    }
}
