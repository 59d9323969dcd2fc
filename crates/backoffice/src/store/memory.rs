use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use super::Repository;
use crate::error::{BackofficeError, Result};
use crate::model::Record;

#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    collections: HashMap<String, Vec<Record>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for an entity.
    pub fn count(&self, entity: &str) -> usize {
        self.collections.get(entity).map_or(0, Vec::len)
    }

    fn position(&self, entity: &str, id: &Uuid) -> Result<usize> {
        self.collections
            .get(entity)
            .and_then(|records| records.iter().position(|r| r.id() == *id))
            .ok_or_else(|| not_found(entity, id))
    }
}

fn not_found(entity: &str, id: &Uuid) -> BackofficeError {
    BackofficeError::RecordNotFound {
        entity: entity.to_string(),
        id: *id,
    }
}

impl Repository for InMemoryRepository {
    fn list(&self, entity: &str) -> Result<Vec<Record>> {
        Ok(self.collections.get(entity).cloned().unwrap_or_default())
    }

    fn get(&self, entity: &str, id: &Uuid) -> Result<Record> {
        let index = self.position(entity, id)?;
        Ok(self.collections[entity][index].clone())
    }

    fn insert(&mut self, entity: &str, record: Record) -> Result<()> {
        let records = self.collections.entry(entity.to_string()).or_default();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(BackofficeError::DuplicateId {
                entity: entity.to_string(),
                id: record.id(),
            });
        }
        info!(entity, id = %record.id(), "record inserted");
        records.push(record);
        Ok(())
    }

    fn replace(&mut self, entity: &str, record: Record) -> Result<()> {
        let index = self.position(entity, &record.id())?;
        info!(entity, id = %record.id(), "record replaced");
        if let Some(slot) = self
            .collections
            .get_mut(entity)
            .and_then(|records| records.get_mut(index))
        {
            *slot = record;
        }
        Ok(())
    }

    fn remove(&mut self, entity: &str, id: &Uuid) -> Result<Record> {
        let index = self.position(entity, id)?;
        let records = self
            .collections
            .get_mut(entity)
            .ok_or_else(|| not_found(entity, id))?;
        info!(entity, %id, "record removed");
        Ok(records.remove(index))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use std::collections::BTreeMap;

    use super::*;
    use crate::schema::FieldValue;

    pub struct RepoFixture {
        pub repo: InMemoryRepository,
    }

    impl Default for RepoFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RepoFixture {
        pub fn new() -> Self {
            Self {
                repo: InMemoryRepository::new(),
            }
        }

        /// Add a record built from text fields; returns the fixture for chaining.
        pub fn with_record(mut self, entity: &str, fields: &[(&str, &str)]) -> Self {
            let fields: BTreeMap<String, FieldValue> = fields
                .iter()
                .map(|(k, v)| (k.to_string(), FieldValue::Text(v.to_string())))
                .collect();
            self.repo
                .insert(entity, Record::new(Uuid::new_v4(), fields))
                .unwrap();
            self
        }

        /// Add `statuses.len()` categories named `Category N` with the given statuses.
        pub fn with_categories(mut self, statuses: &[&str]) -> Self {
            for (i, status) in statuses.iter().enumerate() {
                let name = format!("Category {}", i + 1);
                let slug = format!("category-{}", i + 1);
                self = self.with_record(
                    "category",
                    &[("name", name.as_str()), ("slug", slug.as_str()), ("status", *status)],
                );
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::RepoFixture;
    use super::*;

    #[test]
    fn list_unknown_entity_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list("nothing").unwrap().is_empty());
    }

    #[test]
    fn insert_keeps_order() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE", "INACTIVE", "ACTIVE"]);
        let names: Vec<_> = fixture
            .repo
            .list("category")
            .unwrap()
            .iter()
            .map(|r| r.text("name").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Category 1", "Category 2", "Category 3"]);
        assert_eq!(fixture.repo.count("category"), 3);
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut repo = InMemoryRepository::new();
        let record = Record::new(Uuid::new_v4(), Default::default());
        repo.insert("faq", record.clone()).unwrap();
        match repo.insert("faq", record.clone()) {
            Err(BackofficeError::DuplicateId { entity, id }) => {
                assert_eq!(entity, "faq");
                assert_eq!(id, record.id());
            }
            other => panic!("Expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn get_and_remove_not_found() {
        let mut repo = InMemoryRepository::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            repo.get("faq", &id),
            Err(BackofficeError::RecordNotFound { .. })
        ));
        match repo.remove("faq", &id) {
            Err(BackofficeError::RecordNotFound { id: err_id, .. }) => assert_eq!(err_id, id),
            _ => panic!("Expected RecordNotFound"),
        }
    }

    #[test]
    fn replace_keeps_position() {
        let mut fixture = RepoFixture::new().with_categories(&["ACTIVE", "ACTIVE", "ACTIVE"]);
        let second = fixture.repo.list("category").unwrap()[1].clone();
        let mut fields = second.fields().clone();
        fields.insert("name".into(), crate::schema::FieldValue::Text("Renamed".into()));
        fixture
            .repo
            .replace("category", Record::new(second.id(), fields))
            .unwrap();

        let listed = fixture.repo.list("category").unwrap();
        assert_eq!(listed[1].text("name"), Some("Renamed"));
        assert_eq!(listed[1].id(), second.id());
    }

    #[test]
    fn list_is_a_snapshot() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE"]);
        let mut snapshot = fixture.repo.list("category").unwrap();
        snapshot.clear();
        assert_eq!(fixture.repo.count("category"), 1);
    }

    #[test]
    fn remove_returns_record() {
        let mut fixture = RepoFixture::new().with_categories(&["ACTIVE", "INACTIVE"]);
        let first = fixture.repo.list("category").unwrap()[0].clone();
        let removed = fixture.repo.remove("category", &first.id()).unwrap();
        assert_eq!(removed, first);
        assert_eq!(fixture.repo.count("category"), 1);
    }
}
