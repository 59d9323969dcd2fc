use uuid::Uuid;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::schema::EntitySchema;
use crate::store::Repository;

pub fn run<R: Repository>(repo: &R, schema: &EntitySchema, id: &Uuid) -> Result<CmdResult> {
    let record = repo.get(schema.name, id)?;
    Ok(CmdResult::default().with_listed(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CATEGORY;
    use crate::error::BackofficeError;
    use crate::store::memory::fixtures::RepoFixture;

    #[test]
    fn returns_the_record() {
        let fixture = RepoFixture::new().with_categories(&["ACTIVE", "INACTIVE"]);
        let second = fixture.repo.list("category").unwrap()[1].clone();
        let result = run(&fixture.repo, &CATEGORY, &second.id()).unwrap();
        assert_eq!(result.listed, vec![second]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_id_fails() {
        let fixture = RepoFixture::new();
        assert!(matches!(
            run(&fixture.repo, &CATEGORY, &Uuid::new_v4()),
            Err(BackofficeError::RecordNotFound { .. })
        ));
    }
}
