use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::schema::EntitySchema;
use crate::store::Repository;

/// Remove records by id.
///
/// Every id is resolved before anything is removed, so a batch with a
/// missing id leaves the collection untouched. Repeated ids are removed once.
pub fn run<R: Repository>(repo: &mut R, schema: &EntitySchema, ids: &[Uuid]) -> Result<CmdResult> {
    for id in ids {
        repo.get(schema.name, id)?;
    }

    let mut result = CmdResult::default();
    let mut removed = Vec::with_capacity(ids.len());
    for id in ids {
        if removed.iter().any(|r: &Record| r.id() == *id) {
            continue;
        }
        let record = repo.remove(schema.name, id)?;
        result.add_message(CmdMessage::success(format!(
            "{} deleted: {}",
            schema.label(),
            record.display_name(schema)
        )));
        removed.push(record);
    }

    Ok(result.with_affected(removed))
}
