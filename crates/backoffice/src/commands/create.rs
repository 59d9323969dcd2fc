use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::schema::{validate, EntitySchema, Mode, Payload};
use crate::store::Repository;

pub fn run<R: Repository>(repo: &mut R, schema: &EntitySchema, payload: &Payload) -> Result<CmdResult> {
    let validated = validate(payload, schema, Mode::Create)?;
    let record = Record::from_payload(Uuid::new_v4(), validated);
    repo.insert(schema.name, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} created: {}",
        schema.label(),
        record.display_name(schema)
    )));
    Ok(result.with_affected(vec![record]))
}
