use crate::crud::{require_positive, require_text, unique_name_outcome};
use crate::db::Gateway;
use crate::error::AppResult;
use common::model::receiver::{ReceiverForm, ReceiverUpdate};
use common::model::table::Table;
use common::model::MutationOutcome;
use log::info;
use rusqlite::params;

fn validate(form: &ReceiverForm) -> AppResult<()> {
    require_text("Name", &form.name)?;
    require_text("Type", &form.receiver_type)?;
    require_text("Contact", &form.contact)?;
    require_text("City", &form.city)
}

pub fn create(gw: &Gateway, form: &ReceiverForm) -> AppResult<MutationOutcome> {
    validate(form)?;
    let affected = gw.execute(
        "INSERT INTO receivers (Name, Type, Contact, City) VALUES (?1, ?2, ?3, ?4)",
        params![form.name, form.receiver_type, form.contact, form.city],
    )?;
    info!("receiver '{}' added", form.name);
    Ok(MutationOutcome { affected })
}

pub fn update(gw: &Gateway, update: &ReceiverUpdate) -> AppResult<MutationOutcome> {
    require_positive("Receiver ID", update.receiver_id)?;
    let form = &update.fields;
    validate(form)?;
    let affected = gw.execute(
        "UPDATE receivers SET Name = ?1, Type = ?2, Contact = ?3, City = ?4 WHERE Receiver_ID = ?5",
        params![
            form.name,
            form.receiver_type,
            form.contact,
            form.city,
            update.receiver_id
        ],
    )?;
    info!("receiver {} updated ({affected} rows)", update.receiver_id);
    Ok(MutationOutcome { affected })
}

/// Deletes the receiver named `name`, provided no other receiver shares it.
pub fn delete(gw: &Gateway, name: &str) -> AppResult<MutationOutcome> {
    require_text("Name", name)?;
    let affected = gw.execute(
        "DELETE FROM receivers
         WHERE Name = ?1 AND (SELECT COUNT(*) FROM receivers WHERE Name = ?1) = 1",
        [name],
    )?;
    let outcome = unique_name_outcome(gw, Table::Receivers, "receiver", name, affected)?;
    info!("receiver '{name}' deleted ({} rows)", outcome.affected);
    Ok(outcome)
}
