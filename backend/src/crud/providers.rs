use crate::crud::{require_text, unique_name_outcome};
use crate::db::Gateway;
use crate::error::AppResult;
use common::model::provider::{ProviderForm, ProviderUpdate};
use common::model::table::Table;
use common::model::MutationOutcome;
use log::info;
use rusqlite::params;

fn validate(form: &ProviderForm) -> AppResult<()> {
    require_text("Name", &form.name)?;
    require_text("Type", &form.provider_type)?;
    require_text("Address", &form.address)?;
    require_text("City", &form.city)?;
    require_text("Contact", &form.contact)
}

pub fn create(gw: &Gateway, form: &ProviderForm) -> AppResult<MutationOutcome> {
    validate(form)?;
    let affected = gw.execute(
        "INSERT INTO providers (Name, Type, Address, City, Contact) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![form.name, form.provider_type, form.address, form.city, form.contact],
    )?;
    info!("provider '{}' added", form.name);
    Ok(MutationOutcome { affected })
}

/// Replaces every field of the provider currently named `current_name`.
pub fn update(gw: &Gateway, update: &ProviderUpdate) -> AppResult<MutationOutcome> {
    require_text("Current name", &update.current_name)?;
    let form = &update.fields;
    validate(form)?;
    let affected = gw.execute(
        "UPDATE providers
         SET Name = ?1, Type = ?2, Address = ?3, City = ?4, Contact = ?5
         WHERE Name = ?6 AND (SELECT COUNT(*) FROM providers WHERE Name = ?6) = 1",
        params![
            form.name,
            form.provider_type,
            form.address,
            form.city,
            form.contact,
            update.current_name
        ],
    )?;
    let outcome = unique_name_outcome(
        gw,
        Table::Providers,
        "provider",
        &update.current_name,
        affected,
    )?;
    info!("provider '{}' updated ({} rows)", update.current_name, outcome.affected);
    Ok(outcome)
}

pub fn delete(gw: &Gateway, name: &str) -> AppResult<MutationOutcome> {
    require_text("Name", name)?;
    let affected = gw.execute(
        "DELETE FROM providers
         WHERE Name = ?1 AND (SELECT COUNT(*) FROM providers WHERE Name = ?1) = 1",
        [name],
    )?;
    let outcome = unique_name_outcome(gw, Table::Providers, "provider", name, affected)?;
    info!("provider '{name}' deleted ({} rows)", outcome.affected);
    Ok(outcome)
}
