use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::NovaResult;

/// Render an inline tera template with the given context
pub fn load_prompt<T: Serialize>(template: &str, context_data: &T) -> NovaResult<String> {
    let context = Context::from_serialize(context_data)?;
    Ok(Tera::one_off(template, &context, false)?)
}
