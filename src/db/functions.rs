//! SQL bindings for the slug functions, so migration scripts derive slugs
//! with the same table as the application.

use crate::services::slug;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

pub fn register(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_scalar_function("slugify", 1, flags, |ctx| {
        Ok(text_arg(ctx, 0)?.map(|text| slug::normalize(&text)))
    })?;

    conn.create_scalar_function("slug_with_suffix", 2, flags, |ctx| {
        let Some(text) = text_arg(ctx, 0)? else {
            return Ok(None);
        };
        // NULL suffix means "no suffix".
        let slug = match text_arg(ctx, 1)? {
            Some(suffix) => slug::with_suffix(&text, suffix),
            None => slug::normalize(&text),
        };
        Ok(Some(slug))
    })?;

    Ok(())
}

fn text_arg(ctx: &Context<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    match ctx.get_raw(idx) {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => Ok(Some(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Integer(i) => Ok(Some(i.to_string())),
        ValueRef::Real(f) => Ok(Some(f.to_string())),
        ValueRef::Blob(_) => Err(rusqlite::Error::UserFunctionError(
            "slug text must not be a blob".into(),
        )),
    }
}

