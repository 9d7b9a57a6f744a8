//! Path lookups into a parsed document, e.g. `dddd/1` for element 1 of the array stored under
//! key `dddd`.

use anyhow::{bail, Context};
use cdjson_core::{Kind, Value};
use tracing::*;

pub fn select<'v>(root: &'v Value, path: &str) -> anyhow::Result<&'v Value> {
    let mut current = root;
    let mut traversed = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        trace!(segment, kind = %current.kind());
        current = match current.kind() {
            Kind::Map => match current.map_get(segment)? {
                Some(value) => value,
                None => bail!("no member `{segment}` in the map at `/{traversed}`"),
            },
            Kind::Array => {
                let index: usize = segment.parse().with_context(|| {
                    format!("`{segment}` is not a valid index for the array at `/{traversed}`")
                })?;
                current
                    .array_get(index)
                    .with_context(|| format!("cannot index the array at `/{traversed}`"))?
            }
            kind @ (Kind::String | Kind::Integer) => {
                bail!("cannot look up `{segment}` in the {kind} at `/{traversed}`")
            }
        };

        if !traversed.is_empty() {
            traversed.push('/');
        }
        traversed.push_str(segment);
    }

    Ok(current)
}

/// Query output: strings as their raw text, everything else as its dump.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.dump().to_string(),
    }
}
