//! Assigning deferred values after construction.

use crate::coerce::coerce;
use crate::config::Strictness;
use crate::descriptor::TypeDescriptor;
use crate::error::{BuildResult, ConstructionError};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Assign each deferred value to the same-named field or property.
///
/// Values naming no member are skipped under `Strictness::Lenient` and fail
/// the build under `Strictness::Strict`. Returns the number assigned.
pub fn apply_deferred<T: 'static>(
    instance: &mut T,
    deferred: BTreeMap<String, Value>,
    descriptor: &TypeDescriptor<T>,
    strictness: Strictness,
) -> BuildResult<usize> {
    let mut assigned = 0;

    for (name, value) in deferred {
        let Some(member) = descriptor.find_member(&name) else {
            if strictness == Strictness::Strict {
                return Err(ConstructionError::UnknownMember {
                    type_name: descriptor.type_name(),
                    name,
                }
                .into());
            }
            debug!(
                type_name = descriptor.type_name(),
                member = %name,
                "No field or property for deferred value, skipping"
            );
            continue;
        };

        let value = coerce(&name, value, &member.ty())?;
        member.assign(instance, value)?;
        trace!(member = %name, kind = ?member.kind(), "Assigned deferred value");
        assigned += 1;
    }

    Ok(assigned)
}
