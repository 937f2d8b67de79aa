//! Process-wide cache of type descriptors.
//!
//! Each `Buildable` type is described once; the descriptor is leaked so every
//! builder of that type shares one `&'static` copy.

use crate::descriptor::{Buildable, TypeDescriptor};
use crate::error::{BuildResult, DescribeError};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tracing::debug;

type Entry = &'static (dyn Any + Send + Sync);

static DESCRIPTORS: OnceLock<RwLock<HashMap<TypeId, Entry>>> = OnceLock::new();

/// The cached descriptor of `T`, computing it on first use.
///
/// Population happens under the write lock after a second lookup, so
/// `T::describe()` runs at most once even under concurrent first use.
pub fn describe<T: Buildable>() -> BuildResult<&'static TypeDescriptor<T>> {
    let cache = DESCRIPTORS.get_or_init(|| RwLock::new(HashMap::new()));
    let key = TypeId::of::<T>();

    {
        let guard = cache.read().map_err(|_| DescribeError::CachePoisoned)?;
        if let Some(entry) = guard.get(&key) {
            return Ok(downcast(entry));
        }
    }

    let mut guard = cache.write().map_err(|_| DescribeError::CachePoisoned)?;
    if let Some(entry) = guard.get(&key) {
        return Ok(downcast(entry));
    }

    let descriptor = T::describe();
    descriptor.validate()?;
    debug!(
        type_name = descriptor.type_name(),
        constructors = descriptor.constructors().len(),
        fields = descriptor.fields().len(),
        properties = descriptor.properties().len(),
        "Described type"
    );

    let leaked: &'static TypeDescriptor<T> = Box::leak(Box::new(descriptor));
    guard.insert(key, leaked);
    Ok(leaked)
}

fn downcast<T: Buildable>(entry: &Entry) -> &'static TypeDescriptor<T> {
    let entry: Entry = *entry;
    match entry.downcast_ref::<TypeDescriptor<T>>() {
        Some(descriptor) => descriptor,
        // Entries are keyed by TypeId::of::<T>() and always hold TypeDescriptor<T>.
        None => unreachable!("descriptor cache entry has the wrong type"),
    }
}
