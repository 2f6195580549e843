//! Walking an error's cause chain.
//!
//! An error exposes the error it wraps through [`Error::source`]; the chain ends at the
//! first error whose `source()` is `None`. [`TaggedError`] never has a source, so once one
//! is found it is the root of the chain.

use std::error::Error;
use std::iter::FusedIterator;
use std::sync::Arc;

use super::TaggedError;

/// Iterator over an error and every error beneath it, outermost first.
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

/// Iterate `err` and everything it wraps.
pub fn causes<'a>(err: &'a (dyn Error + 'static)) -> Causes<'a> {
    Causes { next: Some(err) }
}

/// The deepest error in the chain, or `err` itself when it wraps nothing.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    causes(err).last().unwrap_or(err)
}

/// First [`TaggedError`] in the chain, starting with `err` itself.
///
/// A layer holding its source as `Box<TaggedError>` or `Arc<TaggedError>` hands out the
/// box itself from `source()`, so those are looked through as well.
pub fn find_tagged<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    causes(err).find_map(as_tagged)
}

fn as_tagged<'a>(cause: &'a (dyn Error + 'static)) -> Option<&'a TaggedError> {
    if let Some(tagged) = cause.downcast_ref::<TaggedError>() {
        return Some(tagged);
    }
    if let Some(boxed) = cause.downcast_ref::<Box<TaggedError>>() {
        return Some(boxed.as_ref());
    }
    cause
        .downcast_ref::<Arc<TaggedError>>()
        .map(|shared| shared.as_ref())
}
