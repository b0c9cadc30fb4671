//! Resolving how a caller names a resource into the identifiers of its URL.
//!
//! A resource can be named by its ID, or by a record fetched earlier. A resource
//! which lives under a parent (a map under its project) additionally needs the
//! parent's ID, which either comes with the record or must be given by the caller.

use crate::errors::IdentityError;
use crate::schema::Record;
use std::fmt;

/// A record which carries its own ID.
pub trait Identified: Record {
    type Id: Clone + fmt::Debug;

    /// Wire name of the ID field, used in error messages.
    const ID_FIELD: &'static str;

    fn own_id(&self) -> Option<&Self::Id>;
}

/// A record which lives under a parent resource.
pub trait Nested: Identified {
    type Parent: Identified;

    const PARENT_FIELD: &'static str;

    fn parent_id(&self) -> Option<&<Self::Parent as Identified>::Id>;
}

/// A resource given either by its ID or by a previously fetched record.
#[derive(Debug)]
pub enum Ref<'a, T: Identified> {
    Id(T::Id),
    Record(&'a T),
}

impl<T: Identified> Ref<'_, T> {
    /// Get the concrete ID.
    pub fn resolve(&self) -> Result<T::Id, IdentityError> {
        match self {
            Ref::Id(id) => Ok(id.clone()),
            Ref::Record(record) => own_id(*record),
        }
    }
}

impl<'a, T: Identified> From<&'a T> for Ref<'a, T> {
    fn from(record: &'a T) -> Self {
        Ref::Record(record)
    }
}

/// A nested resource given by its ID alone, its ID together with its parent,
/// or a previously fetched record.
#[derive(Debug)]
pub enum Target<'a, T: Nested> {
    /// Needs the parent to be given alongside.
    Id(T::Id),
    Pair(T::Id, Ref<'a, T::Parent>),
    /// Knows its own parent.
    Record(&'a T),
}

impl<'a, T: Nested> From<&'a T> for Target<'a, T> {
    fn from(record: &'a T) -> Self {
        Target::Record(record)
    }
}

/// Produce the `(own ID, parent ID)` of a nested resource.
///
/// A record's own parent always wins over `parent`. A bare ID requires `parent`.
pub fn resolve<T: Nested>(
    target: Target<'_, T>,
    parent: Option<Ref<'_, T::Parent>>,
) -> Result<(T::Id, <T::Parent as Identified>::Id), IdentityError> {
    match target {
        Target::Record(record) => {
            let parent_id = record.parent_id().cloned().ok_or(IdentityError::MissingId {
                kind: T::KIND,
                field: T::PARENT_FIELD,
            })?;
            Ok((own_id(record)?, parent_id))
        }
        Target::Pair(id, parent) => Ok((id, parent.resolve()?)),
        Target::Id(id) => match parent {
            Some(parent) => Ok((id, parent.resolve()?)),
            None => Err(IdentityError::MissingParent { kind: T::KIND }),
        },
    }
}

fn own_id<T: Identified>(record: &T) -> Result<T::Id, IdentityError> {
    record.own_id().cloned().ok_or(IdentityError::MissingId {
        kind: T::KIND,
        field: T::ID_FIELD,
    })
}
