//! Resource ownership checks.
//!
//! The guard only answers; rejecting with 403 and skipping the mutation is the
//! caller's job.

/// A stored resource that belongs to a single user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

pub fn owner_matches(resource_owner_id: i64, authenticated_id: i64) -> bool {
    resource_owner_id == authenticated_id
}

pub fn is_owner<R: Owned + ?Sized>(resource: &R, authenticated_id: i64) -> bool {
    owner_matches(resource.owner_id(), authenticated_id)
}
