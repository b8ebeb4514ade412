//! Serializable projections built from one note body.

pub mod summary;
