//! ID type wrappers for type safety.

mod id_macro;
pub mod commit_id;

pub use commit_id::CommitId;
