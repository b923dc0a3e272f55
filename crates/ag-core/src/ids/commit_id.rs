use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a saved commit; the only lookup and delete key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl_id!(CommitId);
