//! Track model.

use serde::{Deserialize, Serialize};

/// A single track.
///
/// Reserved: the normalizer does not produce tracks yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {}
