//! Static taxonomy rows served by the species endpoint.

use serde::{Deserialize, Serialize};

/// One category with its known species, as stored in `species.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesGroup {
    pub name: String,
    #[serde(default)]
    pub species: Vec<String>,
}
