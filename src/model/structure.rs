use serde::{Deserialize, Serialize};

use super::Cell;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
}

/// A loaded molecule. The rank of an atom is its index in `atoms`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MolObject {
    pub name: String,
    pub atoms: Vec<Atom>,
    // Lattice read from the file header, if there was one
    #[serde(default)]
    pub cell: Option<Cell>,
}

impl MolObject {
    pub fn new(name: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Self {
            name: name.into(),
            atoms,
            cell: None,
        }
    }

    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }
}
