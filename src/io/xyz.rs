use std::fs;
use std::path::Path;

use crate::error::{AdjustError, Result};
use crate::model::{Atom, Cell, MolObject};

pub fn parse(path: &Path) -> Result<MolObject> {
    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "obj".to_string());
    parse_str(&name, &content)
}

pub fn parse_str(name: &str, content: &str) -> Result<MolObject> {
    let mut lines = content.lines();

    // 1. Number of Atoms
    let n_atoms_str = lines
        .next()
        .ok_or_else(|| AdjustError::Parse("Empty XYZ file".into()))?;
    let n_atoms: usize = n_atoms_str
        .trim()
        .parse()
        .map_err(|_| AdjustError::Parse(format!("Invalid atom count: {:?}", n_atoms_str)))?;

    // 2. Comment Line (extended XYZ may carry Lattice="...")
    let comment = lines.next().unwrap_or("");
    let cell = parse_lattice(comment);

    // 3. Atoms
    let mut atoms = Vec::with_capacity(n_atoms);
    for (i, line) in lines.enumerate() {
        if atoms.len() == n_atoms {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if parts.len() < 4 {
            return Err(AdjustError::Parse(format!("Line {}: expected 'El x y z'", i + 3)));
        }

        let mut position = [0.0; 3];
        for (axis, part) in parts[1..4].iter().enumerate() {
            position[axis] = part.parse().map_err(|_| {
                AdjustError::Parse(format!("Line {}: invalid coordinate {:?}", i + 3, part))
            })?;
        }

        atoms.push(Atom {
            element: parts[0].to_string(),
            position,
        });
    }

    if atoms.len() != n_atoms {
        return Err(AdjustError::Parse(format!(
            "Expected {} atoms, found {}",
            n_atoms,
            atoms.len()
        )));
    }

    let mut object = MolObject::new(name, atoms);
    object.cell = cell;
    Ok(object)
}

// Format: Lattice="ax ay az bx by bz cx cy cz"
fn parse_lattice(comment: &str) -> Option<Cell> {
    let start = comment.find("Lattice=\"")?;
    let remainder = &comment[start + 9..];
    let end = remainder.find('"')?;
    let parts: Vec<f64> = remainder[..end]
        .split_whitespace()
        .filter_map(|s| s.parse().ok())
        .collect();

    if parts.len() != 9 {
        return None;
    }
    Some(Cell::new([
        [parts[0], parts[1], parts[2]],
        [parts[3], parts[4], parts[5]],
        [parts[6], parts[7], parts[8]],
    ]))
}
