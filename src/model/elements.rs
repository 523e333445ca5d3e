// src/model/elements.rs

/// Normalise an element label from a file: "CL", "cl", "Cl1" -> "Cl".
fn symbol(label: &str) -> String {
    let letters: Vec<char> = label.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    match letters.as_slice() {
        [] => String::new(),
        [first] => first.to_ascii_uppercase().to_string(),
        [first, second, ..] => {
            let mut s = first.to_ascii_uppercase().to_string();
            s.push(second.to_ascii_lowercase());
            s
        }
    }
}

/// Returns (covalent radius in Å, CPK colour).
pub fn get_atom_properties(element: &str) -> (f64, (f64, f64, f64)) {
    let sym = symbol(element);
    match sym.as_str() {
        "H"  => (0.37, (1.00, 1.00, 1.00)),
        "He" => (0.32, (0.85, 1.00, 1.00)),
        "Li" => (1.34, (0.80, 0.50, 1.00)),
        "B"  => (0.82, (1.00, 0.70, 0.70)),
        "C"  => (0.77, (0.20, 0.20, 0.20)),
        "N"  => (0.75, (0.19, 0.31, 0.97)),
        "O"  => (0.73, (1.00, 0.05, 0.05)),
        "F"  => (0.71, (0.56, 0.88, 0.31)),
        "Na" => (1.54, (0.67, 0.36, 0.95)),
        "Mg" => (1.30, (0.54, 1.00, 0.00)),
        "Al" => (1.18, (0.75, 0.65, 0.65)),
        "Si" => (1.11, (0.94, 0.78, 0.63)),
        "P"  => (1.06, (1.00, 0.50, 0.00)),
        "S"  => (1.02, (1.00, 1.00, 0.19)),
        "Cl" => (0.99, (0.12, 0.94, 0.12)),
        "K"  => (1.96, (0.56, 0.25, 0.83)),
        "Ca" => (1.74, (0.24, 1.00, 0.00)),
        "Ti" => (1.36, (0.75, 0.76, 0.78)),
        "Fe" => (1.25, (0.88, 0.40, 0.20)),
        "Cu" => (1.38, (0.78, 0.50, 0.20)),
        "Zn" => (1.31, (0.49, 0.50, 0.69)),
        "Br" => (1.14, (0.65, 0.16, 0.16)),
        "Ag" => (1.53, (0.75, 0.75, 0.75)),
        "Au" => (1.44, (1.00, 0.82, 0.14)),
        // Hot pink for anything unknown
        _    => (1.00, (1.00, 0.08, 0.58)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_normalised() {
        assert_eq!(get_atom_properties("CL"), get_atom_properties("Cl"));
        assert_eq!(get_atom_properties("o1"), get_atom_properties("O"));
        assert_eq!(get_atom_properties("C").0, 0.77);
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(get_atom_properties("Xx").1, (1.00, 0.08, 0.58));
        assert_eq!(get_atom_properties("").1, (1.00, 0.08, 0.58));
    }
}
