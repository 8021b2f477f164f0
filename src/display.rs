//! Formatting of index sets and data the way numpy and python print them.

use std::fmt;

/// Integer array in numpy notation: `[0 1 2]`, right-aligned to the widest element.
pub struct IndexArray<'a>(pub &'a [usize]);

impl<'a> fmt::Display for IndexArray<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.0.iter().map(|i| i.to_string().len()).max().unwrap_or(0);

        write!(f, "[")?;
        for (k, i) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>width$}", i, width = width)?;
        }
        write!(f, "]")
    }
}

/// Python list notation: `[1, 2, 3]`.
pub struct PyList<'a, T: 'a>(pub &'a [T]);

impl<'a, T: fmt::Display> fmt::Display for PyList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (k, x) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
