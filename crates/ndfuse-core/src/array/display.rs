//! `Display` formatting for [`Array`].

use core::fmt;

use super::Array;
use crate::index::IndexType;

impl<T: fmt::Display, const N: usize, I: IndexType> fmt::Display for Array<T, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "array([], shape={:?})", self.shape);
        }

        match N {
            0 => write!(f, "array({})", self.data[0]),
            1 => {
                write!(f, "array([")?;
                write_row(f, &self.data)?;
                write!(f, "])")
            }
            2 => {
                let cols = self.shape.as_slice()[1];
                writeln!(f, "array([")?;
                let rows: Vec<&[T]> = self.data.chunks(cols).collect();
                for (r, row) in rows.iter().enumerate() {
                    write!(f, "  [")?;
                    write_row(f, row)?;
                    if r + 1 < rows.len() {
                        writeln!(f, "],")?;
                    } else {
                        writeln!(f, "]")?;
                    }
                }
                write!(f, "])")
            }
            _ => write!(
                f,
                "array(shape={:?}, numel={})",
                self.shape,
                self.numel()
            ),
        }
    }
}

fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}
