//! # ndfuse
//!
//! Lazy, fused element-wise arithmetic on N-dimensional arrays.
//!
//! One `use ndfuse::prelude::*;` gives you arrays, the expression protocol,
//! the infix operators, and every named element-wise function:
//!
//! ```
//! use ndfuse::prelude::*;
//!
//! let a = Array::from_vec(vec![1.0_f64, 4.0, 9.0], [3]).unwrap();
//! let b = Array::from_vec(vec![0.5_f64, 0.5, 0.5], [3]).unwrap();
//! let root = sqrt(&a);
//! let fused = &root * &b;
//! assert_eq!(materialize(&fused).as_slice(), &[0.5, 1.0, 1.5]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Arrays, expression nodes, operator catalogue, driver |
//! | `complex` *(default)* | Catalogue entries for `num_complex::Complex<f32/f64>` |

#[cfg(feature = "core")]
pub use ndfuse_core as core;

/// Glob-import convenience: `use ndfuse::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use ndfuse_core::prelude::*;
}
