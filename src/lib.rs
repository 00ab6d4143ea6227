//! Fixed-shape PDF417 encoder for 16-digit card numbers.
//!
//! A card number is compacted in numeric mode, protected with 8 error
//! correction codewords and laid out as a symbol of 8 rows with one row
//! indicator and two data columns. The symbol is rendered to a 1 bit per
//! pixel [Bitmap] of 138x48 pixels with a 20 byte line stride.
//!
//! ```
//! let bitmap = card417::encode("1234567812345678").unwrap();
//! assert_eq!((bitmap.width(), bitmap.height(), bitmap.stride()), (138, 48, 20));
//! assert_eq!(bitmap.as_bytes().len(), 960);
//! ```
//!
//! Use [Symbol] directly to inspect the codewords or change the rendering:
//!
//! ```
//! use card417::{Digits, Symbol};
//!
//! let digits: Digits = "0000000000000000".parse().unwrap();
//! let symbol = Symbol::new(&digits);
//! let bitmap = symbol.render().set_scale((1, 2)).to_bitmap();
//! assert_eq!((bitmap.width(), bitmap.height()), (69, 16));
//! ```

mod tables;
pub mod bitmap;
pub mod builder;
pub mod ecc;
pub mod error;
pub mod generators;
pub mod high_level;
pub mod patterns;
#[cfg(feature = "embedded-graphics")]
mod graphics;

use log::debug;

pub use bitmap::Bitmap;
pub use builder::{build_matrix, render, Matrix, Symbol, SymbolRender, HEIGHT, ROWS, STRIDE, WIDTH};
pub use ecc::generate_ec;
pub use error::Error;
pub use generators::{Pattern, Run, SymbolRow};
pub use high_level::{compact, data_codewords, encode_codewords, Digits};
pub use patterns::lookup;

/// Validates a card number and renders its symbol at the default scale.
pub fn encode(input: &str) -> Result<Bitmap, Error> {
    let digits: Digits = input.parse()?;
    let bitmap = Symbol::new(&digits).render().to_bitmap();
    debug!("rendered card {digits:#} to a {}x{} bitmap", bitmap.width(), bitmap.height());
    Ok(bitmap)
}
