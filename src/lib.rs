//! Cipher Workshop - classical cipher transforms
//!
//! Pure text-to-text implementations of the classical ciphers, plus a hybrid
//! composer that chains them into custom ciphers.
//!
//! ## Ciphers
//!
//! - **Caesar**: shift letters by a fixed amount (any integer shift)
//! - **ROT13**: Caesar with shift 13, its own inverse
//! - **Vigenère**: polyalphabetic shift driven by a repeating key
//! - **Atbash**: mirror the alphabet, its own inverse
//! - **Rail Fence**: zigzag transposition across N rails
//! - **Beaufort**: `key - letter`, its own inverse for a fixed key
//!
//! Letters keep their case. Everything outside `A-Z`/`a-z` passes through
//! unchanged (Rail Fence moves it around but never alters it).
//!
//! ## Hybrid pipelines
//!
//! ```text
//! Input → Step 1 → Step 2 → ... → Step N → Output
//! ```
//!
//! Each step encodes the previous step's output. Missing parameters fall
//! back to shift 3, key `"KEY"` and 3 rails.
//!
//! ## Example
//!
//! ```
//! use cipherworkshop::cipher::{rail_fence, vigenere};
//! use cipherworkshop::hybrid::{apply_pipeline, HybridStep};
//! use cipherworkshop::Direction;
//!
//! let fenced = rail_fence("WEAREDISCOVEREDFLEEATONCE", 3, Direction::Encode).unwrap();
//! assert_eq!(fenced, "WECRLTEERDSOEEFEAOCAIVDEN");
//!
//! let secret = vigenere("Attack at dawn", "LEMON", Direction::Encode).unwrap();
//! assert_eq!(vigenere(&secret, "LEMON", Direction::Decode).unwrap(), "Attack at dawn");
//!
//! let steps = [HybridStep::caesar(1), HybridStep::atbash()];
//! assert_eq!(apply_pipeline("abc", &steps).unwrap(), "yxw");
//! ```

pub mod analysis;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod custom;
pub mod error;
pub mod hybrid;
pub mod params;
pub mod transform;

pub use error::{CipherError, Result};
pub use hybrid::{apply_pipeline, HybridPipeline, HybridStep, StepKind};
pub use params::{CipherKind, CipherParameters, Direction};
