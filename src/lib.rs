//! Calculatrice simple — bibliothèque
//!
//! - noyau  : réducteur pur (état, action) -> état
//! - config : limites (longueur des opérandes / du résultat)
//!
//! La coque egui (src/app) vit dans le binaire et ne fait que tenir l’état courant.

pub mod config;
pub mod noyau;

pub use config::{ErreurConfig, Limites};
pub use noyau::{apply, apply_with, CalculatorAction, CalculatorOperation, CalculatorState};
