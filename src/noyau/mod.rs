//! Noyau — calculatrice à deux opérandes
//!
//! Organisation interne :
//! - modele.rs    : CalculatorState / CalculatorAction / CalculatorOperation
//! - reducteur.rs : (état, action) -> nouvel état (pur, total)
//! - format.rs    : texte du résultat (rendu JVM + coupe brute)
//! - saisie.rs    : texte clavier -> action

pub mod format;
pub mod modele;
pub mod reducteur;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use modele::{
    CalculatorAction, CalculatorOperation, CalculatorState, LONGUEUR_RESULTAT, MAX_NUM_LENGTH,
};
pub use reducteur::{apply, apply_with};
pub use saisie::{action_depuis_touche, ErreurSaisie};
