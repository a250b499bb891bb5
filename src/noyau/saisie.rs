// src/noyau/saisie.rs
//
// Texte clavier -> CalculatorAction.
// Les touches spéciales (Échap, Retour arrière, Entrée) sont gérées par la vue egui ;
// ici on ne traite que le texte tapé.

use super::modele::{CalculatorAction, CalculatorOperation};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ErreurSaisie {
    #[error("saisie vide")]
    Vide,
    #[error("touche non reconnue: {0:?}")]
    ToucheInconnue(String),
}

/// Traduit un texte tapé (un caractère, espaces ignorés) en action.
pub fn action_depuis_touche(texte: &str) -> Result<CalculatorAction, ErreurSaisie> {
    let t = texte.trim();
    let mut chars = t.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(if t.is_empty() {
            ErreurSaisie::Vide
        } else {
            ErreurSaisie::ToucheInconnue(t.to_string())
        });
    };

    let action = match c {
        '0'..='9' => CalculatorAction::Number(c as u8 - b'0'),
        '.' | ',' => CalculatorAction::Decimal,
        '+' => CalculatorAction::Operation(CalculatorOperation::Add),
        '-' => CalculatorAction::Operation(CalculatorOperation::Subtract),
        '*' | 'x' | 'X' | '×' => CalculatorAction::Operation(CalculatorOperation::Multiply),
        '/' | '÷' => CalculatorAction::Operation(CalculatorOperation::Divide),
        '=' => CalculatorAction::Calculate,
        'c' | 'C' => CalculatorAction::Clear,
        _ => return Err(ErreurSaisie::ToucheInconnue(t.to_string())),
    };

    Ok(action)
}
