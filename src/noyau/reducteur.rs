//! Noyau — réducteur (état, action) -> nouvel état
//!
//! Contrats :
//! - Fonction pure : l’état reçu n’est jamais modifié, on rend une nouvelle valeur.
//! - Totale : aucune erreur remontée. Une entrée invalide rend l’état inchangé.
//! - Une seule branche par action (match exhaustif).

use tracing::trace;

use super::format::texte_resultat;
use super::modele::{CalculatorAction, CalculatorOperation, CalculatorState};
use crate::config::Limites;

/// Applique `action` avec les limites par défaut (8 chiffres, résultat sur 7 caractères).
pub fn apply(state: &CalculatorState, action: CalculatorAction) -> CalculatorState {
    apply_with(&Limites::default(), state, action)
}

/// Applique `action` avec des limites explicites.
pub fn apply_with(
    limites: &Limites,
    state: &CalculatorState,
    action: CalculatorAction,
) -> CalculatorState {
    match action {
        CalculatorAction::Number(chiffre) => entrer_chiffre(limites, state, chiffre),
        CalculatorAction::Decimal => entrer_decimal(state),
        CalculatorAction::Clear => CalculatorState::default(),
        CalculatorAction::Operation(op) => entrer_operation(state, op),
        CalculatorAction::Calculate => calculer(limites, state),
        CalculatorAction::Delete => effacer(state),
    }
}

/* ------------------------ Saisie ------------------------ */

fn entrer_chiffre(limites: &Limites, state: &CalculatorState, chiffre: u8) -> CalculatorState {
    let Some(c) = char::from_digit(u32::from(chiffre), 10) else {
        trace!(chiffre, "chiffre hors 0..=9 ignoré");
        return state.clone();
    };

    let mut next = state.clone();

    // pas d’opération => premier opérande, sinon second
    let cible = if state.operation.is_none() {
        &mut next.number1
    } else {
        &mut next.number2
    };

    if cible.len() >= limites.longueur_max_nombre {
        trace!(longueur = cible.len(), "opérande plein, chiffre ignoré");
        return next;
    }

    cible.push(c);
    next
}

fn entrer_decimal(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none() && !state.number1.is_empty() && !state.number1.contains('.') {
        let mut next = state.clone();
        next.number1.push('.');
        return next;
    }

    // Ici l’opération est normalement posée ; on ne la revérifie pas.
    if !state.number2.is_empty() && !state.number2.contains('.') {
        let mut next = state.clone();
        next.number2.push('.');
        return next;
    }

    trace!("point décimal ignoré");
    state.clone()
}

fn entrer_operation(state: &CalculatorState, op: CalculatorOperation) -> CalculatorState {
    if state.number1.is_empty() {
        trace!(?op, "opération sans premier opérande ignorée");
        return state.clone();
    }

    CalculatorState {
        operation: Some(op),
        ..state.clone()
    }
}

/* ------------------------ DEL ------------------------ */

/// Priorité : number2, puis opération, puis number1. Un seul effet par appel.
fn effacer(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();

    if !next.number2.is_empty() {
        next.number2.pop();
    } else if next.operation.is_some() {
        next.operation = None;
    } else if !next.number1.is_empty() {
        next.number1.pop();
    }

    next
}

/* ------------------------ = ------------------------ */

fn calculer(limites: &Limites, state: &CalculatorState) -> CalculatorState {
    let (Some(n1), Some(n2)) = (lire_operande(&state.number1), lire_operande(&state.number2))
    else {
        trace!(?state, "opérande illisible, calcul ignoré");
        return state.clone();
    };

    let Some(op) = state.operation else {
        trace!("aucune opération, calcul ignoré");
        return state.clone();
    };

    let resultat = op.appliquer(n1, n2);

    CalculatorState {
        number1: texte_resultat(resultat, limites.longueur_resultat),
        number2: String::new(),
        operation: None,
    }
}

/// Lecture d’un opérande en `f64`.
///
/// Vide => None. Les restes de résultats coupés ("Infinit", "-Infini", "1.0E") ne
/// se relisent pas ; "NaN" se relit en NaN.
fn lire_operande(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}
