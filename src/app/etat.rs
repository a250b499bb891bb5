//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la SEULE valeur `CalculatorState` courante et la remplacer
//! à chaque action via le réducteur du noyau.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par `apply_with`).
//! - L’état du noyau n’est jamais modifié en place : il est remplacé.

use calculatrice_simple::config::Limites;
use calculatrice_simple::noyau::{apply_with, CalculatorAction, CalculatorState};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    state: CalculatorState,
    limites: Limites,
}

impl AppCalc {
    pub fn new(limites: Limites) -> Self {
        Self {
            state: CalculatorState::default(),
            limites,
        }
    }

    /// Applique une action et remplace l’état courant.
    pub fn envoyer(&mut self, action: CalculatorAction) {
        let next = apply_with(&self.limites, &self.state, action);
        if next != self.state {
            debug!(?action, affichage = %next.affichage(), "état remplacé");
        }
        self.state = next;
    }

    /// Ligne affichée (number1 + symbole + number2).
    pub fn affichage(&self) -> String {
        self.state.affichage()
    }
}
