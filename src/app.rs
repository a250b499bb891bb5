// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en CalculatorAction
//
// Clavier :
// - Échap = AC, Retour arrière = Del, Entrée = "=" (seulement si aucun widget n’a le focus)
// - texte tapé (chiffres, . , + - * x /, =, c) via noyau::action_depuis_touche

pub mod etat;
pub mod vue;

// Ré-export pratique : `use app::AppCalc;`
pub use etat::AppCalc;

use calculatrice_simple::noyau::{action_depuis_touche, CalculatorAction};
use eframe::egui;
use tracing::trace;

impl AppCalc {
    /// Actions clavier de la frame, dans l’ordre de frappe.
    fn actions_clavier(ctx: &egui::Context) -> Vec<CalculatorAction> {
        let sans_focus = ctx.memory(|m| m.focused().is_none());

        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => action_touche_speciale(*key, sans_focus),
                    egui::Event::Text(t) => match action_depuis_touche(t) {
                        Ok(a) => Some(a),
                        Err(e) => {
                            // entrée invalide : ignorée, comme dans le noyau
                            trace!("{e}");
                            None
                        }
                    },
                    _ => None,
                })
                .collect()
        })
    }
}

/// Touches non textuelles. Entrée sur un bouton focus le clique déjà :
/// "=" seulement quand aucun widget n’a le focus.
fn action_touche_speciale(key: egui::Key, sans_focus: bool) -> Option<CalculatorAction> {
    match key {
        egui::Key::Escape => Some(CalculatorAction::Clear),
        egui::Key::Backspace => Some(CalculatorAction::Delete),
        egui::Key::Enter if sans_focus => Some(CalculatorAction::Calculate),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in Self::actions_clavier(ctx) {
            self.envoyer(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
