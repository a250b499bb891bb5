// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : number1 + symbole + number2, aligné à droite
// - Tactile : gros boutons (pavé 4 colonnes)
//
// Chaque bouton ne fait qu’envoyer une CalculatorAction ; aucune logique ici.

use eframe::egui;

use calculatrice_simple::noyau::{CalculatorAction, CalculatorOperation};

use super::etat::AppCalc;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [72.0, 56.0];

/// Touche double largeur (AC, 0).
const TOUCHE_LARGE: [f32; 2] = [150.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(40.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use CalculatorAction::{Calculate, Clear, Decimal, Delete, Number, Operation};
        use CalculatorOperation::{Add, Divide, Multiply, Subtract};

        // Ligne du haut : AC (large) + Del + /
        ui.horizontal(|ui| {
            self.touche(ui, "AC", Clear, TOUCHE_LARGE);
            self.touche(ui, "Del", Delete, TOUCHE);
            self.touche(ui, Divide.symbole(), Operation(Divide), TOUCHE);
        });

        let lignes = [
            ([7, 8, 9], Multiply),
            ([4, 5, 6], Subtract),
            ([1, 2, 3], Add),
        ];
        for (chiffres, op) in lignes {
            ui.horizontal(|ui| {
                for d in chiffres {
                    self.touche(ui, &d.to_string(), Number(d), TOUCHE);
                }
                self.touche(ui, op.symbole(), Operation(op), TOUCHE);
            });
        }

        // Ligne du bas : 0 (large) + . + =
        ui.horizontal(|ui| {
            self.touche(ui, "0", Number(0), TOUCHE_LARGE);
            self.touche(ui, ".", Decimal, TOUCHE);
            self.touche(ui, "=", Calculate, TOUCHE);
        });
    }

    fn touche(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        action: CalculatorAction,
        taille: [f32; 2],
    ) {
        let bouton = egui::Button::new(egui::RichText::new(label).size(22.0));
        if ui.add_sized(taille, bouton).clicked() {
            self.envoyer(action);
        }
    }
}
