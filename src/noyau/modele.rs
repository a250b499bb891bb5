// src/noyau/modele.rs
//
// Valeurs du noyau : état affiché + actions utilisateur.
// Aucune logique ici (voir reducteur.rs).

/// Longueur maximale d’un opérande tapé (chiffres + point).
pub const MAX_NUM_LENGTH: usize = 8;

/// Nombre de caractères gardés du résultat affiché après `Calculate`.
pub const LONGUEUR_RESULTAT: usize = 7;

/// Opération en attente entre `number1` et `number2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalculatorOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalculatorOperation {
    /// Symbole affiché entre les deux opérandes.
    pub fn symbole(self) -> &'static str {
        match self {
            CalculatorOperation::Add => "+",
            CalculatorOperation::Subtract => "-",
            CalculatorOperation::Multiply => "x",
            CalculatorOperation::Divide => "/",
        }
    }

    /// Arithmétique IEEE brute (division par zéro => ±inf ou NaN, jamais d’erreur).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            CalculatorOperation::Add => a + b,
            CalculatorOperation::Subtract => a - b,
            CalculatorOperation::Multiply => a * b,
            CalculatorOperation::Divide => a / b,
        }
    }
}

/// Événement utilisateur.
///
/// `Number` porte un chiffre 0–9 ; toute autre valeur est ignorée par le réducteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorAction {
    Number(u8),
    Decimal,
    Clear,
    Operation(CalculatorOperation),
    Calculate,
    Delete,
}

/// État de la calculatrice (valeur immuable, remplacée à chaque action).
///
/// Contrats :
/// - `number1` / `number2` : au plus un `.` chacun, longueur bornée (voir `Limites`)
/// - `operation` n’est posée que si `number1` était non vide
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    pub number1: String,
    pub number2: String,
    pub operation: Option<CalculatorOperation>,
}

impl CalculatorState {
    pub fn new(
        number1: impl Into<String>,
        number2: impl Into<String>,
        operation: Option<CalculatorOperation>,
    ) -> Self {
        Self {
            number1: number1.into(),
            number2: number2.into(),
            operation,
        }
    }

    /// Ligne d’affichage : `number1` + symbole + `number2`.
    pub fn affichage(&self) -> String {
        let op = self.operation.map(CalculatorOperation::symbole).unwrap_or("");
        format!("{}{op}{}", self.number1, self.number2)
    }
}
