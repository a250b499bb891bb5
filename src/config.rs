//! src/config.rs
//!
//! Limites configurables de la calculatrice.
//!
//! Fichier optionnel `calculatrice.toml` (natif seulement) :
//!
//! ```toml
//! longueur_max_nombre = 8
//! longueur_resultat = 7
//! ```
//!
//! Champ absent => valeur par défaut. Fichier absent => `Limites::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::noyau::{LONGUEUR_RESULTAT, MAX_NUM_LENGTH};

pub const NOM_FICHIER_CONFIG: &str = "calculatrice.toml";

#[derive(thiserror::Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture du fichier de configuration impossible")]
    Lecture(#[from] std::io::Error),
    #[error("syntaxe TOML invalide")]
    Syntaxe(#[from] toml::de::Error),
    #[error("valeur invalide: {0}")]
    Invalide(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limites {
    /// Longueur maximale d’un opérande tapé.
    pub longueur_max_nombre: usize,
    /// Caractères gardés du résultat après un calcul.
    pub longueur_resultat: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            longueur_max_nombre: MAX_NUM_LENGTH,
            longueur_resultat: LONGUEUR_RESULTAT,
        }
    }
}

impl Limites {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let limites: Limites = toml::from_str(texte)?;
        limites.valider()?;
        Ok(limites)
    }

    /// Charge `path` ; un fichier absent n’est pas une erreur.
    pub fn charger(path: impl AsRef<Path>) -> Result<Self, ErreurConfig> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let texte = std::fs::read_to_string(path)?;
        Self::depuis_toml(&texte)
    }

    fn valider(&self) -> Result<(), ErreurConfig> {
        if self.longueur_max_nombre == 0 {
            return Err(ErreurConfig::Invalide(
                "longueur_max_nombre doit être >= 1".into(),
            ));
        }
        if self.longueur_resultat == 0 {
            return Err(ErreurConfig::Invalide(
                "longueur_resultat doit être >= 1".into(),
            ));
        }
        // le résultat devient number1 : il doit tenir dans un opérande
        if self.longueur_resultat > self.longueur_max_nombre {
            return Err(ErreurConfig::Invalide(format!(
                "longueur_resultat ({}) dépasse longueur_max_nombre ({})",
                self.longueur_resultat, self.longueur_max_nombre
            )));
        }
        Ok(())
    }
}
