// src/noyau/format.rs
//
// Affichage du résultat numérique.
//
// Le texte du résultat suit le rendu « JVM » d’un double (Double.toString) :
// - "15.0" (toujours au moins un chiffre après le point)
// - "1.0E7", "1.25E-5" hors de [1e-3, 1e7)
// - "Infinity", "-Infinity", "NaN"
// puis il est coupé brutalement (pas d’arrondi) à N caractères.

/* ------------------------ Double -> texte ------------------------ */

/// Borne basse (incluse) de la notation décimale simple.
const DECIMAL_MIN: f64 = 1e-3;

/// Borne haute (exclue) de la notation décimale simple.
const DECIMAL_MAX: f64 = 1e7;

/// Rendu texte d’un `f64`, à la manière de `Double.toString`.
pub fn texte_double(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    if (DECIMAL_MIN..DECIMAL_MAX).contains(&x.abs()) {
        // Debug : chiffres minimaux (aller-retour exact) + ".0" si entier.
        // Pas d’exposant dans cette plage.
        return format!("{x:?}");
    }

    notation_scientifique(x)
}

/// "1e7" -> "1.0E7", "-1.25e-5" -> "-1.25E-5".
fn notation_scientifique(x: f64) -> String {
    let brut = format!("{x:e}");
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };

    if mantisse.contains('.') {
        format!("{mantisse}E{exposant}")
    } else {
        format!("{mantisse}.0E{exposant}")
    }
}

/* ------------------------ Troncature ------------------------ */

/// Garde les `n` premiers caractères, sans tenir compte du sens numérique.
pub fn tronquer(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Texte affiché après un calcul : rendu JVM puis coupe brute.
pub fn texte_resultat(x: f64, longueur: usize) -> String {
    tronquer(&texte_double(x), longueur)
}
