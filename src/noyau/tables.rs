// src/noyau/tables.rs
//
// Constantes + fonctions connues du noyau.
// Données statiques, lecture seule : aucune initialisation à l’exécution,
// partageables entre évaluations concurrentes sans verrou.

use std::f64::consts;

pub type FonctionUnaire = fn(f64) -> f64;
pub type FonctionBinaire = fn(f64, f64) -> f64;

/// Constantes (noms déjà en minuscules).
pub static CONSTANTES: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

pub static FONCTIONS_UNAIRES: &[(&str, FonctionUnaire)] = &[
    ("sqrt", f64::sqrt),
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("abs", f64::abs),
    ("round", arrondi),
    ("floor", f64::floor),
    ("ceil", f64::ceil),
    ("log", f64::log10),
    ("ln", f64::ln),
];

pub static FONCTIONS_BINAIRES: &[(&str, FonctionBinaire)] =
    &[("pow", puissance), ("min", minimum), ("max", maximum)];

pub fn constante(nom: &str) -> Option<f64> {
    CONSTANTES.iter().find(|(n, _)| *n == nom).map(|(_, v)| *v)
}

pub fn fonction_unaire(nom: &str) -> Option<FonctionUnaire> {
    FONCTIONS_UNAIRES
        .iter()
        .find(|(n, _)| *n == nom)
        .map(|(_, f)| *f)
}

pub fn fonction_binaire(nom: &str) -> Option<FonctionBinaire> {
    FONCTIONS_BINAIRES
        .iter()
        .find(|(n, _)| *n == nom)
        .map(|(_, f)| *f)
}

pub fn est_fonction(nom: &str) -> bool {
    fonction_unaire(nom).is_some() || fonction_binaire(nom).is_some()
}

/// Puissance partagée par `^`, `**` et `pow`.
/// powf donne 1 pour 1^NaN et (±1)^±∞ ; ici ces cas restent NaN.
pub fn puissance(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        f64::NAN
    } else {
        a.powf(b)
    }
}

/// Arrondi “demi vers +∞” (2.5 -> 3, -2.5 -> -2), pas “demi loin de zéro”.
/// Un négatif arrondi à zéro garde son signe : round(-0.4) = -0.
fn arrondi(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let bas = x.floor();
    let r = if x - bas >= 0.5 { bas + 1.0 } else { bas };
    if r == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        r
    }
}

// min/max : NaN contamine le résultat (f64::min/max l’ignoreraient).
fn minimum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn maximum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
