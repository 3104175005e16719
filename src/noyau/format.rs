// src/noyau/format.rs
//
// Affichage des nombres (écran de la calculatrice).
// - nombre_en_texte : forme courte (comme un String(n) de navigateur)
// - texte_affichage : bascule en notation exponentielle si trop long

/// f64 -> texte court.
///
/// - NaN / Infinity / -Infinity
/// - zéro (y compris -0) => "0"
/// - |x| >= 1e21 ou |x| < 1e-6 => exposant ("1e+21", "1.5e-7")
/// - sinon décimal le plus court qui relit la même valeur
pub fn nombre_en_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if !(1e-6..1e21).contains(&a) {
        return exposant_signe(format!("{x:e}"));
    }
    format!("{x}")
}

/// Texte pour l’écran : inchangé s’il tient dans `largeur` caractères,
/// sinon notation exponentielle avec `chiffres` décimales ("1.234568e+12").
pub fn texte_affichage(valeur: &str, largeur: usize, chiffres: usize) -> String {
    if valeur.chars().count() <= largeur {
        return valeur.to_string();
    }
    let x = lire_nombre(valeur);
    if !x.is_finite() {
        return nombre_en_texte(x);
    }
    exposant_signe(format!("{x:.chiffres$e}"))
}

/// Lecture tolérante (texte d’écran -> f64). NaN si illisible.
pub fn lire_nombre(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Rust écrit "1e21" ; l’écran veut "1e+21".
fn exposant_signe(s: String) -> String {
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
