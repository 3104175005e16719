//! src/app/reglages.rs
//!
//! Réglages de l’hôte (écran + touches scientifiques).
//! Pas de fichier : valeurs par défaut + setters bornés.

/// Largeur d’écran par défaut (au-delà : notation exponentielle).
const LARGEUR_DEFAUT: usize = 12;
const LARGEUR_MIN: usize = 8;
const LARGEUR_MAX: usize = 24;

/// Décimales de la mantisse en notation exponentielle.
const CHIFFRES_DEFAUT: usize = 6;
const CHIFFRES_MIN: usize = 1;
const CHIFFRES_MAX: usize = 15;

/// Unité des touches sin/cos/tan du pavé.
/// (La barre d’expression, elle, reste en radians.)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Degres => x.to_radians(),
            ModeAngle::Radians => x,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub largeur_affichage: usize,
    pub chiffres_exposant: usize,
    pub angles: ModeAngle,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur_affichage: LARGEUR_DEFAUT,
            chiffres_exposant: CHIFFRES_DEFAUT,
            angles: ModeAngle::default(),
        }
    }
}

impl Reglages {
    /// Garde-fou : largeur bornée (écran lisible).
    pub fn set_largeur_affichage(&mut self, largeur: usize) {
        self.largeur_affichage = largeur.clamp(LARGEUR_MIN, LARGEUR_MAX);
    }

    /// Garde-fou : au-delà de 15 décimales, f64 n’a plus rien à dire.
    pub fn set_chiffres_exposant(&mut self, chiffres: usize) {
        self.chiffres_exposant = chiffres.clamp(CHIFFRES_MIN, CHIFFRES_MAX);
    }
}
