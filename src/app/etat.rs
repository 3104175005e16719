//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (écran, nombre en cours, opération
//! en attente, barre d’expression, dernière erreur) et offrir les actions des
//! touches sans logique d’affichage.
//!
//! Contrats :
//! - Le parsing d’expressions est délégué au noyau (`noyau::evaluer`).
//! - Toute erreur affiche "Error" (et non "0") et remet le nombre en cours à 0.
//!   ÷0 et la barre d’expression abandonnent aussi l’opération en attente ;
//!   une touche scientifique hors domaine la conserve.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::format::{lire_nombre, nombre_en_texte, texte_affichage};
use crate::noyau::{evaluer, normaliser_glyphes};

use super::reglages::Reglages;

/// Texte d’écran en cas d’erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Opérations binaires du pavé (+ − × ÷).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClavier {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl OpClavier {
    pub fn symbole(self) -> &'static str {
        match self {
            OpClavier::Plus => "+",
            OpClavier::Moins => "−",
            OpClavier::Fois => "×",
            OpClavier::Divise => "÷",
        }
    }

    /// None = erreur (division par zéro).
    fn applique(self, a: f64, b: f64) -> Option<f64> {
        match self {
            OpClavier::Plus => Some(a + b),
            OpClavier::Moins => Some(a - b),
            OpClavier::Fois => Some(a * b),
            OpClavier::Divise if b == 0.0 => None,
            OpClavier::Divise => Some(a / b),
        }
    }
}

/// Touches scientifiques : s’appliquent au nombre en cours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionClavier {
    Sin,
    Cos,
    Tan,
    Racine,
    Carre,
    Log,
    Ln,
    Pi,
    E,
}

impl FonctionClavier {
    pub const TOUTES: [FonctionClavier; 9] = [
        FonctionClavier::Sin,
        FonctionClavier::Cos,
        FonctionClavier::Tan,
        FonctionClavier::Racine,
        FonctionClavier::Carre,
        FonctionClavier::Log,
        FonctionClavier::Ln,
        FonctionClavier::Pi,
        FonctionClavier::E,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionClavier::Sin => "sin",
            FonctionClavier::Cos => "cos",
            FonctionClavier::Tan => "tan",
            FonctionClavier::Racine => "√",
            FonctionClavier::Carre => "x²",
            FonctionClavier::Log => "log",
            FonctionClavier::Ln => "ln",
            FonctionClavier::Pi => "π",
            FonctionClavier::E => "e",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,

    // --- pavé ---
    courant: String,
    precedent: Option<String>,
    operation: Option<OpClavier>,
    nouveau_nombre: bool,

    // --- barre d’expression ---
    pub expression: String,
    pub erreur: String, // raison lisible de la dernière erreur (vide si aucune)

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à la barre après un clic.
    pub focus_expression: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            affichage: "0".to_string(),
            courant: "0".to_string(),
            precedent: None,
            operation: None,
            nouveau_nombre: true,
            expression: String::new(),
            erreur: String::new(),
            reglages,
            focus_expression: true,
        }
    }

    /// Opération en attente (pour l’indicateur de la vue).
    pub fn operation(&self) -> Option<OpClavier> {
        self.operation
    }

    /* ------------------------ Pavé numérique ------------------------ */

    /// Chiffre ou point décimal.
    pub fn touche_chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if self.nouveau_nombre {
            self.courant = if c == '.' { "0.".into() } else { c.to_string() };
            self.nouveau_nombre = false;
        } else if c == '.' && self.courant.contains('.') {
            return;
        } else if self.courant == "0" {
            // "0" + '.' => "0." ; "0" + chiffre => chiffre
            self.courant = if c == '.' { "0.".into() } else { c.to_string() };
        } else {
            self.courant.push(c);
        }
        self.rafraichir();
    }

    pub fn touche_operation(&mut self, op: OpClavier) {
        if self.precedent.is_some() && !self.nouveau_nombre {
            self.valider();
        }
        self.precedent = Some(self.courant.clone());
        self.operation = Some(op);
        self.nouveau_nombre = true;
    }

    /// Touche "=".
    pub fn touche_egal(&mut self) {
        self.valider();
    }

    /// Touche "C" : remise à zéro totale du pavé.
    pub fn effacer(&mut self) {
        self.reset_pave();
        self.erreur.clear();
        self.rafraichir();
    }

    /// Touche "±".
    pub fn basculer_signe(&mut self) {
        self.courant = nombre_en_texte(-lire_nombre(&self.courant));
        self.rafraichir();
    }

    /// Touche "%".
    pub fn pourcentage(&mut self) {
        self.courant = nombre_en_texte(lire_nombre(&self.courant) / 100.0);
        self.rafraichir();
    }

    pub fn touche_fonction(&mut self, f: FonctionClavier) {
        let x = lire_nombre(&self.courant);
        let angles = self.reglages.angles;
        let r = match f {
            FonctionClavier::Sin => Some(angles.en_radians(x).sin()),
            FonctionClavier::Cos => Some(angles.en_radians(x).cos()),
            FonctionClavier::Tan => Some(angles.en_radians(x).tan()),
            FonctionClavier::Racine => (x >= 0.0).then(|| x.sqrt()),
            FonctionClavier::Carre => Some(x * x),
            FonctionClavier::Log => (x > 0.0).then(|| x.log10()),
            FonctionClavier::Ln => (x > 0.0).then(|| x.ln()),
            FonctionClavier::Pi => Some(std::f64::consts::PI),
            FonctionClavier::E => Some(std::f64::consts::E),
        };

        match r {
            Some(v) => {
                self.courant = nombre_en_texte(v);
                self.nouveau_nombre = true;
                self.rafraichir();
            }
            None => {
                // l’opération en attente survit : "9 + √(-9)" puis "4 =" donne 13
                self.erreur = format!("{} : hors domaine", f.libelle());
                self.courant = "0".to_string();
                self.nouveau_nombre = true;
                self.affichage = TEXTE_ERREUR.to_string();
            }
        }
    }

    /// Applique l’opération en attente (precedent op courant).
    fn valider(&mut self) {
        let (Some(precedent), Some(op)) = (self.precedent.take(), self.operation.take()) else {
            return;
        };
        let a = lire_nombre(&precedent);
        let b = lire_nombre(&self.courant);

        match op.applique(a, b) {
            Some(v) => {
                self.courant = nombre_en_texte(v);
                self.nouveau_nombre = true;
                self.rafraichir();
            }
            None => self.set_erreur("division par zéro"),
        }
    }

    /* ------------------------ Barre d’expression ------------------------ */

    /// Évalue la barre via le noyau.
    /// Succès (fini) : le résultat devient le nombre en cours et la barre est vidée.
    /// Échec : écran "Error", pavé remis à zéro, barre conservée.
    pub fn evaluer_expression(&mut self) {
        let s = self.expression.trim().to_string();
        if s.is_empty() {
            return;
        }

        match evaluer(&normaliser_glyphes(&s)) {
            Ok(v) if v.is_finite() => {
                self.erreur.clear();
                self.set_valeur(v);
                self.expression.clear();
            }
            Ok(v) => {
                log::warn!("expression {s:?} : résultat non fini ({v})");
                self.set_erreur(format!("résultat non fini: {}", nombre_en_texte(v)));
            }
            Err(e) => {
                log::warn!("expression {s:?} : {:?} : {e}", e.genre());
                self.set_erreur(e.to_string());
            }
        }
        self.focus_expression = true;
    }

    /// Dépose une valeur calculée : elle remplace tout calcul en cours.
    fn set_valeur(&mut self, v: f64) {
        self.reset_pave();
        self.courant = nombre_en_texte(v);
        self.rafraichir();
    }

    /// Utilitaire : placer une erreur (écran "Error" + pavé remis à zéro).
    fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.reset_pave();
        self.affichage = TEXTE_ERREUR.to_string();
    }

    fn reset_pave(&mut self) {
        self.courant = "0".to_string();
        self.precedent = None;
        self.operation = None;
        self.nouveau_nombre = true;
    }

    fn rafraichir(&mut self) {
        self.affichage = texte_affichage(
            &self.courant,
            self.reglages.largeur_affichage,
            self.reglages.chiffres_exposant,
        );
    }
}
