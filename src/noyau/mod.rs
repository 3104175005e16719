//! Noyau d’évaluation (flottants f64)
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (Lex / Parse / Eval)
//! - tables.rs   : constantes + fonctions (statiques)
//! - jetons.rs   : tokenisation + normalisation × ÷ −
//! - rpn.rs      : shunting-yard (précédence, unaires, arité des appels)
//! - eval.rs     : évaluation postfixe + pipeline complet
//! - format.rs   : texte d’écran (forme courte / exponentielle)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tables;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer;
pub use jetons::normaliser_glyphes;
