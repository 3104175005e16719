//! Noyau : erreurs typées
//!
//! Une erreur par étage du pipeline (jetons, RPN, évaluation), puis une
//! erreur “chapeau” `ErreurCalc` renvoyée par `evaluer`.
//! Toute erreur arrête le pipeline : pas de résultat partiel.

use thiserror::Error;

/// Étage 1 : tokenisation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurLex {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Littéral qui ne donne pas un f64 fini (ex: ".").
    #[error("nombre invalide: \"{0}\"")]
    NombreInvalide(String),
}

/// Étage 2 : shunting-yard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurParse {
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermanteOrpheline,

    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    #[error("virgule hors d’un appel de fonction")]
    VirguleHorsAppel,

    #[error("argument manquant")]
    ArgumentManquant,

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    /// La parenthèse d’appel n’a plus sa fonction dessous.
    #[error("appel de fonction invalide")]
    AppelInvalide,
}

/// Étage 3 : évaluation postfixe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("pile vide (opérande manquant)")]
    PileVide,

    #[error("mauvais nombre d’arguments pour {nom} ({arite})")]
    Arite { nom: String, arite: usize },

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    /// Pile finale != 1 valeur.
    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Genre d’erreur, sans le détail (pratique pour les tests et l’UI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lex,
    Parse,
    Eval,
}

/// Erreur publique du noyau.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    #[error(transparent)]
    Lex(#[from] ErreurLex),

    #[error(transparent)]
    Parse(#[from] ErreurParse),

    #[error(transparent)]
    Eval(#[from] ErreurEval),
}

impl ErreurCalc {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurCalc::Lex(_) => GenreErreur::Lex,
            ErreurCalc::Parse(_) => GenreErreur::Parse,
            ErreurCalc::Eval(_) => GenreErreur::Eval,
        }
    }
}
