//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64
//!
//! Remarque : aucune garde sur la division par zéro ni sur les résultats non
//! finis (IEEE : inf / NaN). C’est l’hôte qui décide s’il les refuse.

use super::erreur::{ErreurCalc, ErreurEval};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_rpn, to_rpn, OpBinaire, OpUnaire, RpnItem};
use super::tables::{fonction_binaire, fonction_unaire, puissance};

/// API publique : évalue une expression texte.
///
/// Les glyphes × ÷ − doivent déjà être normalisés (voir `normaliser_glyphes`).
/// Aucun état partagé : deux appels sur la même chaîne donnent le même f64 (bit à bit).
pub fn evaluer(expr_str: &str) -> Result<f64, ErreurCalc> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    log::debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    log::debug!("rpn: {}", format_rpn(&rpn));

    // 3) Pile
    let v = eval_rpn(&rpn)?;
    log::debug!("résultat: {v}");
    Ok(v)
}

/// Évalue une RPN. La pile finale doit contenir exactement une valeur.
pub fn eval_rpn(rpn: &[RpnItem]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for item in rpn {
        match item {
            RpnItem::Num(v) => st.push(*v),

            RpnItem::Unaire(op) => {
                let a = st.pop().ok_or(ErreurEval::PileVide)?;
                st.push(match op {
                    OpUnaire::Plus => a,
                    OpUnaire::Moins => -a,
                });
            }

            RpnItem::Binaire(op) => {
                let (a, b) = depile_deux(&mut st).ok_or(ErreurEval::PileVide)?;
                st.push(applique_binaire(*op, a, b));
            }

            RpnItem::Appel { nom, arite } => {
                let v = if let Some(f) = fonction_unaire(nom) {
                    if *arite != 1 {
                        return Err(erreur_arite(nom, *arite));
                    }
                    let x = st.pop().ok_or_else(|| erreur_arite(nom, *arite))?;
                    f(x)
                } else if let Some(f) = fonction_binaire(nom) {
                    if *arite != 2 {
                        return Err(erreur_arite(nom, *arite));
                    }
                    let (a, b) = depile_deux(&mut st).ok_or_else(|| erreur_arite(nom, *arite))?;
                    f(a, b)
                } else {
                    return Err(ErreurEval::FonctionInconnue(nom.clone()));
                };
                st.push(v);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}

/// Dépile b puis a (a a été empilé en premier). None si moins de 2 valeurs.
fn depile_deux(st: &mut Vec<f64>) -> Option<(f64, f64)> {
    if st.len() < 2 {
        return None;
    }
    let b = st.pop()?;
    let a = st.pop()?;
    Some((a, b))
}

fn applique_binaire(op: OpBinaire, a: f64, b: f64) -> f64 {
    match op {
        OpBinaire::Plus => a + b,
        OpBinaire::Moins => a - b,
        OpBinaire::Fois => a * b,
        OpBinaire::Divise => a / b,
        // reste tronqué (signe du dividende), comme fmod
        OpBinaire::Modulo => a % b,
        OpBinaire::Puissance => puissance(a, b),
    }
}

fn erreur_arite(nom: &str, arite: usize) -> ErreurEval {
    ErreurEval::Arite {
        nom: nom.to_string(),
        arite,
    }
}
