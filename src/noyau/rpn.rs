// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Convertir une suite de Tok en RPN prête pour eval_rpn
// - Résoudre précédence / associativité / moins unaire
// - Compter les arguments de chaque appel de fonction (arité)
//
// Règles:
// - Ident(name) suivi de '(' => appel de fonction (name doit être connu)
// - Ident(name) sinon        => constante (remplacée par sa valeur)
// - '+' / '-' quand on n’attend PAS une valeur => u+ / u-
//
// Précédence : u+ u- (4) > ^ ** (3) > * / % (2) > + - (1)
// Associatifs à droite : ^ ** u+ u-

use super::erreur::ErreurParse;
use super::jetons::Tok;
use super::tables::{constante, est_fonction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance, // ^ et **
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Plus,
    Moins,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RpnItem {
    Num(f64),
    Binaire(OpBinaire),
    Unaire(OpUnaire),
    /// arite >= 1, fixée à la parenthèse fermante.
    Appel { nom: String, arite: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operateur {
    Binaire(OpBinaire),
    Unaire(OpUnaire),
}

impl Operateur {
    fn precedence(self) -> u8 {
        match self {
            Operateur::Unaire(_) => 4,
            Operateur::Binaire(OpBinaire::Puissance) => 3,
            Operateur::Binaire(OpBinaire::Fois | OpBinaire::Divise | OpBinaire::Modulo) => 2,
            Operateur::Binaire(OpBinaire::Plus | OpBinaire::Moins) => 1,
        }
    }

    fn associatif_droite(self) -> bool {
        matches!(
            self,
            Operateur::Unaire(_) | Operateur::Binaire(OpBinaire::Puissance)
        )
    }

    fn item(self) -> RpnItem {
        match self {
            Operateur::Binaire(op) => RpnItem::Binaire(op),
            Operateur::Unaire(op) => RpnItem::Unaire(op),
        }
    }
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Debug)]
enum Pile {
    Op(Operateur),
    LPar,
    Fonction(String),
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("pow"), LPar, Num(2), Comma, Num(10), RPar]
///   rpn:    [Num(2), Num(10), Appel { nom: "pow", arite: 2 }]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<RpnItem>, ErreurParse> {
    let mut out: Vec<RpnItem> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // une entrée par '(' ouverte : true si elle ouvre un appel
    let mut paren_appel: Vec<bool> = Vec::new();
    // une entrée par appel ouvert : nombre d’arguments vus
    let mut appels: Vec<usize> = Vec::new();

    // “valeur” = nombre, constante ou expression fermée.
    // Sert à détecter le moins (et le plus) unaire.
    let mut prev_was_value = false;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(v) => {
                out.push(RpnItem::Num(*v));
                prev_was_value = true;
                marque_argument(&mut appels);
            }

            Tok::Ident(name) => {
                if matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    if !est_fonction(name) {
                        return Err(ErreurParse::FonctionInconnue(name.clone()));
                    }
                    ops.push(Pile::Fonction(name.clone()));
                    appels.push(0);
                    prev_was_value = false;
                } else {
                    let v = constante(name)
                        .ok_or_else(|| ErreurParse::IdentifiantInconnu(name.clone()))?;
                    out.push(RpnItem::Num(v));
                    prev_was_value = true;
                    marque_argument(&mut appels);
                }
            }

            Tok::LPar => {
                paren_appel.push(matches!(ops.last(), Some(Pile::Fonction(_))));
                ops.push(Pile::LPar);
                prev_was_value = false;
            }

            Tok::Comma => {
                if !depile_jusqu_a_lpar(&mut ops, &mut out)? {
                    return Err(ErreurParse::VirguleHorsAppel);
                }
                if !prev_was_value {
                    return Err(ErreurParse::ArgumentManquant);
                }
                let argc = appels.last_mut().ok_or(ErreurParse::VirguleHorsAppel)?;
                *argc += 1;
                prev_was_value = false;
            }

            Tok::RPar => {
                if !depile_jusqu_a_lpar(&mut ops, &mut out)? {
                    return Err(ErreurParse::ParentheseFermanteOrpheline);
                }
                ops.pop(); // '('

                if paren_appel.pop().unwrap_or(false) {
                    let arite = appels
                        .pop()
                        .filter(|&n| n > 0)
                        .ok_or(ErreurParse::ArgumentManquant)?;
                    match ops.pop() {
                        Some(Pile::Fonction(nom)) => out.push(RpnItem::Appel { nom, arite }),
                        _ => return Err(ErreurParse::AppelInvalide),
                    }
                }

                prev_was_value = true;
                marque_argument(&mut appels);
            }

            Tok::Plus
            | Tok::Minus
            | Tok::Star
            | Tok::Slash
            | Tok::Percent
            | Tok::Caret
            | Tok::StarStar => {
                let op = operateur(tok, prev_was_value);

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(Pile::Op(top)) = ops.last() {
                    let top = *top;
                    let (p_top, p_op) = (top.precedence(), op.precedence());
                    let doit_pop = p_top > p_op || (p_top == p_op && !op.associatif_droite());
                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(top.item());
                }

                ops.push(Pile::Op(op));
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => out.push(op.item()),
            // une fonction restante a forcément sa '(' non fermée au-dessus
            Pile::LPar | Pile::Fonction(_) => return Err(ErreurParse::ParentheseNonFermee),
        }
    }

    Ok(out)
}

/// Classe un jeton opérateur (binaire, ou unaire si aucune valeur ne précède).
fn operateur(tok: &Tok, prev_was_value: bool) -> Operateur {
    match tok {
        Tok::Plus if !prev_was_value => Operateur::Unaire(OpUnaire::Plus),
        Tok::Minus if !prev_was_value => Operateur::Unaire(OpUnaire::Moins),
        Tok::Plus => Operateur::Binaire(OpBinaire::Plus),
        Tok::Minus => Operateur::Binaire(OpBinaire::Moins),
        Tok::Star => Operateur::Binaire(OpBinaire::Fois),
        Tok::Slash => Operateur::Binaire(OpBinaire::Divise),
        Tok::Percent => Operateur::Binaire(OpBinaire::Modulo),
        _ => Operateur::Binaire(OpBinaire::Puissance),
    }
}

/// Premier argument vu dans l’appel courant : 0 -> 1.
fn marque_argument(appels: &mut [usize]) {
    if let Some(argc) = appels.last_mut() {
        if *argc == 0 {
            *argc = 1;
        }
    }
}

/// Dépile les opérateurs vers la sortie jusqu’à une '(' (laissée en place).
/// Renvoie false si la pile se vide sans trouver de '('.
fn depile_jusqu_a_lpar(ops: &mut Vec<Pile>, out: &mut Vec<RpnItem>) -> Result<bool, ErreurParse> {
    loop {
        match ops.last() {
            None => return Ok(false),
            Some(Pile::LPar) => return Ok(true),
            Some(Pile::Op(op)) => {
                out.push(op.item());
                ops.pop();
            }
            // une fonction est toujours sous sa propre '('
            Some(Pile::Fonction(_)) => return Err(ErreurParse::AppelInvalide),
        }
    }
}

/// Format utilitaire (debug) : RPN en texte.
pub fn format_rpn(rpn: &[RpnItem]) -> String {
    let mut out = Vec::with_capacity(rpn.len());
    for item in rpn {
        let s = match item {
            RpnItem::Num(v) => format!("{v}"),
            RpnItem::Binaire(op) => match op {
                OpBinaire::Plus => "+",
                OpBinaire::Moins => "-",
                OpBinaire::Fois => "*",
                OpBinaire::Divise => "/",
                OpBinaire::Modulo => "%",
                OpBinaire::Puissance => "^",
            }
            .to_string(),
            RpnItem::Unaire(OpUnaire::Plus) => "u+".to_string(),
            RpnItem::Unaire(OpUnaire::Moins) => "u-".to_string(),
            RpnItem::Appel { nom, arite } => format!("{nom}/{arite}"),
        };
        out.push(s);
    }
    out.join(" ")
}
