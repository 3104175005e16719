// src/noyau/jetons.rs

use super::erreur::ErreurLex;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (lettres ASCII seulement, normalisées en minuscules)
    // NOTE: le shunting-yard décidera si c’est un appel (suivi de '(') ou une constante.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,    // ^
    StarStar, // **

    LPar,
    RPar,
    Comma,
}

/// Remplace les glyphes “affichage” par leurs équivalents ASCII.
/// À faire AVANT `tokenize` : le tokenizer refuse × ÷ −.
pub fn normaliser_glyphes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect()
}

/// Espaces acceptés entre jetons : la classe `\s` d’un navigateur.
/// Différences avec `char::is_whitespace` : U+0085 refusé, U+FEFF accepté.
fn est_espace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.) : au plus un point par nombre
/// - identifiants [a-zA-Z]+ (normalisés en minuscules)
/// - opérateurs + - * / % ^ ** , ( )
///
/// Un second point arrête le nombre : "1.2.3" donne 1.2 puis .3.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLex> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_espace(c) {
            i += 1;
            continue;
        }

        // Nombre : chiffres + au plus un '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                    if points > 1 {
                        break;
                    }
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or(ErreurLex::NombreInvalide(txt))?;
            out.push(Tok::Num(v));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+ (pas de chiffres ni de '_')
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_ascii_lowercase()));
            continue;
        }

        // '**' avant '*'
        if c == '*' && chars.get(i + 1) == Some(&'*') {
            out.push(Tok::StarStar);
            i += 2;
            continue;
        }

        let tok = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '%' => Tok::Percent,
            '^' => Tok::Caret,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            ',' => Tok::Comma,
            _ => return Err(ErreurLex::CaractereInattendu(c)),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::StarStar => "**".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
