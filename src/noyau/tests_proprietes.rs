//! Tests de propriétés : résultats attendus, genres d’erreur, déterminisme.
//!
//! Les cas “précédence” sont comparés à la même expression écrite en Rust
//! (précédence standard, ^ à droite via powf imbriqués).

use rstest::rstest;

use super::erreur::GenreErreur;
use super::eval::{eval_rpn, evaluer};
use super::jetons::tokenize;
use super::rpn::to_rpn;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Précédence standard ------------------------ */

#[rstest]
#[case("2+3*4", 2.0 + 3.0 * 4.0)]
#[case("(2+3)*4", (2.0 + 3.0) * 4.0)]
#[case("2^3^2", 2f64.powf(3f64.powf(2.0)))]
#[case("2**3^2", 2f64.powf(3f64.powf(2.0)))]
#[case("1-2-3", (1.0 - 2.0) - 3.0)]
#[case("8/4/2", (8.0 / 4.0) / 2.0)]
#[case("7%4*3", (7.0 % 4.0) * 3.0)]
#[case("1+2*3^2-4/2", 1.0 + 2.0 * 3f64.powf(2.0) - 4.0 / 2.0)]
#[case("2*3%4", (2.0 * 3.0) % 4.0)]
#[case("10-2^2*3", 10.0 - 2f64.powf(2.0) * 3.0)]
#[case("1.5*2.25+0.125", 1.5 * 2.25 + 0.125)]
#[case("((((1))))+(2)", 3.0)]
fn precedence_standard(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Exemples de référence ------------------------ */

#[rstest]
#[case("-3+4", 1.0)]
#[case("sqrt(16)+1", 5.0)]
#[case("pow(2,10)", 1024.0)]
#[case("min(3,5)", 3.0)]
#[case("  2 +   2 ", 4.0)]
#[case("MAX(1, 2)", 2.0)]
fn exemples(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu);
}

#[test]
fn pi_a_la_precision_f64() {
    let v = eval_ok("pi");
    assert_eq!(v, std::f64::consts::PI);
    assert!(v.to_string().starts_with("3.14159265"));
}

/* ------------------------ Genres d’erreur ------------------------ */

#[rstest]
#[case("(1+2", GenreErreur::Parse)]
#[case("1+2)", GenreErreur::Parse)]
#[case("foo(1)", GenreErreur::Parse)]
#[case("1,2", GenreErreur::Parse)]
#[case("pi(2)", GenreErreur::Parse)]
#[case("tau", GenreErreur::Parse)]
#[case("max(,1)", GenreErreur::Parse)]
#[case("2#3", GenreErreur::Lex)]
#[case("3 ÷ 4", GenreErreur::Lex)]
#[case("1+", GenreErreur::Eval)]
#[case("max(1,2,3)", GenreErreur::Eval)]
#[case("4 4", GenreErreur::Eval)]
fn genre_d_erreur(#[case] expr: &str, #[case] attendu: GenreErreur) {
    match evaluer(expr) {
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, a donné {v}"),
        Err(e) => assert_eq!(e.genre(), attendu, "expr={expr:?} err={e}"),
    }
}

#[test]
fn litteral_hors_f64_est_lex() {
    let gros = format!("1{}", "0".repeat(400));
    for expr in [gros.clone(), format!("2*{gros}"), format!("max(1,{gros})")] {
        match evaluer(&expr) {
            Ok(v) => panic!("expr={expr:?} aurait dû échouer, a donné {v}"),
            Err(e) => assert_eq!(e.genre(), GenreErreur::Lex, "expr={expr:?} err={e}"),
        }
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[rstest]
#[case("sin(1)*cos(2)+tan(0.5)")]
#[case("0.1+0.2")]
#[case("pow(e,pi)-pi^e")]
#[case("0/0")]
#[case("ln(-1)")]
fn idempotence_bit_a_bit(#[case] expr: &str) {
    let a = eval_ok(expr);
    let b = eval_ok(expr);
    assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
}

/* ------------------------ Pile finale ------------------------ */

#[rstest]
#[case("1")]
#[case("-(-(1))")]
#[case("max(1,min(2,3))+abs(-4)*2")]
#[case("2^-sqrt(4)")]
#[case("((1+2)*(3+4))%5")]
fn rpn_acceptee_laisse_une_valeur(#[case] expr: &str) {
    let jetons = tokenize(expr).unwrap();
    let rpn = to_rpn(&jetons).unwrap();
    assert!(eval_rpn(&rpn).is_ok(), "expr={expr:?}");
}
