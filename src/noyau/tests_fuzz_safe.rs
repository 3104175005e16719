//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée vient avec sa valeur de référence
//!   (calculée en Rust sur l’arbre, sans passer par le texte)
//! - invariant clé : expression bien formée => Ok, et même f64 que la référence

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval::evaluer;
use super::tables::{fonction_binaire, fonction_unaire, puissance};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Texte + valeur attendue.
struct Gen {
    texte: String,
    valeur: f64,
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn gen_atom(rng: &mut Rng) -> Gen {
    match rng.pick(6) {
        0 => Gen {
            texte: "pi".into(),
            valeur: std::f64::consts::PI,
        },
        1 => Gen {
            texte: "e".into(),
            valeur: std::f64::consts::E,
        },
        2 => {
            // décimal simple : k/4 s’écrit exactement
            let k = rng.pick(40);
            let v = k as f64 / 4.0;
            Gen {
                texte: format!("{v}"),
                valeur: v,
            }
        }
        _ => {
            let n = rng.pick(10);
            Gen {
                texte: format!("{n}"),
                valeur: n as f64,
            }
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Gen {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(10) {
        0 => gen_atom(rng),
        1..=5 => {
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            let (sym, v) = match rng.pick(6) {
                0 => ("+", a.valeur + b.valeur),
                1 => ("-", a.valeur - b.valeur),
                2 => ("*", a.valeur * b.valeur),
                3 => ("/", a.valeur / b.valeur),
                4 => ("%", a.valeur % b.valeur),
                _ => (if rng.coin() { "^" } else { "**" }, puissance(a.valeur, b.valeur)),
            };
            Gen {
                texte: format!("({}{sym}{})", a.texte, b.texte),
                valeur: v,
            }
        }
        6 => {
            let a = gen_expr(rng, depth - 1);
            Gen {
                texte: format!("(-{})", a.texte),
                valeur: -a.valeur,
            }
        }
        7 | 8 => {
            let noms = ["sqrt", "sin", "cos", "tan", "abs", "round", "floor", "ceil", "log", "ln"];
            let nom = noms[rng.pick(noms.len() as u32) as usize];
            let f = fonction_unaire(nom).unwrap_or_else(|| panic!("{nom} absente"));
            let a = gen_expr(rng, depth - 1);
            Gen {
                texte: format!("{nom}({})", a.texte),
                valeur: f(a.valeur),
            }
        }
        _ => {
            let noms = ["pow", "min", "max"];
            let nom = noms[rng.pick(noms.len() as u32) as usize];
            let f = fonction_binaire(nom).unwrap_or_else(|| panic!("{nom} absente"));
            let a = gen_expr(rng, depth - 1);
            let b = gen_expr(rng, depth - 1);
            Gen {
                texte: format!("{nom}({}, {})", a.texte, b.texte),
                valeur: f(a.valeur, b.valeur),
            }
        }
    }
}

/// Texte aléatoire sur l’alphabet du tokenizer (souvent mal formé).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", ".", "+", "-", "*", "**", "/", "%", "^", "(", ")", ",", " ", "pi", "e", "sqrt",
        "max", "x",
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reference_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut finis = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 4);

        let v = evaluer(&g.texte).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        assert!(
            meme_valeur(v, g.valeur),
            "expr={:?} obtenu={v} attendu={}",
            g.texte,
            g.valeur
        );

        // deuxième passage : bit à bit identique
        let v2 = evaluer(&g.texte).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        assert!(meme_valeur(v, v2), "expr={:?} non déterministe", g.texte);

        if v.is_finite() {
            finis += 1;
        }
    }

    // On veut surtout des valeurs finies, sinon le fuzz ne “balaye” rien.
    assert!(finis > 30, "trop peu de résultats finis: {finis}");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s = gen_bruit(&mut rng, len);

        // Tout doit finir en Ok(f64) ou en erreur typée ; jamais en panique.
        match evaluer(&s) {
            Ok(_) => seen_ok += 1,
            Err(ErreurCalc::Lex(_) | ErreurCalc::Parse(_) | ErreurCalc::Eval(_)) => seen_err += 1,
        }

        // Même entrée => même verdict.
        assert_eq!(
            evaluer(&s).map(f64::to_bits).ok(),
            evaluer(&s).map(f64::to_bits).ok(),
            "s={s:?}"
        );
    }

    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
    assert!(seen_ok > 0, "aucun succès vu: bruit trop “sale”");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400 (exact en binaire)
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_unaires_empiles() {
    // 1000 moins unaires : associatifs à droite, sans récursion
    let expr = format!("{}7", "-".repeat(1000));
    assert_eq!(evaluer(&expr), Ok(7.0));

    let expr = format!("{}7", "-".repeat(999));
    assert_eq!(evaluer(&expr), Ok(-7.0));
}
