//! Tests fuzz safe : invariants + déterminisme sur des suites d’actions aléatoires.
//!
//! - RNG déterministe (seed fixe)
//! - longueur de suite bornée
//! - budget temps global
//! - invariants clés : au plus un point par opérande tapé, longueur bornée
//!   (+1 si le point final a été ajouté sur un opérande plein),
//!   opération jamais posée sur number1 vide, Clear => état initial

use std::time::{Duration, Instant};

use super::{apply, CalculatorAction, CalculatorOperation, CalculatorState, MAX_NUM_LENGTH};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_operation(rng: &mut Rng) -> CalculatorOperation {
    match rng.pick(4) {
        0 => CalculatorOperation::Add,
        1 => CalculatorOperation::Subtract,
        2 => CalculatorOperation::Multiply,
        _ => CalculatorOperation::Divide,
    }
}

/// Chiffres surreprésentés : sinon les opérandes restent trop courts.
fn gen_action(rng: &mut Rng, avec_calcul: bool) -> CalculatorAction {
    match rng.pick(16) {
        0..=7 => CalculatorAction::Number(rng.pick(10) as u8),
        8 | 9 => CalculatorAction::Decimal,
        10 | 11 => CalculatorAction::Operation(gen_operation(rng)),
        12 | 13 => CalculatorAction::Delete,
        14 if avec_calcul => CalculatorAction::Calculate,
        14 => CalculatorAction::Decimal,
        _ => CalculatorAction::Clear,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_operande(s: &str, ctx: &str) {
    // le point n’a pas de borne : un opérande plein peut encore le recevoir
    let max = if s.ends_with('.') {
        MAX_NUM_LENGTH + 1
    } else {
        MAX_NUM_LENGTH
    };
    assert!(s.len() <= max, "{ctx}: trop long {s:?}");
    assert!(
        s.matches('.').count() <= 1,
        "{ctx}: plusieurs points dans {s:?}"
    );
    assert!(
        s.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "{ctx}: caractère inattendu dans {s:?}"
    );
    assert!(!s.starts_with('.'), "{ctx}: point en tête {s:?}");
}

fn check_etat(avant: &CalculatorState, action: CalculatorAction, apres: &CalculatorState) {
    let ctx = format!("{avant:?} + {action:?}");
    check_operande(&apres.number1, &ctx);
    check_operande(&apres.number2, &ctx);

    if apres.operation.is_some() {
        assert!(!apres.number1.is_empty(), "{ctx}: opération sur number1 vide");
    }
    if !apres.number2.is_empty() {
        assert!(apres.operation.is_some(), "{ctx}: number2 sans opération");
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_saisie() {
    // Sans Calculate : les opérandes ne contiennent que des caractères tapés.
    let t0 = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(t0, Duration::from_secs(5));
        let mut s = CalculatorState::default();
        let n = 1 + rng.pick(40);
        for _ in 0..n {
            let a = gen_action(&mut rng, false);
            let next = apply(&s, a);
            check_etat(&s, a, &next);
            if a == CalculatorAction::Clear {
                assert_eq!(next, CalculatorState::default());
            }
            s = next;
        }
    }
}

#[test]
fn fuzz_calcul_total_et_deterministe() {
    // Avec Calculate : jamais de panique, résultat borné, et rejouer donne le même état.
    let t0 = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..1_000 {
        budget(t0, Duration::from_secs(5));
        let n = 1 + rng.pick(60);
        let actions: Vec<_> = (0..n).map(|_| gen_action(&mut rng, true)).collect();

        let mut s = CalculatorState::default();
        for a in &actions {
            let next = apply(&s, *a);
            if *a == CalculatorAction::Calculate && next != s {
                assert!(next.number1.chars().count() <= 7, "résultat {next:?}");
                assert!(next.number2.is_empty() && next.operation.is_none());
            }
            s = next;
        }

        let bis = actions
            .iter()
            .fold(CalculatorState::default(), |e, a| apply(&e, *a));
        assert_eq!(s, bis, "non déterministe pour {actions:?}");
    }
}

#[test]
fn fuzz_delete_ne_touche_qu_une_chose() {
    let t0 = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        budget(t0, Duration::from_secs(5));
        let mut s = CalculatorState::default();
        for _ in 0..rng.pick(20) {
            s = apply(&s, gen_action(&mut rng, true));
        }

        let d = apply(&s, CalculatorAction::Delete);
        let changes = [
            d.number1 != s.number1,
            d.number2 != s.number2,
            d.operation != s.operation,
        ]
        .iter()
        .filter(|c| **c)
        .count();

        let vide = s == CalculatorState::default();
        assert_eq!(changes, if vide { 0 } else { 1 }, "{s:?} -> {d:?}");
        if !s.number2.is_empty() {
            assert_eq!(d.number1, s.number1);
            assert_eq!(d.operation, s.operation);
        }
    }
}
