//! Brazilian taxpayer documents
//!
//! A CPF has nine base digits followed by two check digits, a CNPJ has twelve
//! base digits followed by two check digits. Each check digit is a weighted
//! sum modulo 11 over the digits before it: a remainder below 2 gives `0`,
//! any other remainder `r` gives `11 - r`.
//!
//! Inputs are trimmed and the usual punctuation is ignored, so both
//! `529.982.247-25` and `52998224725` are valid CPFs.

use super::combinators::Predicate;

const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const CPF_SEPARATORS: &[char] = &['.', '-'];
const CNPJ_SEPARATORS: &[char] = &['.', '-', '/'];

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Extract exactly `N` decimal digits from `value`, skipping `separators`.
fn digits<const N: usize>(value: &str, separators: &[char]) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    let mut len = 0;
    for c in value.trim().chars() {
        if separators.contains(&c) {
            continue;
        }
        let d = c.to_digit(10)?;
        if len == N {
            return None;
        }
        out[len] = d as u8;
        len += 1;
    }
    (len == N).then_some(out)
}

/// The two check digits of a CPF with the given nine base digits.
///
/// Each element of `base` must be in `0..=9`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::cpf_check_digits;
///
/// assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
/// ```
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base, &CPF_FIRST_WEIGHTS);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended, &CPF_SECOND_WEIGHTS)]
}

/// The two check digits of a CNPJ with the given twelve base digits.
///
/// Each element of `base` must be in `0..=9`.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
/// ```
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base, &CNPJ_FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended, &CNPJ_SECOND_WEIGHTS)]
}

/// Whether `value` is a CPF with valid check digits.
pub fn valid_cpf(value: &str) -> bool {
    match digits::<11>(value, CPF_SEPARATORS) {
        Some(d) => {
            let mut base = [0u8; 9];
            base.copy_from_slice(&d[..9]);
            cpf_check_digits(&base) == [d[9], d[10]]
        }
        None => false,
    }
}

/// Whether `value` is a CNPJ with valid check digits.
pub fn valid_cnpj(value: &str) -> bool {
    match digits::<14>(value, CNPJ_SEPARATORS) {
        Some(d) => {
            let mut base = [0u8; 12];
            base.copy_from_slice(&d[..12]);
            cnpj_check_digits(&base) == [d[12], d[13]]
        }
        None => false,
    }
}

/// Predicate that checks if a string is a valid CPF.
#[derive(Clone, Copy, Default, Debug)]
pub struct Cpf;

impl Predicate<str> for Cpf {
    #[inline]
    fn check(&self, value: &str) -> bool {
        valid_cpf(value)
    }
}

impl Predicate<String> for Cpf {
    #[inline]
    fn check(&self, value: &String) -> bool {
        valid_cpf(value)
    }
}

/// Create a predicate that checks if a string is a valid CPF.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_cpf().check("529.982.247-25"));
/// assert!(!is_cpf().check("529.982.247-26"));
/// ```
pub fn is_cpf() -> Cpf {
    Cpf
}

/// Predicate that checks if a string is a valid CNPJ.
#[derive(Clone, Copy, Default, Debug)]
pub struct Cnpj;

impl Predicate<str> for Cnpj {
    #[inline]
    fn check(&self, value: &str) -> bool {
        valid_cnpj(value)
    }
}

impl Predicate<String> for Cnpj {
    #[inline]
    fn check(&self, value: &String) -> bool {
        valid_cnpj(value)
    }
}

/// Create a predicate that checks if a string is a valid CNPJ.
///
/// # Example
///
/// ```rust
/// use notifiable::predicate::*;
///
/// assert!(is_cnpj().check("11.222.333/0001-81"));
/// assert!(!is_cnpj().check("80288216000134"));
/// ```
pub fn is_cnpj() -> Cnpj {
    Cnpj
}
