//! Multivariate Laurent polynomials and their quotients over symbolic atoms.
//!
//! Exponents are rational, coefficients are exact rationals. `exp` of a
//! polynomial argument splits into one [`Atom::Exp`] per term, which makes
//! `exp(a)·exp(b) = exp(a+b)` hold structurally.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CasError, Result};
use crate::expr::{Expr, Rational};
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

const MAX_DIVISION_STEPS: usize = 64;
const MAX_DIVISION_TERMS: usize = 256;
const MAX_GCD_TERMS: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Symbol(String),
    /// `exp(m)` for a coefficient-free monomial `m`.
    Exp(Monomial),
    /// A subterm the polynomial layer does not look inside (`sin u`, `log u`, radicals).
    Opaque(Expr),
}

impl Atom {
    pub fn mentions(&self, var: &str) -> bool {
        match self {
            Atom::Symbol(name) => name == var,
            Atom::Exp(m) => m.mentions(var),
            Atom::Opaque(e) => e.mentions(var),
        }
    }

    fn has_opaque(&self) -> bool {
        match self {
            Atom::Symbol(_) => false,
            Atom::Exp(m) => m.has_opaque(),
            Atom::Opaque(_) => true,
        }
    }

    fn collect_symbols(&self, out: &mut BTreeSet<String>) {
        match self {
            Atom::Symbol(name) => {
                out.insert(name.clone());
            }
            Atom::Exp(m) => m.collect_symbols(out),
            Atom::Opaque(e) => out.extend(e.free_symbols()),
        }
    }
}

/// A power product of atoms without coefficient. The empty product is `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(BTreeMap<Atom, Rational>);

impl Monomial {
    pub fn unit() -> Self {
        Monomial(BTreeMap::new())
    }

    pub fn atom(atom: Atom) -> Self {
        Monomial::power(atom, Rational::one())
    }

    pub fn power(atom: Atom, exp: Rational) -> Self {
        let mut factors = BTreeMap::new();
        if !exp.is_zero() {
            factors.insert(atom, exp);
        }
        Monomial(factors)
    }

    pub fn is_unit(&self) -> bool {
        self.0.is_empty()
    }

    pub fn factors(&self) -> impl Iterator<Item = (&Atom, &Rational)> + '_ {
        self.0.iter()
    }

    pub fn exponent(&self, atom: &Atom) -> Rational {
        self.0.get(atom).cloned().unwrap_or_else(Rational::zero)
    }

    /// The only atom with its exponent, if the monomial has exactly one.
    pub fn single(&self) -> Option<(&Atom, &Rational)> {
        if self.0.len() == 1 {
            self.0.iter().next()
        } else {
            None
        }
    }

    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut factors = self.0.clone();
        for (atom, exp) in &other.0 {
            match factors.entry(atom.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(exp.clone());
                }
                Entry::Occupied(mut slot) => {
                    let sum = slot.get() + exp;
                    if sum.is_zero() {
                        slot.remove();
                    } else {
                        *slot.get_mut() = sum;
                    }
                }
            }
        }
        Monomial(factors)
    }

    pub fn pow(&self, k: &Rational) -> Monomial {
        if k.is_zero() {
            return Monomial::unit();
        }
        Monomial(
            self.0
                .iter()
                .map(|(atom, exp)| (atom.clone(), exp * k))
                .collect(),
        )
    }

    pub fn inv(&self) -> Monomial {
        self.pow(&-Rational::one())
    }

    /// Total degree over symbol and opaque atoms; `exp` atoms have degree zero.
    pub fn degree(&self) -> Rational {
        self.0
            .iter()
            .filter(|(atom, _)| !matches!(atom, Atom::Exp(_)))
            .fold(Rational::zero(), |acc, (_, exp)| acc + exp)
    }

    /// Per-atom minimum of the exponents, absent atoms counting as zero.
    pub fn meet(&self, other: &Monomial) -> Monomial {
        let atoms: BTreeSet<&Atom> = self.0.keys().chain(other.0.keys()).collect();
        let mut factors = BTreeMap::new();
        for atom in atoms {
            let exp = self.exponent(atom).min(other.exponent(atom));
            if !exp.is_zero() {
                factors.insert(atom.clone(), exp);
            }
        }
        Monomial(factors)
    }

    pub fn mentions(&self, var: &str) -> bool {
        self.0.keys().any(|atom| atom.mentions(var))
    }

    pub fn has_opaque(&self) -> bool {
        self.0.keys().any(Atom::has_opaque)
    }

    fn collect_symbols(&self, out: &mut BTreeSet<String>) {
        for atom in self.0.keys() {
            atom.collect_symbols(out);
        }
    }

    fn retain(&mut self, keep: impl FnMut(&Atom, &mut Rational) -> bool) {
        self.0.retain(keep);
    }
}

/// Graded order used for display and division: higher degree first, then
/// higher exponents on earlier atoms.
pub fn display_cmp(a: &Monomial, b: &Monomial) -> Ordering {
    b.degree().cmp(&a.degree()).then_with(|| {
        let atoms: BTreeSet<&Atom> = a.0.keys().chain(b.0.keys()).collect();
        atoms
            .into_iter()
            .map(|atom| b.exponent(atom).cmp(&a.exponent(atom)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Poly {
    terms: BTreeMap<Monomial, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            terms: BTreeMap::new(),
        }
    }

    pub fn one() -> Self {
        Poly::constant(Rational::one())
    }

    pub fn constant(c: Rational) -> Self {
        Poly::term(c, Monomial::unit())
    }

    pub fn term(coeff: Rational, monomial: Monomial) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(monomial, coeff);
        }
        Poly { terms }
    }

    pub fn atom(atom: Atom) -> Self {
        Poly::term(Rational::one(), Monomial::atom(atom))
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(|c| c.is_one())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> + '_ {
        self.terms.iter()
    }

    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::zero()),
            1 => self
                .terms
                .get(&Monomial::unit())
                .cloned(),
            _ => None,
        }
    }

    pub fn as_term(&self) -> Option<(&Monomial, &Rational)> {
        if self.terms.len() == 1 {
            self.terms.iter().next()
        } else {
            None
        }
    }

    /// Terms in display order.
    pub fn sorted_terms(&self) -> Vec<(&Monomial, &Rational)> {
        let mut out: Vec<_> = self.terms.iter().collect();
        out.sort_by(|(a, _), (b, _)| display_cmp(a, b));
        out
    }

    pub fn leading(&self) -> Option<(&Monomial, &Rational)> {
        self.terms
            .iter()
            .min_by(|(a, _), (b, _)| display_cmp(a, b))
    }

    pub fn mentions(&self, var: &str) -> bool {
        self.terms.keys().any(|m| m.mentions(var))
    }

    pub fn has_opaque(&self) -> bool {
        self.terms.keys().any(Monomial::has_opaque)
    }

    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for m in self.terms.keys() {
            m.collect_symbols(&mut out);
        }
        out
    }

    fn atoms(&self) -> BTreeSet<Atom> {
        self.terms
            .keys()
            .flat_map(|m| m.factors().map(|(atom, _)| atom.clone()))
            .collect()
    }

    /// Every exponent is a non-negative integer.
    fn is_integral(&self) -> bool {
        self.terms.keys().all(|m| {
            m.factors()
                .all(|(_, e)| e.is_integer() && !e.is_negative())
        })
    }

    /// Coefficients of `self` as a polynomial in `atom`, lowest degree first.
    fn coefficients_in(&self, atom: &Atom) -> Option<Vec<Poly>> {
        let mut out: Vec<Poly> = Vec::new();
        for (m, c) in &self.terms {
            let e = m.exponent(atom);
            let k = e.to_integer().to_usize()?;
            if out.len() <= k {
                out.resize(k + 1, Poly::zero());
            }
            let rest = m.mul(&Monomial::power(atom.clone(), -e));
            add_term(&mut out[k].terms, rest, c.clone());
        }
        trim(&mut out);
        Some(out)
    }

    fn from_coefficients(coeffs: &[Poly], atom: &Atom) -> Poly {
        coeffs
            .iter()
            .enumerate()
            .fold(Poly::zero(), |acc, (k, c)| {
                let power = Monomial::power(atom.clone(), Rational::from_integer(BigInt::from(k)));
                acc.add(&c.mul_term(&Rational::one(), &power))
            })
    }

    /// `self` scaled to coprime integer coefficients with a positive leading term.
    fn primitive(&self) -> Poly {
        self.scale(&normalizing_scale(self))
    }

    pub fn add(&self, other: &Poly) -> Poly {
        let mut terms = self.terms.clone();
        for (m, c) in &other.terms {
            add_term(&mut terms, m.clone(), c.clone());
        }
        Poly { terms }
    }

    pub fn neg(&self) -> Poly {
        Poly {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }

    pub fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }

    pub fn scale(&self, k: &Rational) -> Poly {
        self.mul_term(k, &Monomial::unit())
    }

    pub fn mul_term(&self, coeff: &Rational, monomial: &Monomial) -> Poly {
        if coeff.is_zero() {
            return Poly::zero();
        }
        let mut terms = BTreeMap::new();
        for (m, c) in &self.terms {
            add_term(&mut terms, m.mul(monomial), c * coeff);
        }
        Poly { terms }
    }

    pub fn mul(&self, other: &Poly) -> Poly {
        let mut terms = BTreeMap::new();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &other.terms {
                add_term(&mut terms, ma.mul(mb), ca * cb);
            }
        }
        Poly { terms }
    }

    pub fn pow(&self, exp: u32) -> Poly {
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result.mul(&base);
            }
            n /= 2;
            if n > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Exact quotient `self / divisor` when the division leaves no remainder.
    ///
    /// Laurent monomials always divide, so the loop is bounded instead of
    /// relying on the degree to decrease.
    pub fn divide_exact(&self, divisor: &Poly) -> Option<Poly> {
        let (lead_m, lead_c) = divisor.leading()?;
        let lead_inv = lead_m.inv();
        let mut rem = self.clone();
        let mut quot = Poly::zero();
        for _ in 0..MAX_DIVISION_STEPS {
            let Some((m, c)) = rem.leading() else {
                return Some(quot);
            };
            let qm = m.mul(&lead_inv);
            let qc = c / lead_c;
            rem = rem.sub(&divisor.mul_term(&qc, &qm));
            add_term(&mut quot.terms, qm, qc);
            if rem.len() > MAX_DIVISION_TERMS {
                return None;
            }
        }
        rem.is_zero().then_some(quot)
    }

    fn fold_constant_atoms(&mut self) {
        if !self
            .terms
            .keys()
            .any(|m| m.factors().any(|(a, _)| is_constant_atom(a)))
        {
            return;
        }
        let mut terms = BTreeMap::new();
        for (m, c) in std::mem::take(&mut self.terms) {
            let mut coeff = c;
            let mut m = m;
            m.retain(|atom, exp| match (atom, exp.is_integer()) {
                (Atom::Opaque(Expr::Constant(base)), true) => match i32::try_from(exp.to_integer()) {
                    Ok(k) => {
                        coeff *= Pow::pow(base, k);
                        false
                    }
                    Err(_) => true,
                },
                _ => true,
            });
            add_term(&mut terms, m, coeff);
        }
        self.terms = terms;
    }
}

fn is_constant_atom(atom: &Atom) -> bool {
    matches!(atom, Atom::Opaque(Expr::Constant(_)))
}

/// Greatest common divisor, each atom taken as an independent indeterminate.
///
/// The result is primitive with a positive leading term. `None` when an
/// exponent is negative or fractional, or when the remainder sequence grows
/// past the term limit.
pub fn gcd(a: &Poly, b: &Poly) -> Option<Poly> {
    if !(a.is_integral() && b.is_integral()) {
        return None;
    }
    gcd_integral(a, b).map(|g| g.primitive())
}

fn gcd_integral(a: &Poly, b: &Poly) -> Option<Poly> {
    if a.is_zero() {
        return Some(b.clone());
    }
    if b.is_zero() {
        return Some(a.clone());
    }
    if a.len() > MAX_GCD_TERMS || b.len() > MAX_GCD_TERMS {
        return None;
    }
    let Some(var) = a.atoms().into_iter().chain(b.atoms()).min() else {
        return Some(Poly::one());
    };

    let (ua, ub) = (a.coefficients_in(&var)?, b.coefficients_in(&var)?);
    let (ca, cb) = (content(&ua)?, content(&ub)?);
    let common = gcd_integral(&ca, &cb)?;

    // primitive remainder sequence in `var`
    let mut r0 = primitive_part(&ua, &ca)?;
    let mut r1 = primitive_part(&ub, &cb)?;
    if r0.len() < r1.len() {
        std::mem::swap(&mut r0, &mut r1);
    }
    while !r1.is_empty() {
        let r = pseudo_remainder(&r0, &r1)?;
        r0 = r1;
        r1 = if r.is_empty() {
            r
        } else {
            let c = content(&r)?;
            primitive_part(&r, &c)?
        };
    }
    if r0.len() <= 1 {
        return Some(common);
    }
    Some(common.mul(&Poly::from_coefficients(&r0, &var)))
}

fn content(coeffs: &[Poly]) -> Option<Poly> {
    coeffs
        .iter()
        .try_fold(Poly::zero(), |acc, c| gcd_integral(&acc, c))
}

fn primitive_part(coeffs: &[Poly], content: &Poly) -> Option<Vec<Poly>> {
    coeffs.iter().map(|c| c.divide_exact(content)).collect()
}

/// `lc(b)^k · a mod b` over the coefficient ring.
fn pseudo_remainder(a: &[Poly], b: &[Poly]) -> Option<Vec<Poly>> {
    let n = b.len().checked_sub(1)?;
    let lead = &b[n];
    let mut r = a.to_vec();
    while r.len() > n {
        let shift = r.len() - 1 - n;
        let top = r[r.len() - 1].clone();
        r = r.iter().map(|c| c.mul(lead)).collect();
        for (i, bc) in b.iter().enumerate() {
            r[i + shift] = r[i + shift].sub(&bc.mul(&top));
        }
        trim(&mut r);
        if r.iter().any(|c| c.len() > MAX_DIVISION_TERMS) {
            return None;
        }
    }
    Some(r)
}

fn trim(coeffs: &mut Vec<Poly>) {
    while coeffs.last().is_some_and(Poly::is_zero) {
        coeffs.pop();
    }
}


fn add_term(terms: &mut BTreeMap<Monomial, Rational>, m: Monomial, c: Rational) {
    if c.is_zero() {
        return;
    }
    match terms.entry(m) {
        Entry::Vacant(slot) => {
            slot.insert(c);
        }
        Entry::Occupied(mut slot) => {
            let sum = slot.get() + c;
            if sum.is_zero() {
                slot.remove();
            } else {
                *slot.get_mut() = sum;
            }
        }
    }
}

/// A quotient `num / den` kept in reduced form: a single-term denominator is
/// folded into the numerator, otherwise the denominator is primitive with a
/// positive leading term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: Poly,
    den: Poly,
}

impl Fraction {
    pub fn zero() -> Self {
        Fraction::from_poly(Poly::zero())
    }

    pub fn one() -> Self {
        Fraction::from_poly(Poly::one())
    }

    pub fn constant(c: Rational) -> Self {
        Fraction::from_poly(Poly::constant(c))
    }

    pub fn from_poly(num: Poly) -> Self {
        Fraction {
            num,
            den: Poly::one(),
        }
    }

    pub fn atom_power(atom: Atom, exp: Rational) -> Self {
        Fraction::from_poly(Poly::term(Rational::one(), Monomial::power(atom, exp)))
    }

    pub fn new(num: Poly, den: Poly) -> Result<Self> {
        if den.is_zero() {
            return Err(CasError::DivisionByZero("zero denominator".into()));
        }
        Ok(Fraction { num, den }.reduced())
    }

    pub fn numer(&self) -> &Poly {
        &self.num
    }

    pub fn denom(&self) -> &Poly {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_polynomial(&self) -> bool {
        self.den.is_one()
    }

    pub fn as_constant(&self) -> Option<Rational> {
        if self.den.is_one() {
            self.num.as_constant()
        } else {
            None
        }
    }

    pub fn mentions(&self, var: &str) -> bool {
        self.num.mentions(var) || self.den.mentions(var)
    }

    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut out = self.num.free_symbols();
        out.extend(self.den.free_symbols());
        out
    }

    pub fn has_opaque(&self) -> bool {
        self.num.has_opaque() || self.den.has_opaque()
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.den == other.den {
            return Fraction {
                num: self.num.add(&other.num),
                den: self.den.clone(),
            }
            .reduced();
        }
        Fraction {
            num: self.num.mul(&other.den).add(&other.num.mul(&self.den)),
            den: self.den.mul(&other.den),
        }
        .reduced()
    }

    pub fn neg(&self) -> Fraction {
        Fraction {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    pub fn sub(&self, other: &Fraction) -> Fraction {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Fraction) -> Fraction {
        Fraction {
            num: self.num.mul(&other.num),
            den: self.den.mul(&other.den),
        }
        .reduced()
    }

    pub fn inv(&self) -> Result<Fraction> {
        Fraction::new(self.den.clone(), self.num.clone())
    }

    pub fn div(&self, other: &Fraction) -> Result<Fraction> {
        Ok(self.mul(&other.inv()?))
    }

    pub fn powi(&self, exp: i64) -> Result<Fraction> {
        let base = if exp < 0 { self.inv()? } else { self.clone() };
        let k = u32::try_from(exp.unsigned_abs())
            .map_err(|_| CasError::Unsupported(format!("exponent {exp} too large")))?;
        Ok(Fraction {
            num: base.num.pow(k),
            den: base.den.pow(k),
        }
        .reduced())
    }

    /// Sign of the display-leading numerator coefficient.
    pub fn leading_is_negative(&self) -> bool {
        self.num.leading().is_some_and(|(_, c)| c.is_negative())
    }

    fn reduced(mut self) -> Fraction {
        self.num.fold_constant_atoms();
        self.den.fold_constant_atoms();
        if self.num.is_zero() {
            return Fraction::zero();
        }
        if let Some((m, c)) = self.den.as_term() {
            let (inv_c, inv_m) = (c.recip(), m.inv());
            return Fraction::from_poly(self.num.mul_term(&inv_c, &inv_m));
        }

        // Strip the monomial content of the denominator.
        let content = self
            .den
            .terms()
            .map(|(m, _)| m.clone())
            .reduce(|acc, m| acc.meet(&m))
            .unwrap_or_default();
        if !content.is_unit() {
            let inv = content.inv();
            self.den = self.den.mul_term(&Rational::one(), &inv);
            self.num = self.num.mul_term(&Rational::one(), &inv);
        }

        let scale = normalizing_scale(&self.den);
        if !scale.is_one() {
            self.den = self.den.scale(&scale);
            self.num = self.num.scale(&scale);
        }

        if let Some(ratio) = proportional(&self.num, &self.den) {
            return Fraction::from_poly(ratio);
        }
        if let Some(quot) = self.num.divide_exact(&self.den) {
            return Fraction::from_poly(quot);
        }
        match self.cancel_common_factor() {
            Some(cancelled) => cancelled,
            None => self,
        }
    }

    /// Divide numerator and denominator by their polynomial gcd, when it is
    /// not a constant.
    fn cancel_common_factor(&self) -> Option<Fraction> {
        if self.num.len() < 2 || self.num.len() > MAX_GCD_TERMS || self.den.len() > MAX_GCD_TERMS {
            return None;
        }
        let shift = self
            .num
            .terms()
            .map(|(m, _)| m.clone())
            .reduce(|acc, m| acc.meet(&m))?;
        let num = self.num.mul_term(&Rational::one(), &shift.inv());
        let g = gcd(&num, &self.den)?;
        if g.as_constant().is_some() {
            return None;
        }
        let num = num.divide_exact(&g)?.mul_term(&Rational::one(), &shift);
        let den = self.den.divide_exact(&g)?;
        Some(Fraction { num, den }.reduced())
    }
}

/// Factor that turns the coefficients of `poly` into coprime integers.
fn primitive_scale(poly: &Poly) -> Rational {
    let mut lcm = BigInt::one();
    let mut gcd = BigInt::zero();
    for (_, c) in poly.terms() {
        lcm = lcm.lcm(c.denom());
        gcd = gcd.gcd(c.numer());
    }
    if gcd.is_zero() {
        return Rational::one();
    }
    Rational::new(lcm, gcd)
}

/// [`primitive_scale`] with the sign that makes the leading term positive.
fn normalizing_scale(poly: &Poly) -> Rational {
    let scale = primitive_scale(poly);
    if poly
        .leading()
        .is_some_and(|(_, c)| (c * &scale).is_negative())
    {
        -scale
    } else {
        scale
    }
}

/// `Some(r)` when `num = r·den` for a single term `r`.
fn proportional(num: &Poly, den: &Poly) -> Option<Poly> {
    if num.len() != den.len() {
        return None;
    }
    let (dm, dc) = den.leading()?;
    let dm_inv = dm.inv();
    num.terms().find_map(|(m, c)| {
        let ratio = Poly::term(c / dc, m.mul(&dm_inv));
        (den.mul(&ratio) == *num).then_some(ratio)
    })
}

/// Exact `q`-th root of a non-negative integer, if there is one.
pub fn exact_root(value: &BigInt, q: u32) -> Option<BigInt> {
    if value.is_negative() {
        if q % 2 == 0 {
            return None;
        }
        return exact_root(&-value, q).map(|r| -r);
    }
    let root = value.nth_root(q);
    (Pow::pow(&root, q) == *value).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Poly {
        Poly::atom(Atom::Symbol(name.into()))
    }

    #[test]
    fn binomial_square_has_three_terms() {
        let p = sym("x").add(&sym("y")).pow(2);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn proportional_quotient_collapses() {
        let den = sym("x").add(&sym("y"));
        let num = den.scale(&Rational::from_integer(3.into()));
        let f = Fraction::new(num, den).unwrap();
        assert_eq!(f.as_constant(), Some(Rational::from_integer(3.into())));
    }

    #[test]
    fn difference_of_squares_divides() {
        let x = sym("x");
        let y = sym("y");
        let num = x.mul(&x).sub(&y.mul(&y));
        let f = Fraction::new(num, x.add(&y)).unwrap();
        assert!(f.is_polynomial());
        assert_eq!(*f.numer(), x.sub(&y));
    }

    #[test]
    fn gcd_finds_shared_binomial() {
        let (x, y, one) = (sym("x"), sym("y"), Poly::one());
        let a = x.add(&y).mul(&x.add(&one));
        let b = x.add(&y).mul(&y.add(&one)).scale(&Rational::from_integer((-6).into()));
        assert_eq!(gcd(&a, &b), Some(x.add(&y)));
        assert_eq!(gcd(&x.add(&one), &y.add(&one)), Some(Poly::one()));
    }

    #[test]
    fn gcd_needs_nonnegative_integer_exponents() {
        let inv_x = Poly::term(
            Rational::one(),
            Monomial::power(Atom::Symbol("x".into()), -Rational::one()),
        );
        assert_eq!(gcd(&inv_x.add(&Poly::one()), &sym("y")), None);
    }

    #[test]
    fn shared_factor_cancels() {
        let (x, y, one) = (sym("x"), sym("y"), Poly::one());
        let den = x.mul(&x).add(&x.mul(&y)).add(&x).add(&y);
        let f = Fraction::new(x.add(&y), den).unwrap();
        assert!(f.numer().is_one());
        assert_eq!(*f.denom(), x.add(&one));

        // a monomial factor on the numerator survives the cancellation
        let num = x.mul(&x).mul(&y).add(&x.mul(&y).mul(&y));
        let den = x.add(&y).mul(&y.add(&one));
        let f = Fraction::new(num, den).unwrap();
        assert_eq!(*f.numer(), x.mul(&y));
        assert_eq!(*f.denom(), y.add(&one));
    }

    #[test]
    fn display_order_prefers_higher_degree() {
        let x2 = Monomial::power(Atom::Symbol("x".into()), Rational::from_integer(2.into()));
        let y = Monomial::atom(Atom::Symbol("y".into()));
        assert_eq!(display_cmp(&x2, &y), Ordering::Less);
        assert_eq!(display_cmp(&y, &Monomial::unit()), Ordering::Less);
    }

    #[test]
    fn roots_are_exact_or_absent() {
        assert_eq!(exact_root(&BigInt::from(27), 3), Some(BigInt::from(3)));
        assert_eq!(exact_root(&BigInt::from(-8), 3), Some(BigInt::from(-2)));
        assert_eq!(exact_root(&BigInt::from(2), 2), None);
    }
}
