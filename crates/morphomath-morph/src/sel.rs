//! Structuring elements for 1D morphology
//!
//! A structuring element is an ordered list of integer offsets relative to a
//! reference location. The reference sits at index `(len - 1) / 2`, the
//! convention of the symmetric ball construction; the `+`/`-` halves used by
//! sequential scans rely on that symmetry.
//!
//! The `+` and `-` neighbourhoods follow Luc Vincent, "Morphological
//! Grayscale Reconstruction in Image Analysis: Applications and Efficient
//! Algorithms", IEEE TIP 2(2), 1993.

use crate::{MorphError, MorphResult};
use morphomath_core::Domain;
use std::str::FromStr;
use std::sync::LazyLock;

static UNIT_BALL: LazyLock<StructuringElement> = LazyLock::new(|| StructuringElement::ball(1));

/// The radius-1 ball `[-1, 0, 1]`
///
/// Used by geodesic reconstruction.
pub fn unit_ball() -> &'static StructuringElement {
    &UNIT_BALL
}

/// Restriction of a structuring element to one side of its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubDomain {
    /// All offsets
    #[default]
    Full,
    /// Offsets up to and including the reference (`+`)
    Plus,
    /// Offsets from the reference to the end (`-`)
    Minus,
}

impl FromStr for SubDomain {
    type Err = MorphError;

    fn from_str(s: &str) -> MorphResult<Self> {
        match s {
            "" => Ok(SubDomain::Full),
            "+" => Ok(SubDomain::Plus),
            "-" => Ok(SubDomain::Minus),
            other => Err(MorphError::InvalidSubDomain(other.to_string())),
        }
    }
}

/// Structuring element: a non-empty, ordered set of offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<i64>,
}

impl StructuringElement {
    /// Create a structuring element from explicit offsets
    pub fn new(offsets: Vec<i64>) -> MorphResult<Self> {
        if offsets.is_empty() {
            return Err(MorphError::InvalidSel(
                "a structuring element needs at least one offset".into(),
            ));
        }
        Ok(Self { offsets })
    }

    /// Create the ball `[-radius, radius]`
    pub fn ball(radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            offsets: (-r..=r).collect(),
        }
    }

    /// Number of offsets
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: construction rejects empty offset lists
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Index of the reference offset, `(len - 1) / 2`
    #[inline]
    pub fn half_length(&self) -> usize {
        (self.offsets.len() - 1) / 2
    }

    /// All offsets in order
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// Radius if this element is a ball `[-r, r]`
    pub fn ball_radius(&self) -> Option<u32> {
        let radius = u32::try_from(*self.offsets.last()?).ok()?;
        let r = i64::from(radius);
        let is_ball = self.offsets.len() as i64 == 2 * r + 1
            && self.offsets.iter().zip(-r..=r).all(|(&a, b)| a == b);
        is_ball.then_some(radius)
    }

    /// Offsets up to the reference location (`N+`)
    pub fn plus(&self) -> &[i64] {
        &self.offsets[..=self.half_length()]
    }

    /// Offsets from the reference location (`N-`)
    pub fn minus(&self) -> &[i64] {
        &self.offsets[self.offsets.len() - self.half_length() - 1..]
    }

    /// Offsets selected by `sub_domain`
    pub fn sub_offsets(&self, sub_domain: SubDomain) -> &[i64] {
        match sub_domain {
            SubDomain::Full => &self.offsets,
            SubDomain::Plus => self.plus(),
            SubDomain::Minus => self.minus(),
        }
    }
}

/// Positions a structuring element over a domain
///
/// Offsets that land outside the domain are dropped; there is no clamping,
/// wrap-around or padding at this layer.
#[derive(Debug, Clone, Copy)]
pub struct StructuringElementIterator<'a> {
    sel: &'a StructuringElement,
    domain: Domain,
}

impl<'a> StructuringElementIterator<'a> {
    pub fn new(sel: &'a StructuringElement, domain: Domain) -> Self {
        Self { sel, domain }
    }

    /// In-domain locations of the element centred at `location`
    pub fn iterate_at(
        &self,
        location: i64,
        sub_domain: SubDomain,
    ) -> impl Iterator<Item = i64> + 'a {
        let domain = self.domain;
        self.sel
            .sub_offsets(sub_domain)
            .iter()
            .filter_map(move |&offset| location.checked_add(offset))
            .filter(move |&l| domain.contains(l))
    }

    /// Like [`iterate_at`](Self::iterate_at) with a textual sub-domain token
    /// (`""`, `"+"` or `"-"`)
    pub fn iterate_at_token(
        &self,
        location: i64,
        token: &str,
    ) -> MorphResult<impl Iterator<Item = i64> + 'a> {
        let sub_domain = token.parse()?;
        Ok(self.iterate_at(location, sub_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_offsets() {
        let se = StructuringElement::ball(2);
        assert_eq!(se.offsets(), &[-2, -1, 0, 1, 2]);
        assert_eq!(se.len(), 5);
        assert_eq!(se.half_length(), 2);
        assert_eq!(se.ball_radius(), Some(2));
    }

    #[test]
    fn test_unit_ball() {
        assert_eq!(unit_ball().offsets(), &[-1, 0, 1]);
        assert!(std::ptr::eq(unit_ball(), unit_ball()));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            StructuringElement::new(vec![]),
            Err(MorphError::InvalidSel(_))
        ));
    }

    #[test]
    fn test_far_offsets_dropped() {
        let se = StructuringElement::new(vec![i64::MIN, 0, i64::MAX]).unwrap();
        let domain = Domain::new(0, 2).unwrap();
        let it = StructuringElementIterator::new(&se, domain);
        for x in domain.forward_iterator() {
            let locs: Vec<i64> = it.iterate_at(x, SubDomain::Full).collect();
            assert_eq!(locs, vec![x]);
        }

        let se = StructuringElement::new(vec![i64::MAX]).unwrap();
        let it = StructuringElementIterator::new(&se, domain);
        assert_eq!(it.iterate_at(2, SubDomain::Full).count(), 0);
        assert_eq!(se.ball_radius(), None);
    }

    #[test]
    fn test_plus_minus_halves() {
        let se = StructuringElement::ball(1);
        assert_eq!(se.plus(), &[-1, 0]);
        assert_eq!(se.minus(), &[0, 1]);
        let se = StructuringElement::ball(0);
        assert_eq!(se.plus(), &[0]);
        assert_eq!(se.minus(), &[0]);
    }

    #[test]
    fn test_ball_radius_detection() {
        assert_eq!(StructuringElement::new(vec![0]).unwrap().ball_radius(), Some(0));
        assert_eq!(StructuringElement::new(vec![-1, 1]).unwrap().ball_radius(), None);
        assert_eq!(StructuringElement::new(vec![0, 1, 2]).unwrap().ball_radius(), None);
    }

    #[test]
    fn test_sub_domain_parse() {
        assert_eq!("+".parse::<SubDomain>().unwrap(), SubDomain::Plus);
        assert_eq!("-".parse::<SubDomain>().unwrap(), SubDomain::Minus);
        assert_eq!("".parse::<SubDomain>().unwrap(), SubDomain::Full);
        assert_eq!(
            "*".parse::<SubDomain>(),
            Err(MorphError::InvalidSubDomain("*".into()))
        );
    }

    #[test]
    fn test_iterator_drops_out_of_domain() {
        let se = StructuringElement::ball(2);
        let domain = Domain::new(0, 5).unwrap();
        let it = StructuringElementIterator::new(&se, domain);
        assert_eq!(it.iterate_at(0, SubDomain::Full).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(it.iterate_at(3, SubDomain::Full).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(it.iterate_at(5, SubDomain::Full).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_iterator_sub_domains() {
        let se = StructuringElement::ball(1);
        let domain = Domain::new(0, 3).unwrap();
        let it = StructuringElementIterator::new(&se, domain);
        assert_eq!(it.iterate_at(0, SubDomain::Plus).collect::<Vec<_>>(), vec![0]);
        assert_eq!(it.iterate_at(2, SubDomain::Plus).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(it.iterate_at(3, SubDomain::Minus).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_iterator_bad_token() {
        let se = StructuringElement::ball(1);
        let it = StructuringElementIterator::new(&se, Domain::new(0, 3).unwrap());
        assert!(matches!(
            it.iterate_at_token(1, "x"),
            Err(MorphError::InvalidSubDomain(_))
        ));
        let locs: Vec<i64> = it.iterate_at_token(1, "-").unwrap().collect();
        assert_eq!(locs, vec![1, 2]);
    }
}
