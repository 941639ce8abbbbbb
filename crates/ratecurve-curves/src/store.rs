//! Sorted, deduplicated set of curve observations.

use std::ops::Index;

use serde::Serialize;
use tracing::debug;

use crate::error::{CurveError, CurveResult};
use crate::point::{CurvePoint, MarketQuote};

/// The point set a curve is built on.
///
/// Points are sorted ascending by `days` and no two share a day offset. The
/// store is never edited in place: [`CurvePointStore::with_rate`] returns a
/// rebuilt store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePointStore {
    points: Vec<CurvePoint>,
}

impl CurvePointStore {
    /// Builds a store from `(tenor, rate, days)` observations in any order.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidQuote` if a rate is not finite
    /// - `CurveError::DuplicateTenor` if two observations share `days`
    pub fn new<I, S>(observations: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (S, f64, u32)>,
        S: Into<String>,
    {
        let points = observations
            .into_iter()
            .map(|(tenor, rate, days)| CurvePoint::new(tenor, rate, days))
            .collect::<CurveResult<Vec<_>>>()?;
        Self::from_points(points)
    }

    /// Builds a store from market quotes, resolving missing day offsets.
    pub fn from_quotes(quotes: &[MarketQuote]) -> CurveResult<Self> {
        let points = quotes
            .iter()
            .map(CurvePoint::try_from)
            .collect::<CurveResult<Vec<_>>>()?;
        Self::from_points(points)
    }

    fn from_points(mut points: Vec<CurvePoint>) -> CurveResult<Self> {
        // Stable sort keeps input order among equal days for the error message.
        points.sort_by_key(|p| p.days);

        if let Some(pair) = points.windows(2).find(|w| w[0].days == w[1].days) {
            return Err(CurveError::duplicate_tenor(
                pair[0].days,
                pair[0].tenor.clone(),
                pair[1].tenor.clone(),
            ));
        }

        debug!(points = points.len(), "built curve point store");
        Ok(Self { points })
    }

    /// Returns a new store with the rate of `tenor` replaced.
    ///
    /// The whole store is rebuilt so every discount factor is rederived.
    ///
    /// # Errors
    ///
    /// - `CurveError::TenorNotFound` if no point carries the label
    /// - `CurveError::InvalidQuote` if `rate` is not finite
    pub fn with_rate(&self, tenor: &str, rate: f64) -> CurveResult<Self> {
        if !self.points.iter().any(|p| p.tenor == tenor) {
            return Err(CurveError::TenorNotFound {
                tenor: tenor.to_string(),
            });
        }

        Self::new(self.points.iter().map(|p| {
            let r = if p.tenor == tenor { rate } else { p.rate };
            (p.tenor.clone(), r, p.days)
        }))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// All points in ascending day order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Earliest point.
    #[must_use]
    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    /// Latest point.
    #[must_use]
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Finds a point by tenor label.
    #[must_use]
    pub fn find(&self, tenor: &str) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.tenor == tenor)
    }

    /// Day offsets as floats, for spline construction.
    #[must_use]
    pub fn days(&self) -> Vec<f64> {
        self.points.iter().map(|p| f64::from(p.days)).collect()
    }

    /// Rates in percent.
    #[must_use]
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }
}

impl Index<usize> for CurvePointStore {
    type Output = CurvePoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a CurvePointStore {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CurvePointStore {
        CurvePointStore::new([("2Y", 4.990, 730), ("3M", 5.382, 90), ("1Y", 5.445, 365)]).unwrap()
    }

    #[test]
    fn test_store_sorts_by_days() {
        let store = sample();
        assert_eq!(store.len(), 3);
        let days: Vec<u32> = store.iter().map(|p| p.days).collect();
        assert_eq!(days, vec![90, 365, 730]);
        assert_eq!(store.first().unwrap().tenor, "3M");
        assert_eq!(store.last().unwrap().tenor, "2Y");
        assert_eq!(store[1].tenor, "1Y");
    }

    #[test]
    fn test_store_derives_discount_factors() {
        for p in &sample() {
            assert_relative_eq!(
                p.discount_factor,
                (-p.rate / 100.0 * f64::from(p.days) / 365.0).exp(),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_duplicate_days_rejected() {
        let err = CurvePointStore::new([("1M", 5.318, 30), ("4W", 5.32, 28), ("30D", 5.3, 30)])
            .unwrap_err();
        assert_eq!(err, CurveError::duplicate_tenor(30, "1M", "30D"));
    }

    #[test]
    fn test_empty_store_is_allowed() {
        let store = CurvePointStore::new(Vec::<(String, f64, u32)>::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.first().is_none());
    }

    #[test]
    fn test_with_rate_rebuilds() {
        let store = sample();
        let edited = store.with_rate("1Y", 5.5).unwrap();

        assert_relative_eq!(edited.find("1Y").unwrap().rate, 5.5);
        assert_relative_eq!(
            edited.find("1Y").unwrap().discount_factor,
            (-0.055f64).exp(),
            epsilon = 1e-15
        );
        // Original untouched.
        assert_relative_eq!(store.find("1Y").unwrap().rate, 5.445);
    }

    #[test]
    fn test_with_rate_unknown_tenor() {
        assert_eq!(
            sample().with_rate("7Y", 4.0),
            Err(CurveError::TenorNotFound {
                tenor: "7Y".to_string()
            })
        );
    }

    #[test]
    fn test_from_quotes_resolves_tenors() {
        let store = CurvePointStore::from_quotes(&[
            MarketQuote::from_tenor("5Y", 4.352),
            MarketQuote::new("1W", 5.309, 7),
        ])
        .unwrap();
        assert_eq!(store.days(), vec![7.0, 1825.0]);
        assert_eq!(store.rates(), vec![5.309, 4.352]);
    }
}
