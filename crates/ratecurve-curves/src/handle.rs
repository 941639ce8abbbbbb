//! Shared access to the current curve snapshot.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::curve::Curve;
use crate::error::CurveResult;
use crate::policy::InterpolationPolicy;

/// Holder of the live curve for hosts with concurrent readers.
///
/// Readers take an `Arc` to the current snapshot and query it without
/// holding the lock. Writers build the replacement first and then swap the
/// reference, so a reader sees the whole old curve or the whole new one.
#[derive(Debug)]
pub struct CurveHandle {
    current: RwLock<Arc<Curve>>,
}

impl CurveHandle {
    /// Wraps an initial curve.
    #[must_use]
    pub fn new(curve: Curve) -> Self {
        Self {
            current: RwLock::new(Arc::new(curve)),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Curve> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the current snapshot, returning the previous one.
    pub fn replace(&self, curve: Curve) -> Arc<Curve> {
        let next = Arc::new(curve);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        debug!(points = previous.len(), "replaced curve snapshot");
        previous
    }

    /// Applies `f` to the current snapshot and installs the result.
    ///
    /// `f` runs without holding the lock. If another writer swapped the
    /// snapshot in the meantime, `f` is rerun on the newer one so no update
    /// is lost.
    pub fn update<F>(&self, f: F) -> CurveResult<Arc<Curve>>
    where
        F: Fn(&Curve) -> CurveResult<Curve>,
    {
        loop {
            let base = self.snapshot();
            let next = Arc::new(f(&base)?);

            let mut guard = self.current.write();
            if Arc::ptr_eq(&guard, &base) {
                *guard = Arc::clone(&next);
                debug!(points = next.len(), policy = %next.policy(), "installed curve snapshot");
                return Ok(next);
            }
            debug!("curve snapshot changed during update, retrying");
        }
    }

    /// Edits one quoted rate.
    pub fn update_rate(&self, tenor: &str, rate: f64) -> CurveResult<Arc<Curve>> {
        self.update(|curve| curve.with_rate(tenor, rate))
    }

    /// Switches the interpolation policy.
    pub fn set_policy(&self, policy: InterpolationPolicy) -> CurveResult<Arc<Curve>> {
        self.update(|curve| curve.with_policy(policy))
    }
}

impl From<Curve> for CurveHandle {
    fn from(curve: Curve) -> Self {
        Self::new(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CurveBuilder;
    use crate::error::CurveError;
    use crate::traits::RateCurve;

    fn curve() -> Curve {
        CurveBuilder::new()
            .add_quote("1Y", 5.445, 365)
            .add_quote("2Y", 4.990, 730)
            .build()
            .unwrap()
    }

    #[test]
    fn test_snapshot_survives_update() {
        let handle = CurveHandle::new(curve());
        let before = handle.snapshot();

        handle.update_rate("1Y", 6.0).unwrap();

        assert_eq!(before.rate_at(365.0).unwrap(), 5.445);
        assert_eq!(handle.snapshot().rate_at(365.0).unwrap(), 6.0);
    }

    #[test]
    fn test_failed_update_keeps_current() {
        let handle = CurveHandle::new(curve());
        let err = handle.update_rate("10Y", 4.0).unwrap_err();
        assert!(matches!(err, CurveError::TenorNotFound { .. }));
        assert_eq!(handle.snapshot().rate_at(365.0).unwrap(), 5.445);
    }

    #[test]
    fn test_set_policy() {
        let handle = CurveHandle::from(curve());
        handle.set_policy(InterpolationPolicy::CubicSpline).unwrap();
        let snap = handle.snapshot();
        assert_eq!(snap.policy(), InterpolationPolicy::CubicSpline);
        assert!(snap.spline_segments().is_some());
    }

    #[test]
    fn test_replace_returns_previous() {
        let handle = CurveHandle::new(curve());
        let next = curve().with_rate("2Y", 5.0).unwrap();
        let previous = handle.replace(next);
        assert_eq!(previous.rate_at(730.0).unwrap(), 4.990);
        assert_eq!(handle.snapshot().rate_at(730.0).unwrap(), 5.0);
    }

    #[test]
    fn test_handle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CurveHandle>();
        assert_send_sync::<Curve>();
    }
}
