//! # Typed per-particle parameter attachment
//!
//! Operators read and write auxiliary per-particle quantities without the
//! particle struct having to grow a field per operator. The store is a typed
//! key → `f64` map: keys are the [`ParamKey`] enum, so a typo is a compile
//! error rather than a silently missing attribute.
//!
//! Absence of a key is meaningful: an operator that requires a parameter
//! treats a particle without it as "not opted in" and leaves it alone.

use ahash::AHashMap;

/// Compile-time-checked keys for per-particle attached parameters.
///
/// Extending the crate with a new operator that needs its own per-particle
/// state means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Running minimum of the osculating semi-major axis.
    MinSma,
    /// Running maximum of the osculating semi-major axis.
    MaxSma,
}

/// Per-particle attachment store mapping [`ParamKey`] to a scalar value.
///
/// A fresh particle carries an empty store; operators that depend on a
/// parameter only act on particles where the user has [`set`](Self::set) it.
#[derive(Debug, Clone, Default)]
pub struct ParticleParams {
    values: AHashMap<ParamKey, f64>,
}

impl ParticleParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value attached under `key`, or `None` if the particle does not
    /// carry that parameter.
    pub fn get(&self, key: ParamKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Attach or overwrite the value under `key`.
    pub fn set(&mut self, key: ParamKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Detach `key`, returning the previous value if it was present.
    pub fn remove(&mut self, key: ParamKey) -> Option<f64> {
        self.values.remove(&key)
    }

    pub fn contains(&self, key: ParamKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod particle_params_test {
    use super::*;

    #[test]
    fn test_attach_read_detach() {
        let mut params = ParticleParams::new();
        assert!(params.is_empty());
        assert_eq!(params.get(ParamKey::MinSma), None);

        params.set(ParamKey::MinSma, 1.5);
        params.set(ParamKey::MaxSma, 2.5);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(ParamKey::MinSma), Some(1.5));
        assert_eq!(params.get(ParamKey::MaxSma), Some(2.5));

        params.set(ParamKey::MinSma, 0.5);
        assert_eq!(params.get(ParamKey::MinSma), Some(0.5));

        assert_eq!(params.remove(ParamKey::MinSma), Some(0.5));
        assert!(!params.contains(ParamKey::MinSma));
        assert!(params.contains(ParamKey::MaxSma));
        assert_eq!(params.remove(ParamKey::MinSma), None);
    }
}
