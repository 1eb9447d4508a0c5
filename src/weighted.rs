use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use num_traits::float::FloatCore;

/// A value paired with a weight, standing for their product.
///
/// Equality, ordering and hashing all go through the product, so `Weighted::new(2.0, 0.5)` and
/// `Weighted::new(4.0, 0.25)` are interchangeable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Weighted<F = f64> {
    value: F,
    weight: F,
}

impl<F: FloatCore> Weighted<F> {
    pub fn new(value: F, weight: F) -> Self {
        Weighted { value, weight }
    }

    pub fn value(&self) -> F {
        self.value
    }

    pub fn weight(&self) -> F {
        self.weight
    }

    /// `value * weight`.
    #[inline]
    pub fn get(&self) -> F {
        self.value * self.weight
    }
}

impl<F: FloatCore> PartialEq for Weighted<F> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<F: FloatCore> PartialEq<F> for Weighted<F> {
    fn eq(&self, other: &F) -> bool {
        self.get() == *other
    }
}

impl<F: FloatCore> PartialOrd for Weighted<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<F: FloatCore> Hash for Weighted<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let product = self.get();
        // `0.0 == -0.0`, so both must hash alike
        let product = if product == F::zero() { F::zero() } else { product };
        product.integer_decode().hash(state);
    }
}

macro_rules! impl_from {
    ($($ty:ty)*) => {
        $(
            impl From<Weighted<$ty>> for $ty {
                fn from(weighted: Weighted<$ty>) -> $ty {
                    weighted.get()
                }
            }
        )*
    };
}
impl_from! { f32 f64 }

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn product() {
        let w = Weighted::new(2.0f64, 0.5);
        assert_eq!(w.value(), 2.0);
        assert_eq!(w.weight(), 0.5);
        assert_eq!(f64::from(w), 1.0);
        assert_eq!(Weighted::new(3.0f32, -2.0).get(), -6.0);
    }

    #[test]
    fn compares_by_product() {
        assert_eq!(Weighted::new(2.0f64, 0.5), Weighted::new(4.0f64, 0.25));
        assert_eq!(Weighted::new(2.0f64, 0.5), 1.0);
        assert!(Weighted::new(1.0f64, 3.0) > Weighted::new(2.0f64, 1.0));
        assert_ne!(Weighted::new(f64::NAN, 1.0), Weighted::new(f64::NAN, 1.0));
    }

    #[test]
    fn hash_follows_product() {
        assert_eq!(
            hash_of(&Weighted::new(2.0f64, 0.5)),
            hash_of(&Weighted::new(4.0f64, 0.25))
        );
        assert_eq!(
            hash_of(&Weighted::new(0.0f64, 1.0)),
            hash_of(&Weighted::new(-1.0f64, 0.0))
        );
        assert_ne!(
            hash_of(&Weighted::new(1.0f64, 1.0)),
            hash_of(&Weighted::new(1.0f64, 2.0))
        );
    }
}
