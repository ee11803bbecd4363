use num_traits::PrimInt;

/// Greatest common divisor by Euclid's algorithm
///
/// `gcd(0, n)` is `n`, so zero acts as the identity when folding.
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Fold a sequence of values into their common divisor
///
/// Returns `None` for an empty sequence. A single value is its own divisor.
pub fn gcd_of<T, I>(values: I) -> Option<T>
where
    T: PrimInt,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(gcd)
}
