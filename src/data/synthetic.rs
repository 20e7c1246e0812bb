//! Index, square and ratio sequences.

/// Exact rational number, kept in lowest terms.
pub type Ratio = num_rational::Ratio<i64>;

/// Number of points generated when no count is given.
pub const DEFAULT_POINTS: usize = 10;

/// Offset added to the index in the ratio denominator.
pub const RATIO_OFFSET: i64 = 5;

/// Nearest `f64` to an exact ratio.
pub fn ratio_to_f64(r: Ratio) -> f64 {
    let numer: f64 = num_traits::cast(*r.numer()).unwrap_or(f64::NAN);
    let denom: f64 = num_traits::cast(*r.denom()).unwrap_or(f64::NAN);
    numer / denom
}

/// Three index-aligned sequences describing one synthetic point each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticData {
    /// Independent variable `0..n`.
    pub index: Vec<i64>,
    /// Pointwise square of the index.
    pub square: Vec<i64>,
    /// Pointwise `index / (RATIO_OFFSET + index)`.
    pub ratio: Vec<Ratio>,
}

impl SyntheticData {
    /// Generate `n` points.
    ///
    /// Indices whose square does not fit in an `i64` end the sequence.
    pub fn generate(n: usize) -> Self {
        let index: Vec<i64> = (0..n)
            .map_while(num_traits::cast::<usize, i64>)
            .take_while(|i| i.checked_mul(*i).is_some())
            .collect();
        let square = index.iter().map(|&i| i * i).collect();
        let ratio = index
            .iter()
            .map(|&i| Ratio::new(i, RATIO_OFFSET + i))
            .collect();

        Self {
            index,
            square,
            ratio,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if no points were generated.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for SyntheticData {
    fn default() -> Self {
        Self::generate(DEFAULT_POINTS)
    }
}
