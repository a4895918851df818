/// The result of evaluating a line.
///
/// The accumulator is always an `f64`. A result is marked real once a `/` has
/// been applied, even if it is numerically whole, and is then displayed with a
/// fractional part.
///
/// # Example
/// ```
/// use lexcalc::evaluate;
///
/// let whole = evaluate("2+3*4").unwrap();
/// assert_eq!(whole, 20.0);
/// assert!(!whole.is_real());
/// assert_eq!(whole.to_string(), "20");
///
/// let divided = evaluate("8/2/2").unwrap();
/// assert_eq!(divided, 2.0);
/// assert!(divided.is_real());
/// assert_eq!(divided.to_string(), "2.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value: f64,
    real:  bool,
}

impl Number {
    /// Creates an integer-valued result.
    #[must_use]
    pub const fn integer(value: f64) -> Self {
        Self { value, real: false }
    }

    /// Creates a real-valued result.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self { value, real: true }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns `true` if a division contributed to this result.
    #[must_use]
    pub const fn is_real(self) -> bool {
        self.real
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.value
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.real {
            write!(f, "{:?}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
