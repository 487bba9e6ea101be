/// Running sums over pairs of numeric fields, shared by the closed-form
/// regression and correlation formulas.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PairSums {
    pub n: f64,
    pub x: f64,
    pub y: f64,
    pub xy: f64,
    pub xx: f64,
    pub yy: f64,
}

impl PairSums {
    pub fn collect<T, X, Y>(data: &[T], x: X, y: Y) -> Self
    where
        X: Fn(&T) -> f64,
        Y: Fn(&T) -> f64,
    {
        data.iter().fold(Self::default(), |acc, record| {
            let (x, y) = (x(record), y(record));
            Self {
                n: acc.n + 1.0,
                x: acc.x + x,
                y: acc.y + y,
                xy: acc.xy + x * y,
                xx: acc.xx + x * x,
                yy: acc.yy + y * y,
            }
        })
    }

    /// `n·Σxy - Σx·Σy`
    pub fn covariance_term(&self) -> f64 {
        self.n * self.xy - self.x * self.y
    }

    /// `n·Σx² - (Σx)²`
    pub fn x_variance_term(&self) -> f64 {
        self.n * self.xx - self.x * self.x
    }

    /// `n·Σy² - (Σy)²`
    pub fn y_variance_term(&self) -> f64 {
        self.n * self.yy - self.y * self.y
    }
}
