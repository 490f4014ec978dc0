quantity!(
    /// Amount of money in the household's billing currency.
    Cost, via: f64, suffix: "BRL", precision: 2
);

impl Cost {
    /// Round the cost to cents, for presentation only.
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
