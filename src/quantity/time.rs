quantity!(Hours, via: f64, suffix: "h", precision: 1);
quantity!(Days, via: f64, suffix: "d", precision: 1);
quantity!(Years, via: f64, suffix: "yr", precision: 1);

impl Days {
    /// Billing month, as the tariff and the yield factor assume it.
    pub const ONE_MONTH: Self = Self(30.0);
}

impl From<Days> for Hours {
    fn from(days: Days) -> Self {
        Self(days.0 * 24.0)
    }
}
