/// `price` with `percent` taken off. A zero percent returns the price untouched;
/// percent bounds are enforced by the rule parser, not here.
pub fn discounted_price(price: f64, percent: f64) -> f64 {
    if percent == 0.0 {
        return price;
    }
    (100.0 - percent) * price / 100.0
}
