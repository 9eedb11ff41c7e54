use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("price {0} is negative")]
    NegativePrice(f64),
    #[error("price is not a finite number")]
    NonFinitePrice,
    #[error("unknown item '{0}'")]
    UnknownItem(String),
}

pub(crate) fn check_price(price: f64) -> Result<f64, PricingError> {
    if !price.is_finite() {
        return Err(PricingError::NonFinitePrice);
    }
    if price < 0.0 {
        return Err(PricingError::NegativePrice(price));
    }
    Ok(price)
}
