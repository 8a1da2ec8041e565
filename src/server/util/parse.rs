use serde_json::Value;

use crate::server::error::carousel::CarouselError;

/// Parses a raw JSON carousel order into an integer.
///
/// Integral floats such as `3.0` count as integers. Range checks are left to the
/// caller so that `0` can keep its "not in the carousel" meaning where needed.
///
/// # Arguments
/// - `value` - The JSON value supplied by the client
///
/// # Returns
/// - `Ok(None)` - `value` is `null` (or was absent)
/// - `Ok(Some(i64))` - `value` is an integral number
/// - `Err(CarouselError::InvalidPosition)` - Any other JSON value
pub fn parse_carousel_order(value: &Value) -> Result<Option<i64>, CarouselError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Ok(Some(integer));
            }

            match number.as_f64() {
                Some(float)
                    if float.is_finite()
                        && float.fract() == 0.0
                        && float >= i64::MIN as f64
                        && float <= i64::MAX as f64 =>
                {
                    Ok(Some(float as i64))
                }
                _ => Err(CarouselError::InvalidPosition(value.to_string())),
            }
        }
        _ => Err(CarouselError::InvalidPosition(value.to_string())),
    }
}
