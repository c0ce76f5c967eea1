use trade_model::Code;

/// Parses a reference code cell.
///
/// Accepts plain digits and integral decimals such as `4.0`, which appear
/// when the source table was exported with a floating-point column.
pub(crate) fn parse_code_value(raw: &str) -> Option<Code> {
    let trimmed = raw.trim();
    if let Some(code) = Code::from_digits(trimmed) {
        return Some(code);
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        return Some(Code::new(value as u32));
    }
    None
}
