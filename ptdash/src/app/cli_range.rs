use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

/// parses an inclusive range written as `lo,hi`, or a single value `v`
/// meaning `v,v`. bounds are not reordered.
fn parse_range<T>(s: &str) -> Result<RangeInclusive<T>, String>
where
    T: FromStr + Copy,
    T::Err: Display,
{
    let parts: Vec<&str> = s.split(',').collect();
    let parse = |v: &str| {
        v.trim()
            .parse::<T>()
            .map_err(|e| format!("invalid range bound '{v}': {e}"))
    };
    match parts.as_slice() {
        [v] => {
            let v = parse(*v)?;
            Ok(v..=v)
        }
        [lo, hi] => Ok(parse(*lo)?..=parse(*hi)?),
        _ => Err(format!("expected format: lo,hi, got: {s}")),
    }
}

pub fn parse_year_range(s: &str) -> Result<RangeInclusive<i32>, String> {
    parse_range(s)
}

pub fn parse_month_range(s: &str) -> Result<RangeInclusive<u32>, String> {
    let range = parse_range::<u32>(s)?;
    let valid = 1..=12;
    if !valid.contains(range.start()) || !valid.contains(range.end()) {
        Err(format!("months must be in range [1,12], but found {s}"))
    } else {
        Ok(range)
    }
}
