//! Number formatting for the profit display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Round to a whole number and group digits in thousands with commas.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if rounded < 0.0 { format!("-{out}") } else { out }
}
