use std::fmt::Write as _;

/// Fractional digits kept from a label; `f64` carries no more precision than this.
pub const MAX_DECIMALS: usize = 15;

/// A display label split around its numeric magnitude, e.g. `"£33m"` →
/// `{ prefix: "£", magnitude: 33, rest: "m" }`.
///
/// The magnitude is the first run of digits, optionally followed by one decimal point and
/// more digits. Everything after that run is kept verbatim in `rest`, so text interleaved
/// between later digit groups survives re-composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelDescriptor {
    /// Literal text before the first digit.
    pub prefix: String,
    /// Parsed magnitude, `None` when the label has no digits.
    pub magnitude: Option<f64>,
    /// Minimum integer digits when composing; above `1` only for zero-padded labels
    /// such as `"007"`.
    pub pad_digits: usize,
    /// Digits after the decimal point in the source text, capped at [`MAX_DECIMALS`].
    pub decimals: usize,
    /// Literal text after the magnitude.
    pub rest: String,
}

impl LabelDescriptor {
    /// Split `label` once; formatting never re-parses it.
    pub fn parse(label: &str) -> Self {
        let Some(start) = label.find(|c: char| c.is_ascii_digit()) else {
            return Self {
                prefix: label.to_owned(),
                magnitude: None,
                pad_digits: 0,
                decimals: 0,
                rest: String::new(),
            };
        };

        let tail = &label[start..];
        let int_digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        let mut end = int_digits;
        let mut decimals = 0;
        if tail[end..].starts_with('.') {
            let frac = tail[end + 1..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if frac > 0 {
                decimals = frac.min(MAX_DECIMALS);
                end += 1 + frac;
            }
        }

        let pad_digits = if int_digits > 1 && tail.starts_with('0') {
            int_digits
        } else {
            1
        };
        let magnitude = tail[..end].parse::<f64>().ok().filter(|v| v.is_finite());
        Self {
            prefix: label[..start].to_owned(),
            magnitude,
            pad_digits,
            decimals,
            rest: tail[end..].to_owned(),
        }
    }

    /// Value the counter animates toward (`0` when the label has no magnitude).
    pub fn target(&self) -> f64 {
        self.magnitude.unwrap_or(0.0)
    }

    /// Round `value` down to the label's precision.
    pub fn floor_value(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        // Small bias keeps exact targets like 2.3 from flooring to 2.2.
        ((value * scale) + 1e-9).floor() / scale
    }

    /// Compose the display string for `value`.
    ///
    /// Labels without a magnitude show only their literal text.
    pub fn compose(&self, value: f64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.rest.len() + 8);
        out.push_str(&self.prefix);
        if self.magnitude.is_some() {
            let v = self.floor_value(value.max(0.0));
            let width = if self.decimals > 0 {
                self.pad_digits + 1 + self.decimals
            } else {
                self.pad_digits
            };
            let _ = write!(out, "{v:0width$.prec$}", prec = self.decimals);
        }
        out.push_str(&self.rest);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/label.rs"]
mod tests;
