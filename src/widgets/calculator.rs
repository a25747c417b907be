//! The lost-revenue calculator. Three bounded sliders feed one derived
//! figure; everything is recomputed from the current slider state on
//! every change, nothing is cached between updates.
//!
//! Slider values are kept as raw strings, the way a markup control
//! carries them, and parsed on demand. A malformed value is not
//! rejected: it parses to NaN, flows through the arithmetic and shows
//! up in the labels as "NaN"/"$NaN".

pub struct SliderSpec {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

pub const MISSED_CALLS: SliderSpec = SliderSpec {
    min: 0,
    max: 200,
    step: 5,
    default: 30,
};

pub const CONVERSION_RATE: SliderSpec = SliderSpec {
    min: 0,
    max: 100,
    step: 1,
    default: 20,
};

pub const AVG_VALUE: SliderSpec = SliderSpec {
    min: 0,
    max: 1000,
    step: 25,
    default: 150,
};

/// Leading-integer parse: optional sign, then decimal digits, anything
/// trailing ignored. No digits at all gives NaN.
pub fn parse_control(raw: &str) -> f64 {
    let s = raw.trim();

    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return f64::NAN;
    }

    digits[..end].parse::<f64>().map_or(f64::NAN, |v| sign * v)
}

pub struct Slider {
    raw: String,
    spec: SliderSpec,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            raw: spec.default.to_string(),
            spec,
        }
    }

    /// Anything goes, like assigning to a control's value attribute.
    pub fn set_raw(&mut self, raw: &str) {
        self.raw = raw.to_string();
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> f64 {
        parse_control(&self.raw)
    }

    pub fn increase(&mut self) {
        self.nudge(self.spec.step);
    }

    pub fn decrease(&mut self) {
        self.nudge(-self.spec.step);
    }

    // A NaN value stays NaN until reset; stepping has nothing to step from.
    fn nudge(&mut self, delta: i64) {
        let v = self.value();
        if v.is_nan() {
            return;
        }

        let v = (v as i64 + delta).clamp(self.spec.min, self.spec.max);
        self.raw = v.to_string();
    }

    pub fn reset(&mut self) {
        self.raw = self.spec.default.to_string();
    }
}

/// Labels exactly as they are displayed.
#[derive(Debug, PartialEq)]
pub struct Readout {
    pub missed_label: String,
    pub rate_label: String,
    pub avg_label: String,
    pub lost_revenue_label: String,
}

pub struct Calculator {
    pub missed_calls: Slider,
    pub conversion_rate: Slider,
    pub avg_value: Slider,

    active: usize,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            missed_calls: Slider::new(MISSED_CALLS),
            conversion_rate: Slider::new(CONVERSION_RATE),
            avg_value: Slider::new(AVG_VALUE),
            active: 0,
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < 3 {
            self.active = index;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    fn active_slider(&mut self) -> &mut Slider {
        match self.active {
            1 => &mut self.conversion_rate,
            2 => &mut self.avg_value,
            _ => &mut self.missed_calls,
        }
    }

    pub fn increase(&mut self) {
        self.active_slider().increase();
    }

    pub fn decrease(&mut self) {
        self.active_slider().decrease();
    }

    pub fn reset(&mut self) {
        self.missed_calls.reset();
        self.conversion_rate.reset();
        self.avg_value.reset();
    }

    pub fn lost_revenue(&self) -> f64 {
        let missed = self.missed_calls.value();
        let conversion = self.conversion_rate.value() / 100.0;
        let avg = self.avg_value.value();

        (missed * conversion * avg).round()
    }

    pub fn readout(&self) -> Readout {
        Readout {
            missed_label: format_number(self.missed_calls.value()),
            rate_label: format!("{}%", self.conversion_rate.raw()),
            avg_label: format!("${}", format_number(self.avg_value.value())),
            lost_revenue_label: format_currency(self.lost_revenue()),
        }
    }
}

fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", v as i64)
    }
}

/// "$1,234,567": thousands separators, no decimal places.
pub fn format_currency(v: f64) -> String {
    if v.is_nan() {
        return "$NaN".to_string();
    }

    let negative = v < 0.0;
    let digits = (v.abs() as i64).to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('$');
    if negative {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(missed: &str, rate: &str, avg: &str) -> Calculator {
        let mut c = Calculator::new();
        c.missed_calls.set_raw(missed);
        c.conversion_rate.set_raw(rate);
        c.avg_value.set_raw(avg);
        c
    }

    #[test]
    fn worked_example() {
        let c = calc("50", "20", "100");
        assert_eq!(c.lost_revenue(), 1000.0);
        assert_eq!(c.readout().lost_revenue_label, "$1,000");
    }

    #[test]
    fn zero_missed_calls_means_zero_revenue() {
        let c = calc("0", "20", "100");
        assert_eq!(c.readout().lost_revenue_label, "$0");
    }

    #[test]
    fn readout_label_affixes() {
        let c = calc("50", "20", "100");
        let r = c.readout();

        assert_eq!(r.missed_label, "50");
        assert_eq!(r.rate_label, "20%");
        assert_eq!(r.avg_label, "$100");
    }

    #[test]
    fn rate_label_echoes_the_raw_value() {
        // the rate label repeats the control verbatim, parsed or not
        let c = calc("50", "07", "100");
        assert_eq!(c.readout().rate_label, "07%");
    }

    #[test]
    fn result_rounds_to_whole_currency() {
        // 33 * 0.07 * 21 = 48.51
        let c = calc("33", "7", "21");
        assert_eq!(c.lost_revenue(), 49.0);
        assert_eq!(c.readout().lost_revenue_label, "$49");
    }

    #[test]
    fn malformed_input_propagates_nan() {
        let c = calc("banana", "20", "100");
        let r = c.readout();

        assert_eq!(r.missed_label, "NaN");
        assert_eq!(r.lost_revenue_label, "$NaN");
    }

    #[test]
    fn parse_control_mimics_leading_int_rules() {
        assert_eq!(parse_control("42"), 42.0);
        assert_eq!(parse_control("  42  "), 42.0);
        assert_eq!(parse_control("42px"), 42.0);
        assert_eq!(parse_control("12.9"), 12.0);
        assert_eq!(parse_control("-8"), -8.0);
        assert_eq!(parse_control("+8"), 8.0);
        assert!(parse_control("").is_nan());
        assert!(parse_control("px42").is_nan());
        assert!(parse_control("-").is_nan());
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(-1234.0), "$-1,234");
    }

    #[test]
    fn sliders_clamp_at_their_bounds() {
        let mut c = Calculator::new();

        c.conversion_rate.set_raw("100");
        c.select(1);
        c.increase();
        assert_eq!(c.conversion_rate.raw(), "100");

        c.conversion_rate.set_raw("0");
        c.decrease();
        assert_eq!(c.conversion_rate.raw(), "0");
    }

    #[test]
    fn stepping_a_nan_slider_is_inert() {
        let mut c = Calculator::new();
        c.missed_calls.set_raw("oops");
        c.select(0);
        c.increase();
        assert_eq!(c.missed_calls.raw(), "oops");

        c.reset();
        assert_eq!(c.missed_calls.raw(), "30");
    }

    #[test]
    fn default_readout_matches_startup_state() {
        let c = Calculator::new();
        let r = c.readout();

        assert_eq!(r.missed_label, "30");
        assert_eq!(r.rate_label, "20%");
        assert_eq!(r.avg_label, "$150");
        // 30 * 0.20 * 150
        assert_eq!(r.lost_revenue_label, "$900");
    }
}
