// Formatting and input helpers shared across the engine and GUI.

// Colombian peso (es-CO) display conventions: "." groups thousands, "," separates decimals.
pub mod cop_format {
    // Formats a monetary value rounded to whole pesos, e.g. 1234567.8 -> "$ 1.234.568"
    pub fn format_currency(value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let rounded = value.round();
        let digits = group_thousands(rounded.abs() as u128);
        if rounded < 0.0 {
            format!("-$ {}", digits)
        } else {
            format!("$ {}", digits)
        }
    }

    // Formats a percentage with up to two decimals, e.g. 56.25 -> "56,25%", 3.0 -> "3%"
    pub fn format_percent(value: f64) -> String {
        let fixed = format!("{:.2}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        format!("{}%", trimmed.replace('.', ","))
    }

    // Value typed into a numeric form field. Anything that is not a finite number becomes 0.
    pub fn coerce_input(s: &str) -> f64 {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    fn group_thousands(mut n: u128) -> String {
        if n == 0 {
            return "0".to_string();
        }
        let mut groups = Vec::new();
        while n > 0 {
            groups.push(n % 1000);
            n /= 1000;
        }
        let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
        for group in groups.iter().rev() {
            out.push_str(&format!(".{:03}", group));
        }
        out
    }

}
