//! Formatting utilities for population, area, and other display values.

/// Group digits in threes (e.g., `67391582` -> `"67,391,582"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a population count for the table.
pub fn format_population(population: u64) -> String {
    group_thousands(population)
}

/// Format an area in km² (e.g., `"551,695 km²"`, `"2.02 km²"`).
///
/// Areas of 100 km² and above are rounded to whole kilometres; smaller
/// ones keep up to two decimals.
pub fn format_area(area: f64) -> String {
    if !area.is_finite() || area < 0.0 {
        return "-".to_string();
    }

    if area >= 100.0 {
        format!("{} km²", group_thousands(area.round() as u64))
    } else {
        let fixed = format!("{:.2}", area);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        format!("{} km²", trimmed)
    }
}

/// Join a list for display, or return `placeholder` when empty.
pub fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

/// Format the result counter (e.g., `"12 of 250 countries"`).
pub fn format_count(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{} countries", total)
    } else {
        format!("{} of {} countries", visible, total)
    }
}

/// Format the pager range (e.g., `"11-20 of 25"`). `page` is zero-based.
pub fn format_page_range(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "0 of 0".to_string();
    }
    let start = (page * page_size).min(total - 1) + 1;
    let end = (start - 1 + page_size).min(total);
    format!("{}-{} of {}", start, end, total)
}
