//! Free-text ingredient line handling.
//!
//! Provider output gives ingredients as prose (`"2 cups chopped kale (stems
//! removed)"`). The shopping list needs just the item, and the recipe view
//! needs to rescale the quantities when the serving count changes.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex"));

static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*/\s*\d+|\d+\.\d+|\d+|[½⅓⅔¼¾⅕⅛]").expect("valid quantity regex")
});

static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)\b(
            to\s+taste|
            grams|g|kg|ml|l|oz|lb|
            cups|cup|tbsp|tsp|tablespoons|teaspoons|
            cloves|clove|pinch|handful|
            small|large|medium|
            can|cans|bottles|
            of|packed
        )\b",
    )
    .expect("valid unit regex")
});

static SCALABLE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)/([0-9]+)|[0-9]+\.[0-9]+|[0-9]+").expect("valid number regex")
});

/// Items that clean down to this many characters or fewer are noise.
const MIN_ITEM_CHARS: usize = 2;

/// Reduces an ingredient line to a lowercase item name.
///
/// Parenthesized notes, quantities and the unit vocabulary are removed;
/// what is left is whitespace-collapsed and lowercased.
///
/// ```
/// use eatwell::ingredients::clean;
///
/// assert_eq!(clean("2 cups chopped kale (stems removed)"), "chopped kale");
/// assert_eq!(clean("1/2 tsp of sea salt"), "sea salt");
/// ```
pub fn clean(raw: &str) -> String {
    let without_notes = PARENTHETICAL_RE.replace_all(raw, " ");
    let without_quantities = QUANTITY_RE.replace_all(&without_notes, " ");
    let without_units = strip_units(&without_quantities);

    without_units
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-' | '.'))
        .to_lowercase()
}

// Dropping a unit can join "to" and "taste", so repeat until nothing matches.
fn strip_units(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = UNIT_RE.replace_all(&current, " ").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Whether a cleaned item is long enough to keep.
pub fn is_meaningful(cleaned: &str) -> bool {
    cleaned.chars().count() > MIN_ITEM_CHARS
}

/// Multiplies every number in `text` by `multiplier`.
///
/// Fractions, decimals and integers are all recognized. Results keep at
/// most two decimals and drop trailing zeros, so `"1/2 cup"` doubled reads
/// `"1 cup"`.
pub fn scale_quantity(text: &str, multiplier: f64) -> String {
    SCALABLE_NUMBER_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let value = match (caps.get(1), caps.get(2)) {
                (Some(num), Some(den)) => {
                    let num: f64 = num.as_str().parse().unwrap_or(0.0);
                    let den: f64 = den.as_str().parse().unwrap_or(0.0);
                    if den == 0.0 {
                        return token.to_string();
                    }
                    num / den
                }
                _ => match token.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => return token.to_string(),
                },
            };
            format_quantity(value * multiplier)
        })
        .into_owned()
}

fn format_quantity(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
