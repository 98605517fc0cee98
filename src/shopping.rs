//! Shopping lists derived from recipes.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::ingredients::{clean, is_meaningful};
use crate::model::{DailyPlan, Recipe};

const CHECKBOX: &str = "[ ]";

/// Cleans, deduplicates and sorts every ingredient across `recipes`.
///
/// The result does not depend on the order of `recipes`. Recipes sharing a
/// title are not merged; only their cleaned ingredient names are.
pub fn build_shopping_list(recipes: &[Recipe]) -> Vec<String> {
    let unique: BTreeSet<String> = recipes
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter())
        .map(|line| clean(line))
        .filter(|item| is_meaningful(item))
        .collect();

    let mut items: Vec<String> = unique.into_iter().collect();
    items.sort_by(|a, b| collate(a, b));
    items
}

/// Shopping list for a generated plan.
pub fn week_shopping_list(plan: &[DailyPlan]) -> Vec<String> {
    let recipes: Vec<Recipe> = plan
        .iter()
        .flat_map(|day| day.recipes())
        .cloned()
        .collect();
    build_shopping_list(&recipes)
}

/// Renders a list as clipboard-ready checklist lines (`"[ ] Kale"`).
pub fn to_checklist_text(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", CHECKBOX, capitalize(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(item: &str) -> String {
    let mut chars = item.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dictionary-style ordering: accents and case only break ties.
///
/// Folding covers Latin letters, ligatures included (`œ` sorts as `oe`).
/// Other scripts keep code point order.
fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'þ' => key.push_str("th"),
            other => key.push(fold_accent(other)),
        }
    }
    key
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' | 'ð' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
