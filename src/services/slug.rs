//! URL slugs for catalog records.
//!
//! This is the only place the diacritic table lives. Record creation and the
//! SQL functions used by migrations both call into it.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::fmt::Display;

pub const MAX_SLUG_LEN: usize = 200;

const RANDOM_SUFFIX_MIN: u32 = 100_000;
const RANDOM_SUFFIX_MAX: u32 = 999_999;

static CANONICAL_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug pattern"));

/// Maps a lowercase Vietnamese letter to its base Latin letter.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ắ' | 'ằ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ấ' | 'ầ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'é' | 'è' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ế' | 'ề' | 'ể' | 'ễ' | 'ệ' => 'e',
        'í' | 'ì' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ó' | 'ò' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ố' | 'ồ' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ớ' | 'ờ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ú' | 'ù' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ứ' | 'ừ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ý' | 'ỳ' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

/// Converts free-form text into a base slug.
///
/// Letters are lowercased and Vietnamese diacritics folded to their base
/// letter. Anything outside `[a-z0-9]`, whitespace and `-` is dropped, and
/// runs of whitespace or hyphens become a single hyphen. The result never
/// starts or ends with a hyphen. It is empty when nothing alphanumeric
/// survives.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.trim().chars().map(fold_diacritic) {
        match ch {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            }
            '-' => pending_hyphen = true,
            c if c.is_whitespace() => pending_hyphen = true,
            _ => {}
        }
    }

    slug
}

/// Appends `suffix` to the base slug of `text`.
///
/// Unique whenever `suffix` is, so passing a primary key gives a slug that
/// cannot collide with another row's. A base too long for the result to fit
/// in `MAX_SLUG_LEN` is cut back to a word boundary first.
pub fn with_suffix(text: &str, suffix: impl Display) -> String {
    join(normalize(text), suffix)
}

/// Appends a random six digit number to the base slug of `text`.
///
/// Collisions are unlikely, not impossible. Callers must still insert under
/// a unique constraint and retry on conflict.
pub fn with_random_suffix(text: &str) -> String {
    with_random_suffix_from(text, &mut rand::thread_rng())
}

pub fn with_random_suffix_from<R: Rng>(text: &str, rng: &mut R) -> String {
    let suffix = rng.gen_range(RANDOM_SUFFIX_MIN..=RANDOM_SUFFIX_MAX);
    with_suffix(text, suffix)
}

/// True for a non-empty slug in canonical form that fits the column limit.
pub fn is_canonical(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LEN && CANONICAL_SLUG.is_match(slug)
}

fn join(base: String, suffix: impl Display) -> String {
    let suffix = suffix.to_string();
    let budget = MAX_SLUG_LEN.saturating_sub(suffix.len() + 1);
    let base = truncate_at_hyphen(&base, budget);
    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}

// `base` is a normalized slug, so it is ASCII and byte slicing is safe.
fn truncate_at_hyphen(base: &str, max_len: usize) -> &str {
    if base.len() <= max_len {
        return base;
    }
    if base.as_bytes()[max_len] == b'-' {
        return &base[..max_len];
    }
    let cut = &base[..max_len];
    match cut.rfind('-') {
        Some(idx) => &cut[..idx],
        None => cut,
    }
}
