/*!
 * Number-aware text utilities.
 *
 * Source strings that differ only in their numbers ("Version 3.0" and
 * "Version 3.1") share a shape key, and an existing translation can be
 * carried over by relocating the new numbers into it.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal digits of any script (general category Nd)
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Nd}$").unwrap());

/// Punctuation of any kind (general categories Pc, Pd, Ps, Pe, Pi, Pf, Po)
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}$").unwrap());

fn in_class(class: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(c.encode_utf8(&mut buf))
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && in_class(&DECIMAL_DIGIT, c))
}

fn is_digit_friendly(c: char) -> bool {
    c.is_whitespace() || in_class(&PUNCTUATION, c)
}

fn digit_at(s: &[char], i: usize) -> bool {
    s.get(i).is_some_and(|&c| is_decimal_digit(c))
}

fn friendly_at(s: &[char], i: usize) -> bool {
    s.get(i).is_some_and(|&c| is_digit_friendly(c))
}

/// Length of the number span starting at char `i`, 0 if there is none.
pub(crate) fn span_len(s: &[char], i: usize) -> usize {
    if !digit_at(s, i) {
        return 0;
    }

    let mut end = i;
    loop {
        end += 1;
        let continues = digit_at(s, end)
            || (friendly_at(s, end)
                && (digit_at(s, end + 1) || (friendly_at(s, end + 1) && digit_at(s, end + 2))));
        if !continues {
            break;
        }
    }
    end - i
}

/// Length in chars of the number span starting at char index `i` of `s`.
///
/// A span starts on a digit and extends over digits and over at most two
/// punctuation or whitespace characters that are followed by another digit,
/// so "3.0", "1,234" and "10 000" are single spans. Returns 0 when `i` is out
/// of bounds or not on a digit.
pub fn number_span_length(s: &str, i: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    span_len(&chars, i)
}

/// Shape of `key` with every number span replaced by a single `'0'`.
///
/// The character right after each span is consumed along with it. Returns
/// the empty string when `key` holds no number at all.
pub fn zeroed_shape(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut zeroed = String::with_capacity(key.len());
    let mut met_number = false;

    let mut i = 0;
    while i < chars.len() {
        let len = span_len(&chars, i);
        if len > 0 {
            zeroed.push('0');
            met_number = true;
            i += len + 1;
        } else {
            zeroed.push(chars[i]);
            i += 1;
        }
    }

    if met_number { zeroed } else { String::new() }
}

fn count_spans(s: &[char]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < s.len() {
        let len = span_len(s, i);
        if len > 0 {
            count += 1;
            i += len;
        }
        i += 1;
    }
    count
}

/// Pair up the numbers of `old_source` and `new_source`, walking both in
/// lock-step. `None` when the two strings do not carry the same count of
/// numbers at corresponding positions.
fn number_pairs(old_source: &[char], new_source: &[char]) -> Option<Vec<(Vec<char>, String)>> {
    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < old_source.len() {
        let m = span_len(old_source, i);
        if m > 0 {
            let n = span_len(new_source, j);
            if n == 0 {
                return None;
            }
            pairs.push((
                old_source[i..i + m].to_vec(),
                new_source[j..j + n].iter().collect(),
            ));
            i += m;
            j += n;
        }
        i += 1;
        j += 1;
    }

    if count_spans(new_source) != pairs.len() {
        return None;
    }
    Some(pairs)
}

/// Carry `old_translation` of `old_source` over to `new_source`, which
/// differs from it only in its numbers.
///
/// Every number of the old source found in the translation is replaced with
/// its counterpart from the new source. Numbers that could not be placed are
/// appended as `" {new?}"`, and numbers that were identical in the old source
/// but differ in the new one are flagged as `" {a or b?}"`, leaving the final
/// decision to the translator.
///
/// When the two sources do not hold the same numbers in the same order the
/// translation is returned unchanged.
pub fn realign(old_translation: &str, old_source: &str, new_source: &str) -> String {
    let old_source: Vec<char> = old_source.chars().collect();
    let new_source: Vec<char> = new_source.chars().collect();
    let Some(pairs) = number_pairs(&old_source, &new_source) else {
        debug!("Number layout differs between source revisions, keeping translation as is");
        return old_translation.to_string();
    };
    let (old_numbers, new_numbers): (Vec<Vec<char>>, Vec<String>) = pairs.into_iter().unzip();
    let p = old_numbers.len();

    let translation: Vec<char> = old_translation.chars().collect();
    let mut attempt: Vec<char> = Vec::with_capacity(translation.len());
    let mut met = vec![false; p];
    let mut matched_yet = vec![0usize; p];

    for (i, &c) in translation.iter().enumerate() {
        attempt.push(c);
        for k in 0..p {
            if old_numbers[k].get(matched_yet[k]) == Some(&c) {
                matched_yet[k] += 1;
            } else {
                matched_yet[k] = 0;
            }
        }

        // First try numbers not placed yet, then any number.
        for pass in 0..2 {
            let mut best: Option<usize> = None;
            for k in 0..p {
                let full = matched_yet[k] == old_numbers[k].len()
                    && span_len(&translation, i + 1 - matched_yet[k]) == matched_yet[k];
                if (!met[k] || pass > 0) && full && best.is_none_or(|b| matched_yet[k] > matched_yet[b]) {
                    best = Some(k);
                }
            }
            if let Some(best) = best {
                attempt.truncate(attempt.len() - matched_yet[best]);
                attempt.extend(new_numbers[best].chars());
                met[best] = true;
                matched_yet.fill(0);
                break;
            }
        }
    }

    let mut result: String = attempt.into_iter().collect();
    for k in 0..p {
        if !met[k] {
            result.push_str(" {");
            result.push_str(&new_numbers[k]);
            result.push_str("?}");
        }
    }
    for k in 0..p {
        for ell in 0..p {
            if k != ell && old_numbers[k] == old_numbers[ell] && new_numbers[k] < new_numbers[ell] {
                result.push_str(" {");
                result.push_str(&new_numbers[k]);
                result.push_str(" or ");
                result.push_str(&new_numbers[ell]);
                result.push_str("?}");
            }
        }
    }
    result
}
