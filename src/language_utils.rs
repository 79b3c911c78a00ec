use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for catalog language codes
///
/// Catalogs name their languages with an ISO 639 code, optionally followed
/// by a territory: "de", "de_DE", "pt-BR", "zh_CN". These helpers validate
/// and normalize such codes.
/// Split a catalog language code into its language and territory parts
pub fn split_language_code(code: &str) -> (String, Option<String>) {
    let trimmed = code.trim();
    match trimmed.split_once(['_', '-']) {
        Some((language, territory)) if !territory.is_empty() => {
            (language.to_lowercase(), Some(territory.to_uppercase()))
        }
        Some((language, _)) => (language.to_lowercase(), None),
        None => (trimmed.to_lowercase(), None),
    }
}

/// Look up the ISO language of a bare (territory-less) code
fn lookup_language(code: &str) -> Option<Language> {
    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code).or_else(|| {
            // ISO 639-2/B codes that differ from their 639-2/T counterpart
            let part2t = match code {
                "fre" => "fra",
                "ger" => "deu",
                "dut" => "nld",
                "gre" => "ell",
                "chi" => "zho",
                "cze" => "ces",
                "ice" => "isl",
                "alb" => "sqi",
                "arm" => "hye",
                "baq" => "eus",
                "bur" => "mya",
                "per" => "fas",
                "geo" => "kat",
                "may" => "msa",
                "mac" => "mkd",
                "rum" => "ron",
                "slo" => "slk",
                "wel" => "cym",
                _ => return None,
            };
            Language::from_639_3(part2t)
        }),
        _ => None,
    }
}

/// Validate a catalog language code such as "de" or "pt_BR"
pub fn validate_language_code(code: &str) -> Result<()> {
    let (language, territory) = split_language_code(code);
    if lookup_language(&language).is_none() {
        return Err(anyhow!("Invalid language code: {}", code));
    }
    if let Some(territory) = territory {
        if !territory.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow!("Invalid territory in language code: {}", code));
        }
    }
    Ok(())
}

/// Normalize a catalog language code to the `ll_CC` form
///
/// The language part becomes its ISO 639-1 code when one exists, otherwise
/// its ISO 639-2/T code.
pub fn normalize_language_code(code: &str) -> Result<String> {
    validate_language_code(code)?;
    let (language, territory) = split_language_code(code);
    let lang = lookup_language(&language)
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;

    let base = lang
        .to_639_1()
        .map(str::to_string)
        .unwrap_or_else(|| lang.to_639_3().to_string());

    Ok(match territory {
        Some(territory) => format!("{}_{}", base, territory),
        None => base,
    })
}

/// Check if two catalog language codes name the same language and territory
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_language_code(code1), normalize_language_code(code2)) {
        (Ok(normalized1), Ok(normalized2)) => normalized1 == normalized2,
        _ => false,
    }
}

/// Get the English language name from a code, ignoring the territory
pub fn get_language_name(code: &str) -> Result<String> {
    let (language, _) = split_language_code(code);
    let lang = lookup_language(&language)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
