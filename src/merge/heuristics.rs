/*!
 * Catalog-wide translation recovery heuristics.
 *
 * Both passes only fill untranslated unfinished messages and leave them
 * unfinished, so every recovered translation still goes through review.
 */

use log::{debug, trace};
use std::collections::{HashMap, HashSet};

use super::numbers::{realign, zeroed_shape};
use crate::catalog::{Catalog, Message, MessageType};

fn is_recipient(msg: &Message) -> bool {
    msg.message_type == MessageType::Unfinished && !msg.is_translated()
}

fn is_donor(msg: &Message) -> bool {
    msg.message_type != MessageType::Unfinished && msg.is_translated()
}

/// Fill untranslated messages whose source text is translated elsewhere in
/// the catalog, e.g. "Enabled:" consistently translated as "Eingeschaltet:"
/// in other contexts.
///
/// A source text translated in two different ways is never used.
/// Returns the number of messages filled.
pub fn same_text_pass(catalog: &mut Catalog) -> usize {
    let fills = same_text_fills(catalog);
    let inserted = fills.len();
    for (i, translations) in fills {
        catalog.set_translations(i, translations);
    }

    debug!("Same-text heuristic filled {} message(s)", inserted);
    inserted
}

fn same_text_fills(catalog: &Catalog) -> Vec<(usize, Vec<String>)> {
    let mut translated: HashMap<&str, &[String]> = HashMap::new();
    let mut ambiguous: HashSet<&str> = HashSet::new();

    for msg in catalog.messages().iter().filter(|m| is_donor(m)) {
        let key = msg.source_text.as_str();
        if ambiguous.contains(key) {
            continue;
        }
        let conflicts = translated
            .get(key)
            .map(|known| *known != msg.translations.as_slice());
        match conflicts {
            Some(true) => {
                trace!("Source text '{}' has conflicting translations", key);
                translated.remove(key);
                ambiguous.insert(key);
            }
            Some(false) => {}
            None => {
                translated.insert(key, &msg.translations);
            }
        }
    }

    catalog
        .messages()
        .iter()
        .enumerate()
        .filter(|(_, m)| is_recipient(m))
        .filter_map(|(i, m)| {
            translated
                .get(m.source_text.as_str())
                .map(|translations| (i, translations.to_vec()))
        })
        .collect()
}

/// Fill untranslated messages whose source text differs from a translated
/// one only in its numbers.
///
/// If "TeX 3.0" is translated as "XeT 3.0" and "TeX 3.1" is not translated,
/// it receives "XeT 3.1". Plural donors are not used.
/// Returns the number of messages filled.
pub fn number_pass(catalog: &mut Catalog) -> usize {
    let fills = number_fills(catalog);
    let inserted = fills.len();
    for (i, translation) in fills {
        catalog.set_translations(i, vec![translation]);
    }

    debug!("Number heuristic filled {} message(s)", inserted);
    inserted
}

fn number_fills(catalog: &Catalog) -> Vec<(usize, String)> {
    let mut translated: HashMap<String, (&str, &str)> = HashMap::new();

    for msg in catalog.messages() {
        if is_donor(msg) && msg.translations.len() == 1 {
            let key = zeroed_shape(&msg.source_text);
            if !key.is_empty() {
                translated.insert(key, (msg.source_text.as_str(), msg.translation()));
            }
        }
    }

    catalog
        .messages()
        .iter()
        .enumerate()
        .filter(|(_, m)| is_recipient(m))
        .filter_map(|(i, m)| {
            let key = zeroed_shape(&m.source_text);
            if key.is_empty() {
                return None;
            }
            let (donor_source, donor_translation) = translated.get(&key)?;
            if *donor_source == m.source_text {
                return None;
            }
            Some((i, realign(donor_translation, donor_source, &m.source_text)))
        })
        .collect()
}
