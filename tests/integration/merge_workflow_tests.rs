/*!
 * Integration tests for the three-way merge workflow
 */

use catmerge::merge::MergeOption;
use catmerge::{Catalog, CatalogMerger, Message, MessageType, MergeOptions, merge};
use crate::common::{self, extracted, finished, german};

#[test]
fn test_merge_identicalCatalogs_shouldKeepEverything() {
    common::init_logging();
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 20),
    ]);
    let virgin = german(vec![
        extracted("Main", "Open", "main.cpp", 10),
        extracted("Main", "Quit", "main.cpp", 20),
    ]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    assert_eq!(common::source_texts(&result.catalog), vec!["Open", "Quit"]);
    assert!(result
        .catalog
        .messages()
        .iter()
        .all(|m| m.message_type == MessageType::Finished));
    assert_eq!(common::find(&result.catalog, "Main", "Quit").translation(), "Beenden");
    assert_eq!(result.stats.known, 2);
    assert_eq!(result.stats.new, 0);
    assert_eq!(result.stats.obsoleted, 0);
    assert_eq!(result.report, None);
}

#[test]
fn test_merge_identicalCatalogsWithoutSimilarText_shouldKeepEveryState() {
    let vernacular = german(vec![
        Message::new("Main", "Save")
            .with_translation("Speichern")
            .with_reference("main.cpp", 5),
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        Message::new("Main", "Print").with_reference("main.cpp", 15),
    ]);
    let virgin = german(vec![
        extracted("Main", "Save", "main.cpp", 5),
        extracted("Main", "Open", "main.cpp", 10),
        extracted("Main", "Print", "main.cpp", 15),
    ]);
    let options = MergeOptions::default().without(MergeOption::SimilarText);

    let result = merge(&vernacular, &virgin, &[], &options);

    let states: Vec<MessageType> = result
        .catalog
        .messages()
        .iter()
        .map(|m| m.message_type)
        .collect();
    assert_eq!(
        states,
        vec![MessageType::Unfinished, MessageType::Finished, MessageType::Unfinished]
    );
    assert_eq!(common::find(&result.catalog, "Main", "Save").translation(), "Speichern");
    assert!(!common::find(&result.catalog, "Main", "Print").is_translated());
    assert_eq!(result.stats.known, 3);
    assert_eq!(result.stats.new, 0);
    assert_eq!(result.stats.obsoleted, 0);
}

#[test]
fn test_merge_shouldKeepCatalogLanguages() {
    let vernacular = Catalog::new("fr_CA").with_source_language("en");
    let virgin = Catalog::from_messages("", vec![extracted("Main", "Open", "main.cpp", 1)]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    assert_eq!(result.catalog.language_code, "fr_CA");
    assert_eq!(result.catalog.source_language_code, "en");
    assert_eq!(result.catalog.len(), 1);
}

#[test]
fn test_merge_removedSources_shouldBecomeObsoleteWithoutLocations() {
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 20),
        Message::new("Main", "Save")
            .with_translation("Speichern")
            .with_reference("main.cpp", 30),
    ]);
    let virgin = german(vec![extracted("Main", "Open", "main.cpp", 10)]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    let quit = common::find(&result.catalog, "Main", "Quit");
    assert_eq!(quit.message_type, MessageType::Vanished);
    assert_eq!(quit.translation(), "Beenden");
    assert!(quit.references.is_empty());

    let save = common::find(&result.catalog, "Main", "Save");
    assert_eq!(save.message_type, MessageType::Obsolete);
    assert!(save.references.is_empty());

    assert_eq!(result.stats.known, 1);
    assert_eq!(result.stats.obsoleted, 2);
}

#[test]
fn test_merge_returningSource_shouldBeRevived() {
    let vernacular = german(vec![
        Message::new("Main", "Open")
            .with_translation("Öffnen")
            .with_type(MessageType::Vanished),
        Message::new("Main", "Close")
            .with_translation("Schließen")
            .with_type(MessageType::Obsolete),
    ]);
    let virgin = german(vec![
        extracted("Main", "Open", "main.cpp", 10),
        extracted("Main", "Close", "main.cpp", 11),
    ]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    let open = common::find(&result.catalog, "Main", "Open");
    assert_eq!(open.message_type, MessageType::Finished);
    assert_eq!(open.line_number(), Some(10));
    let close = common::find(&result.catalog, "Main", "Close");
    assert_eq!(close.message_type, MessageType::Unfinished);
    assert_eq!(close.translation(), "Schließen");
    assert_eq!(result.stats.new, 2);
    assert_eq!(result.stats.known, 0);
}

#[test]
fn test_merge_pluralityChanged_shouldNeedReview() {
    let vernacular = german(vec![finished("Main", "%n file(s)", "%n Datei(en)", "main.cpp", 4)]);
    let virgin = german(vec![extracted("Main", "%n file(s)", "main.cpp", 4).with_plural(true)]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    let msg = common::find(&result.catalog, "Main", "%n file(s)");
    assert_eq!(msg.message_type, MessageType::Unfinished);
    assert!(msg.plural);
    assert_eq!(result.stats.known, 1);
}

#[test]
fn test_merge_newSource_shouldBePlacedByLocation() {
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 30),
    ]);
    let virgin = german(vec![
        extracted("Main", "Open", "main.cpp", 10),
        extracted("Main", "Save", "main.cpp", 20),
        extracted("Main", "Quit", "main.cpp", 30),
    ]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    assert_eq!(common::source_texts(&result.catalog), vec!["Open", "Save", "Quit"]);
    let save = common::find(&result.catalog, "Main", "Save");
    assert_eq!(save.message_type, MessageType::Unfinished);
    assert!(!save.is_translated());
    assert_eq!(result.stats.new, 1);
    assert_eq!(result.stats.known, 2);
}

#[test]
fn test_merge_noLocations_shouldAppendNewSources() {
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 30),
    ]);
    let virgin = german(vec![
        extracted("Main", "Open", "main.cpp", 10),
        extracted("Main", "Save", "main.cpp", 20),
        extracted("Main", "Quit", "main.cpp", 30),
    ]);
    let options = MergeOptions::default().with(MergeOption::NoLocations);

    let result = merge(&vernacular, &virgin, &[], &options);

    assert_eq!(common::source_texts(&result.catalog), vec!["Open", "Quit", "Save"]);
}

#[test]
fn test_merge_idMatch_shouldFollowMovedMessage() {
    let vernacular = german(vec![
        Message::new("Old", "Title")
            .with_id("app.title")
            .with_translation("Titel")
            .with_type(MessageType::Finished)
            .with_reference("a.cpp", 1),
    ]);
    let virgin = german(vec![
        Message::new("New", "Title")
            .with_id("app.title")
            .with_reference("b.cpp", 5),
    ]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    assert_eq!(result.catalog.len(), 1);
    let title = &result.catalog.messages()[0];
    assert_eq!(title.context, "New");
    assert_eq!(title.translation(), "Titel");
    assert_eq!(title.message_type, MessageType::Unfinished);
    assert_eq!(title.old_source_text, "");
    assert_eq!(title.file_name(), Some("b.cpp"));
    assert_eq!(result.stats.known, 1);
    assert_eq!(result.stats.new, 0);
}

#[test]
fn test_merge_contextComments_shouldFollowExtraction() {
    let vernacular = german(vec![Message::context_comment("Main", "old comment")]);
    let virgin = german(vec![
        Message::context_comment("Main", "new comment"),
        Message::context_comment("Dialog", "dialog comment"),
    ]);

    let result = merge(&vernacular, &virgin, &[], &MergeOptions::default());

    assert_eq!(result.catalog.len(), 2);
    let main = result
        .catalog
        .find_context_comment("Main")
        .and_then(|i| result.catalog.message(i))
        .unwrap();
    assert_eq!(main.comment, "new comment");
    assert!(result.catalog.find_context_comment("Dialog").is_some());
    assert_eq!(result.stats.found(), 0);
}

#[test]
fn test_merge_shouldLeaveInputsUntouched() {
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 20),
    ]);
    let virgin = german(vec![extracted("Main", "Open", "main.cpp", 12)]);
    let vernacular_before = vernacular.clone();
    let virgin_before = virgin.clone();

    let mut result = CatalogMerger::default().merge(&vernacular, &virgin, &[]);
    if let Some(msg) = result.catalog.message_mut(0) {
        msg.translations = vec!["Aufmachen".to_string()];
    }

    assert_eq!(vernacular.messages(), vernacular_before.messages());
    assert_eq!(virgin.messages(), virgin_before.messages());
    assert_eq!(vernacular.messages()[0].line_number(), Some(10));
}

#[test]
fn test_merge_noObsolete_shouldDropObsoleteEntries() {
    let vernacular = german(vec![
        finished("Main", "Open", "Öffnen", "main.cpp", 10),
        finished("Main", "Quit", "Beenden", "main.cpp", 20),
    ]);
    let virgin = german(vec![extracted("Main", "Open", "main.cpp", 10)]);
    let options = MergeOptions::default()
        .with(MergeOption::NoObsolete)
        .with(MergeOption::Verbose);

    let result = merge(&vernacular, &virgin, &[], &options);

    assert_eq!(common::source_texts(&result.catalog), vec!["Open"]);
    assert_eq!(result.stats.obsoleted, 1);
    let report = result.report.unwrap();
    assert!(report.contains("    Removed 1 obsolete entries\n"));
}
