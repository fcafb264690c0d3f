//! Strategy chain integration tests over realistic response shapes

use forge_extract::{Extractor, DEFAULT_DOCUMENT};
use forge_test_utils::{
    bold_response, delimited_response, delimited_response_fenced, heading_response,
    sample_site_response,
};
use pretty_assertions::assert_eq;

#[test]
fn extracts_full_site_from_primary_format() {
    let extraction = Extractor::new().extract(&sample_site_response());

    assert!(!extraction.fallback);
    let names: Vec<_> = extraction.files.names().collect();
    assert_eq!(names, vec!["index.html", "style.css", "main.js"]);
    assert_eq!(extraction.files.get("style.css"), Some("body { margin: 0; }"));
}

#[test]
fn fenced_and_unfenced_sections_agree() {
    let plain = Extractor::new().extract(&delimited_response(&[("a.css", "body {}")]));
    let fenced = Extractor::new().extract(&delimited_response_fenced(&[("a.css", "css", "body {}")]));

    assert_eq!(plain.files, fenced.files);
}

#[test]
fn priority_is_strict_not_best_of() {
    // One delimited section plus two markdown-style files: the single
    // delimited entry wins even though markdown would have found more
    let mut text = delimited_response(&[("only.txt", "payload")]);
    text.push_str(&heading_response(&[
        ("extra1.js", "js", "let a = 1;"),
        ("extra2.js", "js", "let b = 2;"),
    ]));

    let extraction = Extractor::new().extract(&text);

    assert_eq!(extraction.strategy, "delimited-sections");
    assert_eq!(extraction.files.len(), 1);
}

#[test]
fn heading_format_recovers_all_files() {
    let text = heading_response(&[
        ("index.html", "html", "<html></html>"),
        ("style.css", "css", "body {}"),
    ]);
    let extraction = Extractor::new().extract(&text);

    assert_eq!(extraction.strategy, "heading-fence");
    assert_eq!(extraction.files.len(), 2);
}

#[test]
fn bold_format_recovers_all_files() {
    let text = bold_response(&[("main.js", "js", "export {};")]);
    let extraction = Extractor::new().extract(&text);

    assert_eq!(extraction.strategy, "bold-label");
    assert_eq!(extraction.files.get("main.js"), Some("export {};"));
}

#[test]
fn unbalanced_markers_still_produce_output() {
    // A lone marker with an empty body: the section is dropped, the chain
    // moves on, and the fallback guarantees a result
    let extraction = Extractor::new().extract("=== a.txt ===\n");

    assert!(extraction.fallback);
    assert_eq!(extraction.files.get(DEFAULT_DOCUMENT), Some("=== a.txt ===\n"));
}

mod totality {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Extraction is total: any input yields at least one file
        #[test]
        fn extract_never_returns_empty(text in ".{0,400}") {
            let extraction = Extractor::new().extract(&text);
            prop_assert!(!extraction.files.is_empty());
        }

        #[test]
        fn extract_never_returns_empty_with_markers(
            names in proptest::collection::vec("[a-z]{1,8}\\.[a-z]{1,4}", 0..5),
            bodies in proptest::collection::vec(".{0,40}", 0..5),
        ) {
            let mut text = String::new();
            for (name, body) in names.iter().zip(&bodies) {
                text.push_str(&format!("=== {name} ===\n{body}\n"));
            }
            let extraction = Extractor::new().extract(&text);
            prop_assert!(!extraction.files.is_empty());
        }
    }
}
