use faq_context::document::{Document, DocumentError, DocumentId, Metadata, MetadataValue};
use std::path::Path;

fn make_doc(source: &str, content: Vec<u8>, metadata: Metadata) -> Result<Document, DocumentError> {
    let root = Path::new("faqs");
    let id = DocumentId::from_path(root, &root.join(source)).expect("Test path error");

    Document::ingest(id, source.to_string(), content, metadata)
}

fn parse(content: &str) -> Document {
    make_doc("doc.md", content.as_bytes().to_vec(), Metadata::new()).unwrap()
}

#[test]
fn invariant_utf8_rejection() {
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = make_doc("doc.md", invalid_bytes, Metadata::new());
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}

#[test]
fn invariant_same_content_same_version() {
    let content = "## Q\nA".as_bytes().to_vec();

    let doc1 = make_doc("a.md", content.clone(), Metadata::new()).unwrap();
    let doc2 = make_doc("b.md", content, Metadata::new()).unwrap();

    assert_eq!(doc1.version, doc2.version);
    assert_ne!(doc1.id, doc2.id);
}

#[test]
fn document_id_is_relative_and_lowercased() {
    let id = DocumentId::from_path(Path::new("Faqs"), Path::new("Faqs/Billing.MD")).unwrap();
    assert_eq!(id.as_str(), "billing.md");

    assert!(DocumentId::from_path(Path::new("faqs"), Path::new("other/billing.md")).is_err());
}

#[test]
fn invariant_metadata_does_not_affect_version() {
    let content = "---\ncategory: Billing\n---\n## Q\nA".as_bytes().to_vec();

    let mut provided = Metadata::new();
    provided.insert_string("category", "Accounts");

    let doc1 = make_doc("doc.md", content.clone(), Metadata::new()).unwrap();
    let doc2 = make_doc("doc.md", content, provided).unwrap();

    assert_eq!(doc1.version, doc2.version);
    assert_ne!(doc1.metadata, doc2.metadata);
}

#[test]
fn caller_metadata_overrides_front_matter() {
    let content = "---\ncategory: Billing\n---\n## Q\nA".as_bytes().to_vec();

    let mut provided = Metadata::new();
    provided.insert_string("category", "Accounts");

    let doc = make_doc("doc.md", content, provided).unwrap();

    assert_eq!(doc.metadata.category().as_deref(), Some("Accounts"));
}

#[test]
fn front_matter_is_split_from_body() {
    let doc = parse("---\ncategory: Billing\ntitle: \"Billing FAQ\"\norder: 2\ndraft: false\n---\n## How do I pay?\nBy card.");

    assert_eq!(doc.body, "## How do I pay?\nBy card.");
    assert_eq!(doc.metadata.get("category"), Some(&MetadataValue::String("Billing".into())));
    assert_eq!(doc.metadata.get("title"), Some(&MetadataValue::String("Billing FAQ".into())));
    assert_eq!(doc.metadata.get("order"), Some(&MetadataValue::Number(2)));
    assert_eq!(doc.metadata.get("draft"), Some(&MetadataValue::Bool(false)));
    assert_eq!(doc.metadata.category().as_deref(), Some("Billing"));
}

#[test]
fn front_matter_ignores_comments_and_nested_lines() {
    let doc = parse("---\n# comment\ncategory: 'Account Help'\ntags:\n  - login\n  - password\n---\nbody");

    assert_eq!(doc.metadata.category().as_deref(), Some("Account Help"));
    assert_eq!(doc.metadata.get("tags"), Some(&MetadataValue::String(String::new())));
    assert_eq!(doc.metadata.iter().count(), 2);
    assert_eq!(doc.body, "body");
}

#[test]
fn falsy_category_is_absent() {
    assert_eq!(parse("---\ncategory:\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: \"\"\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: 0\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: false\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: False\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: null\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: NULL\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: ~\n---\nx").metadata.category(), None);
    assert_eq!(parse("---\ncategory: 7\n---\nx").metadata.category().as_deref(), Some("7"));
    assert_eq!(parse("---\ncategory: 'null'\n---\nx").metadata.category().as_deref(), Some("null"));
}

#[test]
fn yaml_nulls_and_booleans_are_typed() {
    let doc = parse("---\ncategory: ~\nowner: null\ndraft: True\nlive: FALSE\n---\nx");

    assert_eq!(doc.metadata.get("category"), None);
    assert_eq!(doc.metadata.get("owner"), None);
    assert_eq!(doc.metadata.get("draft"), Some(&MetadataValue::Bool(true)));
    assert_eq!(doc.metadata.get("live"), Some(&MetadataValue::Bool(false)));
    assert_eq!(doc.metadata.category(), None);
}

#[test]
fn missing_or_unclosed_front_matter_leaves_body_intact() {
    let plain = parse("## Q1\nA1 text");
    assert!(plain.metadata.is_empty());
    assert_eq!(plain.body, "## Q1\nA1 text");

    let unclosed = parse("---\ncategory: Billing\n## Q\nA");
    assert!(unclosed.metadata.is_empty());
    assert_eq!(unclosed.body, unclosed.content);
}

#[test]
fn crlf_front_matter_is_recognized() {
    let doc = parse("---\r\ncategory: Billing\r\n---\r\n## Q\r\nA\r\n");

    assert_eq!(doc.metadata.category().as_deref(), Some("Billing"));
    let sections = doc.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].heading, "Q");
    assert_eq!(sections[0].body, "A");
}

#[test]
fn sections_split_on_level_two_headings_only() {
    let doc = parse("# Title\nIntro text\n## First?\nOne.\n### Detail\nMore.\n##Not a heading\n## Second?\n\nTwo.\n");
    let sections = doc.sections();

    assert_eq!(sections.len(), 3, "### and ##x do not split");
    assert_eq!(sections[0].heading, "# Title");
    assert_eq!(sections[0].body, "Intro text");
    assert_eq!(sections[1].heading, "First?");
    assert_eq!(sections[1].body, "One.\n### Detail\nMore.\n##Not a heading");
    assert_eq!(sections[2].heading, "Second?");
    assert_eq!(sections[2].body, "Two.");
}

#[test]
fn text_before_first_heading_is_a_section_of_its_own() {
    // first line is the heading, the rest is the body
    let doc = parse("Intro line\nmore intro\n\n## Q\nA");
    let sections = doc.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].heading, "Intro line");
    assert_eq!(sections[0].body, "more intro");

    // a blank first line leaves it without a heading
    let doc = parse("\nIntro line\n## Q\nA");
    assert_eq!(doc.sections()[0].heading, "");
    assert_eq!(doc.sections()[0].body, "Intro line");

    // blank leading text is not a section
    let doc = parse("\n\n## Q\nA");
    assert_eq!(doc.sections().len(), 1);
    assert!(parse("").sections().is_empty());
}

#[test]
fn invariant_no_newline_normalization() {
    let doc_unix = parse("line\n");
    let doc_windows = parse("line\r\n");

    assert_ne!(doc_unix.version, doc_windows.version);
}
