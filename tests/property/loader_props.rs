// tests/property/loader_props.rs

use proptest::prelude::*;

use loadconfig::config::{Loader, LoaderOptions, parse_assignment};
use loadconfig::fs::mock::MockFileSystem;
use loadconfig::vars::TemplateExpander;
use loadconfig_test_utils::RecordingStore;

/// One generated line of a configuration file.
#[derive(Debug, Clone)]
enum GenLine {
    Blank,
    Comment(String),
    Spaced { name: String, gap: String, value: String },
    Equals { name: String, value: String },
}

impl GenLine {
    fn render(&self) -> String {
        match self {
            GenLine::Blank => String::new(),
            GenLine::Comment(text) => format!("#{text}"),
            GenLine::Spaced { name, gap, value } => format!("{name}{gap}{value}"),
            GenLine::Equals { name, value } => format!("{name}={value}"),
        }
    }

    fn expected_write(&self) -> Option<(String, String)> {
        match self {
            GenLine::Blank | GenLine::Comment(_) => None,
            GenLine::Spaced { name, value, .. } | GenLine::Equals { name, value } => {
                Some((name.clone(), value.clone()))
            }
        }
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z/_][a-z0-9/_.]{0,12}"
}

fn line_strategy() -> impl Strategy<Value = GenLine> {
    prop_oneof![
        Just(GenLine::Blank),
        "[ a-z#@=]{0,10}".prop_map(GenLine::Comment),
        (name_strategy(), "[ \t]{1,3}", "[a-zA-Z0-9_./:-][a-zA-Z0-9_./: -]{0,12}")
            .prop_map(|(name, gap, value)| GenLine::Spaced { name, gap, value }),
        (name_strategy(), "[a-zA-Z0-9_./:= -]{1,12}")
            .prop_map(|(name, value)| GenLine::Equals { name, value }),
    ]
}

proptest! {
    #[test]
    fn every_assignment_is_written_once_in_order(
        lines in proptest::collection::vec(line_strategy(), 0..40),
        trailing_newline in any::<bool>(),
    ) {
        let mut text = String::from("@config generated\n");
        text.push_str(
            &lines.iter().map(GenLine::render).collect::<Vec<_>>().join("\n"),
        );
        if trailing_newline {
            text.push('\n');
        }

        let fs = MockFileSystem::new();
        fs.add_file("gen.cfg", text);
        let expander = TemplateExpander::default();
        let mut store = RecordingStore::new();
        let result = {
            let mut loader = Loader::new(&fs, &expander, &mut store, LoaderOptions::default());
            loader.load_configuration("gen.cfg")
        };

        let expected: Vec<(String, String)> =
            lines.iter().filter_map(GenLine::expected_write).collect();
        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(store.writes(), expected.as_slice());
    }

    #[test]
    fn parsed_assignments_reassemble_to_the_line(
        name in "[a-z/_][a-z0-9/_ .]{0,12}",
        value in "[a-z0-9 =]{1,12}",
    ) {
        let line = format!("{name}={value}");
        let parsed = parse_assignment(&line).unwrap();
        prop_assert_eq!(format!("{}={}", parsed.name, parsed.value), line.as_str());
        prop_assert!(!parsed.name.contains('='));
    }
}
