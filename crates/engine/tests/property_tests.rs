use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use wc_engine::{count_bytes, count_characters, count_lines, count_words};

fn fixture(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bytes_match_file_size_and_line_lengths(
        content in proptest::collection::vec(any::<u8>(), 0..2048)
    ) {
        let file = fixture(&content);
        let bytes = count_bytes(file.path()).unwrap();
        let size = std::fs::metadata(file.path()).unwrap().len();
        prop_assert_eq!(bytes as u64, size);

        let by_lines: usize = content.split_inclusive(|&b| b == b'\n').map(<[u8]>::len).sum();
        prop_assert_eq!(bytes, by_lines);
    }

    #[test]
    fn characters_never_exceed_bytes(content in "\\PC{0,300}") {
        let file = fixture(content.as_bytes());
        let chars = count_characters(file.path()).unwrap();
        let bytes = count_bytes(file.path()).unwrap();
        prop_assert!(chars <= bytes);
        prop_assert_eq!(chars == bytes, content.is_ascii());
        prop_assert_eq!(chars, content.chars().count());
    }

    #[test]
    fn trailing_blank_lines_do_not_change_words(
        content in "[a-z \t\n]{0,200}",
        padding in "[ \t]{0,8}",
        extra in 0usize..5,
    ) {
        let base = fixture(content.as_bytes());
        let mut padded = content.clone();
        for _ in 0..extra {
            padded.push('\n');
            padded.push_str(&padding);
        }
        let padded = fixture(padded.as_bytes());
        prop_assert_eq!(
            count_words(base.path()).unwrap(),
            count_words(padded.path()).unwrap()
        );
    }

    #[test]
    fn inserting_tokens_never_lowers_words(
        content in "[a-z \n]{0,200}",
        token in "[a-z]{1,10}",
        at in any::<prop::sample::Index>(),
    ) {
        let split = at.index(content.len() + 1);
        let mut grown = String::with_capacity(content.len() + token.len() + 2);
        grown.push_str(&content[..split]);
        grown.push(' ');
        grown.push_str(&token);
        grown.push(' ');
        grown.push_str(&content[split..]);

        let before = count_words(fixture(content.as_bytes()).path()).unwrap();
        let after = count_words(fixture(grown.as_bytes()).path()).unwrap();
        prop_assert!(after >= before);
    }

    #[test]
    fn lines_match_newline_count_for_lf_text(content in "[a-z \n]{0,300}") {
        let file = fixture(content.as_bytes());
        let newlines = content.matches('\n').count();
        let expected = newlines + usize::from(!content.is_empty() && !content.ends_with('\n'));
        prop_assert_eq!(count_lines(file.path()).unwrap(), expected);
    }
}
