use std::fs;
use std::io::Write;
use std::sync::Arc;

use hanseg::errors::HansegError;
use hanseg::token::TokenKind;
use hanseg::{Decoder, Lexicon};

const DICT: &str = "\
结婚 30 v
的 300 uj
和 200 c
和尚 20 nr
尚未 15 d
未 10
都 60 d
是 250 v
都是 5
很 80 d
靠谱 8 a
人士 12 n
北京 10 ns
大学 10 n
北京大学 100 nt
";

const SENTENCE: &str = "结婚的和尚未结婚的，都是很nice cool的“靠谱人士”";

fn write_dict(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

#[test]
fn test_load_and_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dict(&dir, "dict.txt", DICT.as_bytes());

    let decoder = Decoder::from_path(&path).unwrap();
    assert_eq!(decoder.lexicon().num_words(), 15);

    let tokens: Vec<_> = decoder.decode(SENTENCE).collect();
    assert_eq!(
        tokens,
        [
            "结婚", "的", "和", "尚未", "结婚", "的", "，", "都", "是", "很", "nice", " ",
            "cool", "的", "“", "靠谱", "人士", "”",
        ]
    );
    assert_eq!(tokens.concat(), SENTENCE);
}

#[test]
fn test_load_zstd() {
    let dir = tempfile::tempdir().unwrap();
    let compressed = zstd::encode_all(DICT.as_bytes(), 3).unwrap();
    let path = write_dict(&dir, "dict.txt.zst", &compressed);

    let lexicon = Lexicon::from_zstd(&path).unwrap();
    assert_eq!(lexicon.frequency("北京大学"), Some(100));
    assert!(lexicon.has_prefix("北京大"));
    assert!(!lexicon.is_word("北京大"));

    let decoder = Decoder::new(lexicon);
    assert_eq!(decoder.decode("北京大学").collect::<Vec<_>>(), ["北京大学"]);
}

#[test]
fn test_windows_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dict(&dir, "dict.txt", "北京 10 ns\r\n大学 10\r\n".as_bytes());

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.num_words(), 2);
    assert_eq!(lexicon.total(), 20);
    assert_eq!(lexicon.frequency("北京"), Some(10));
}

#[test]
fn test_blank_line_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dict(&dir, "dict.txt", "北京 10\n\n大学 10\n".as_bytes());

    match Lexicon::load(&path) {
        Err(HansegError::InvalidFormat(e)) => assert_eq!(e.line(), 2),
        other => panic!("unexpected result: {:?}", other.map(|l| l.num_words())),
    }
}

#[test]
fn test_malformed_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dict(&dir, "dict.txt", "北京 10\n大学 ten thousand\n".as_bytes());

    match Lexicon::load(&path) {
        Err(HansegError::InvalidFormat(e)) => assert_eq!(e.line(), 2),
        other => panic!("unexpected result: {:?}", other.map(|l| l.num_words())),
    }
}

#[test]
fn test_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let result = Decoder::from_path(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(HansegError::StdIo(_))));
}

#[test]
fn test_probability_cost() {
    let decoder = Decoder::new(Lexicon::from_reader(DICT.as_bytes()).unwrap());
    let lexicon = decoder.lexicon();
    let total = lexicon.total() as f64;

    let cost = lexicon.probability_cost("的").unwrap();
    assert!((cost - -(300.0 / total).ln()).abs() < 1e-12);
    assert_eq!(lexicon.probability_cost("北京大"), Some(0.0));
    assert_eq!(lexicon.probability_cost("靠谱人"), None);
}

#[test]
fn test_worker_tokens() {
    let lexicon = Arc::new(Lexicon::from_reader(DICT.as_bytes()).unwrap());
    let decoder = Decoder::from_shared_lexicon(Arc::clone(&lexicon));
    let mut worker = decoder.new_worker();
    worker.reset_sentence("我在北京大学, 读C++");
    worker.tokenize();

    let tokens: Vec<_> = worker
        .token_iter()
        .map(|t| (t.surface(), t.kind(), t.range_char()))
        .collect();
    assert_eq!(
        tokens,
        [
            ("我", TokenKind::Unknown, 0..1),
            ("在", TokenKind::Unknown, 1..2),
            ("北京大学", TokenKind::Word, 2..6),
            (", ", TokenKind::Symbol, 6..8),
            ("读", TokenKind::Unknown, 8..9),
            ("C++", TokenKind::Alnum, 9..12),
        ]
    );

    let word = worker.token(2);
    assert!((word.word_cost() - lexicon.probability_cost("北京大学").unwrap()).abs() < 1e-12);
    assert_eq!(word.total_cost(), word.word_cost());
}

#[test]
fn test_decode_invariants() {
    let decoder = Decoder::new(Lexicon::from_reader(DICT.as_bytes()).unwrap());
    let texts = [
        "",
        "的",
        SENTENCE,
        "北京大学的大学生都是很靠谱的人士",
        "abc, 123 + 北京\n大学!!",
        "😀北京😀",
    ];
    for text in texts {
        let first: Vec<_> = decoder.decode(text).collect();
        assert_eq!(first.concat(), text);
        assert!(first.iter().all(|t| !t.is_empty()));

        let second: Vec<_> = decoder.decode(text).collect();
        assert_eq!(first, second);

        // Holds for this dictionary. Zero-cost fallback edges can make a
        // token split differently once its left context is gone.
        for token in &first {
            if token.chars().count() > 1 && decoder.lexicon().is_word(token) {
                assert_eq!(decoder.decode(token).collect::<Vec<_>>(), [*token]);
            }
        }
    }
}
