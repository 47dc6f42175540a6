//! End-to-end pipeline tests on small on-disk corpora.
use std::fs;
use std::path::Path;

use subfreq::io::writer::{sentence_outfile, word_outfile, TOTAL_SENTENCES_FILE, TOTAL_WORDS_FILE};
use subfreq::pipelines::{Pipeline, RunOpts, TopFreq};

/// Write a corpus file from (line, repetitions) pairs.
fn write_corpus(path: &Path, lines: &[(&str, usize)]) {
    let mut content = String::new();
    for (line, reps) in lines {
        for _ in 0..*reps {
            content.push_str(line);
            content.push('\n');
        }
    }
    fs::write(path, content).unwrap();
}

fn small_opts(src: &Path, dst: &Path) -> RunOpts {
    let mut opts = RunOpts::new(src, dst);
    opts.chunk_size = 4;
    opts.workers = 2;
    opts.min_count = 1;
    opts
}

#[test_log::test]
fn sentence_tables_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    write_corpus(
        &dir.path().join("en.txt"),
        &[
            ("Hello.", 5),
            ("Hello!", 3),
            ("- Hi there. ", 2),
            ("(laughs)", 2),
            ("1234", 1),
            ("JOHN:", 1),
            ("", 1),
        ],
    );

    let mut opts = small_opts(dir.path(), &dst);
    opts.words = false;
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();

    // punctuation variants collapsed into the dominant one, noise gone
    let table = fs::read_to_string(sentence_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "sentence,count\nHello.,8\nHi there.,2\n");

    // total captured after noise filtering, before any floor
    let totals = fs::read_to_string(dst.join(TOTAL_SENTENCES_FILE)).unwrap();
    assert_eq!(totals, "en\n10\n");
}

#[test]
fn chunk_size_does_not_change_output() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        &dir.path().join("en.txt"),
        &[("One more time.", 4), ("Again!", 3), ("One more time", 2)],
    );

    let mut outputs = Vec::new();
    for (label, chunk_size) in [("one", 1), ("big", 10_000)] {
        let dst = dir.path().join(label);
        let mut opts = small_opts(dir.path(), &dst);
        opts.chunk_size = chunk_size;
        opts.words = false;
        TopFreq::new(vec!["en".to_string()], opts).run().unwrap();
        outputs.push(fs::read_to_string(sentence_outfile(&dst, "en")).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn excluding_a_sentence_promotes_the_next_rank() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    write_corpus(
        &dir.path().join("en.txt"),
        &[("Top sentence.", 10), ("Second one.", 9), ("Third one.", 8)],
    );
    let exclude = dir.path().join("exclude.csv");
    fs::write(&exclude, "en\nTop sentence.\n").unwrap();

    let mut opts = small_opts(dir.path(), &dst);
    opts.words = false;
    opts.top_sentences = 2;
    opts.exclusions = Some(exclude);
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();

    let table = fs::read_to_string(sentence_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "sentence,count\nSecond one.,9\nThird one.,8\n");
}

#[test]
fn empty_corpus_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    fs::write(dir.path().join("en.txt"), "").unwrap();

    let opts = small_opts(dir.path(), &dst);
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();

    assert!(!sentence_outfile(&dst, "en").exists());
    assert!(!word_outfile(&dst, "en").exists());
    assert!(!dst.join(TOTAL_SENTENCES_FILE).exists());
    assert!(!dst.join(TOTAL_WORDS_FILE).exists());
}

#[test_log::test]
fn word_tables_with_case_collapsing() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        &dir.path().join("en.txt"),
        &[("Run fast", 7), ("run fast", 3)],
    );

    // majority casing wins at the 0.5 cutoff
    let dst = dir.path().join("half");
    let mut opts = small_opts(dir.path(), &dst);
    opts.sentences = false;
    opts.fast_segmenter = true;
    opts.case_cutoff = 0.5;
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();
    let table = fs::read_to_string(word_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "word,count\nRun,10\nfast,10\n");

    // below the cutoff the lowercase variant wins (share 0.3 > 0.2)
    let dst = dir.path().join("low");
    let mut opts = small_opts(dir.path(), &dst);
    opts.sentences = false;
    opts.fast_segmenter = true;
    opts.case_cutoff = 0.2;
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();
    let table = fs::read_to_string(word_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "word,count\nfast,10\nrun,10\n");

    let totals = fs::read_to_string(dst.join(TOTAL_WORDS_FILE)).unwrap();
    assert_eq!(totals, "en\n20\n");
}

#[test]
fn pre_tokenized_corpus_splits_on_whitespace_only() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    write_corpus(&dir.path().join("en.tok"), &[("the cat ,", 4), ("the dog", 2)]);

    let mut opts = small_opts(dir.path(), &dst);
    opts.sentences = false;
    opts.format = "tokenized".parse().unwrap();
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();

    let table = fs::read_to_string(word_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "word,count\nthe,6\ncat,4\ndog,2\n");
}

#[test]
fn failed_language_does_not_block_others() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    write_corpus(&dir.path().join("en.txt"), &[("Fine here.", 3)]);
    // no fr.txt on purpose

    let mut opts = small_opts(dir.path(), &dst);
    opts.words = false;
    let result = TopFreq::new(vec!["fr".to_string(), "en".to_string()], opts).run();

    assert!(result.is_err());
    assert!(sentence_outfile(&dst, "en").exists());
    assert!(!sentence_outfile(&dst, "fr").exists());
}

#[test]
fn unknown_langcode_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    write_corpus(&dir.path().join("en.txt"), &[("Fine here.", 3)]);

    let opts = small_opts(dir.path(), &dst);
    let result = TopFreq::new(vec!["klingon".to_string()], opts).run();
    assert!(result.is_err());
}

#[test]
fn count_floor_applies_after_full_pass() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("bld");
    // "Rare line." appears once per chunk but 5 times overall: it must
    // survive a floor of 5, which a mid-pass prune would break.
    write_corpus(
        &dir.path().join("en.txt"),
        &[
            ("Rare line.", 1),
            ("Filler A.", 1),
            ("Filler B.", 1),
            ("Rare line.", 1),
            ("Filler C.", 1),
            ("Filler D.", 1),
            ("Rare line.", 1),
            ("Filler E.", 1),
            ("Filler F.", 1),
            ("Rare line.", 1),
            ("Filler G.", 1),
            ("Filler H.", 1),
            ("Rare line.", 1),
        ],
    );

    let mut opts = small_opts(dir.path(), &dst);
    opts.chunk_size = 3;
    opts.min_count = 5;
    opts.words = false;
    TopFreq::new(vec!["en".to_string()], opts).run().unwrap();

    let table = fs::read_to_string(sentence_outfile(&dst, "en")).unwrap();
    assert_eq!(table, "sentence,count\nRare line.,5\n");

    // the total still counts the floored-out fillers
    let totals = fs::read_to_string(dst.join(TOTAL_SENTENCES_FILE)).unwrap();
    assert_eq!(totals, "en\n13\n");
}
