//! End-to-end generation from on-disk sources

use namegen_core::config::Config;
use namegen_core::generator::default_requests;
use namegen_core::source::{FileSource, Source};
use namegen_core::{Category, NameGenerator, NameRequest, NamegenError};
use namegen_testkit::{temp_dir_in_workspace, write_sample_project};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_generator(dir: &std::path::Path) -> NameGenerator {
    write_sample_project(dir);
    let config = Config::from_file(dir.join("namegen.toml")).unwrap();
    let source = config.build_source().unwrap();
    NameGenerator::bootstrap(source.as_ref(), config.substitutions()).unwrap()
}

fn requests(category: Category, count: usize) -> Vec<NameRequest> {
    (0..count)
        .map(|i| NameRequest::new(format!("{}-{}", category, i), category))
        .collect()
}

#[test]
fn test_bootstrap_from_sample_project() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());

    assert!(generator.unknown_lists().is_empty());
    assert!(generator.unknown_keys().is_empty());
    assert_eq!(
        generator.contexts().female.substitution("REALM"),
        Some("Eagle")
    );
}

#[test]
fn test_female_names_use_female_words() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());

    let names = generator
        .generate_batch(&requests(Category::Female, 50), Some(11))
        .unwrap();
    assert_eq!(names.len(), 50);
    for response in &names {
        assert!(!response.name.is_empty());
        assert!(!response.name.contains("Bob"), "{}", response.name);
        assert!(!response.name.contains("Dave"), "{}", response.name);
    }
}

#[test]
fn test_male_names_use_male_words() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());

    let names = generator
        .generate_batch(&requests(Category::Male, 50), Some(5))
        .unwrap();
    for response in &names {
        assert!(!response.name.contains("Alice"), "{}", response.name);
        assert!(!response.name.contains("Carol"), "{}", response.name);
    }
}

#[test]
fn test_title_branch_is_title_cased() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());

    let names = generator
        .generate_batch(&requests(Category::Other, 200), Some(99))
        .unwrap();
    for response in &names {
        let first = response.name.split(',').next().unwrap_or_default();
        if first.contains(" of the ") {
            assert!(
                first.starts_with("Lady of the ") || first.starts_with("Lord of the "),
                "{}",
                response.name
            );
        }
        if let Some((_, suffix)) = response.name.split_once(", ") {
            assert!(suffix.ends_with(" of Eagle"), "{}", response.name);
        }
    }
}

#[test]
fn test_seeded_batches_match() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());
    let batch = requests(Category::Other, 10);

    assert_eq!(
        generator.generate_batch(&batch, Some(7)).unwrap(),
        generator.generate_batch(&batch, Some(7)).unwrap()
    );
}

#[test]
fn test_default_requests_feed_batch() {
    let temp = temp_dir_in_workspace();
    let generator = sample_generator(temp.path());
    let config = Config::from_file(temp.path().join("namegen.toml")).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let batch = default_requests(config.generate.default_count, &config.generate, &mut rng);
    let names = generator.generate_batch(&batch, None).unwrap();
    assert_eq!(names.len(), 20);
    assert_eq!(names[19].id, "19");
}

#[test]
fn test_missing_substitution_fails_request_only() {
    let temp = temp_dir_in_workspace();
    std::fs::write(temp.path().join("t.txt"), "\"Sir \" @ABSENT").unwrap();
    std::fs::write(temp.path().join("w.tsv"), "A\r\nx\r\n").unwrap();
    let source = FileSource::new(temp.path().join("t.txt"), temp.path().join("w.tsv"));

    let generator = NameGenerator::bootstrap(&source, Default::default()).unwrap();
    let err = generator
        .generate_batch(&requests(Category::Other, 1), Some(0))
        .unwrap_err();
    assert!(matches!(err, NamegenError::Request { .. }));
    assert!(err.to_string().contains("missing key: ABSENT"));
}

#[test]
fn test_bootstrap_rejects_malformed_template() {
    let temp = temp_dir_in_workspace();
    std::fs::write(temp.path().join("t.txt"), "[0.5 \"a\"").unwrap();
    std::fs::write(temp.path().join("w.tsv"), "A\r\n").unwrap();
    let source = FileSource::new(temp.path().join("t.txt"), temp.path().join("w.tsv"));

    let err = NameGenerator::bootstrap(&source, Default::default()).unwrap_err();
    assert!(matches!(err, NamegenError::Parse(_)));
    assert!(err.to_string().starts_with("TEMPLATE_PARSE_ERROR"));
}

#[test]
fn test_bootstrap_reports_missing_word_table() {
    let temp = temp_dir_in_workspace();
    std::fs::write(temp.path().join("t.txt"), "\"a\"").unwrap();
    let source = FileSource::new(temp.path().join("t.txt"), temp.path().join("absent.tsv"));

    assert!(source.fetch_template_text().is_ok());
    let err = NameGenerator::bootstrap(&source, Default::default()).unwrap_err();
    assert!(matches!(err, NamegenError::Transport(_)));
}
