//! Name generation: bootstrap from a source and evaluate requests
//!
//! A [`NameGenerator`] owns one parsed template and the three category
//! contexts. Both are immutable after bootstrap, so batches evaluate in
//! parallel with one random generator per request.

mod request;

pub use request::{NameRequest, NameResponse};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::GenerateConfig;
use crate::context::{Category, ContextSet, Substitutions, WordTable};
use crate::error::{NamegenError, Result};
use crate::source::{strip_line_breaks, Source};
use crate::template::{parse, EvalError, RandomSource, Token};

/// Parsed template plus category contexts
#[derive(Debug, Clone)]
pub struct NameGenerator {
    template: Token,
    contexts: ContextSet,
}

impl NameGenerator {
    pub fn new(template: Token, contexts: ContextSet) -> Self {
        Self { template, contexts }
    }

    /// Prepare template and contexts concurrently, then build the generator
    ///
    /// One task fetches and parses the template, the other fetches the word
    /// table and builds the contexts. Either failing aborts startup; a
    /// template failure is reported first.
    pub fn bootstrap(source: &dyn Source, substitutions: Substitutions) -> Result<Self> {
        tracing::info!(source = %source.describe(), "bootstrapping name generator");

        let (template, contexts) = rayon::join(
            || {
                source
                    .fetch_template_text()
                    .map_err(NamegenError::from)
                    .and_then(|text| load_template(&text))
            },
            || {
                source
                    .fetch_word_table()
                    .map_err(NamegenError::from)
                    .and_then(|text| load_contexts(&text, substitutions))
            },
        );

        Ok(Self::assemble(template?, contexts?))
    }

    /// Build from raw template text and word table text
    ///
    /// Line breaks are stripped from the template before parsing.
    pub fn from_texts(
        template_text: &str,
        word_table_text: &str,
        substitutions: Substitutions,
    ) -> Result<Self> {
        let template = load_template(template_text)?;
        let contexts = load_contexts(word_table_text, substitutions)?;
        Ok(Self::assemble(template, contexts))
    }

    fn assemble(template: Token, contexts: ContextSet) -> Self {
        let generator = Self::new(template, contexts);
        for name in generator.unknown_lists() {
            tracing::warn!(list = %name, "template references a list missing from the word table");
        }
        for key in generator.unknown_keys() {
            tracing::warn!(key = %key, "template references an undefined substitution");
        }

        tracing::info!(
            nodes = generator.template.node_count(),
            "name generator ready"
        );
        generator
    }

    pub fn template(&self) -> &Token {
        &self.template
    }

    pub fn contexts(&self) -> &ContextSet {
        &self.contexts
    }

    /// Lists the template selects from that no column provides
    pub fn unknown_lists(&self) -> Vec<String> {
        let lists = self.contexts.other.unfiltered_choice_lists();
        let mut names: Vec<String> = self
            .template
            .referenced_lists()
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| !lists.contains_key(name))
            .collect();
        names.dedup();
        names
    }

    /// Substitution keys the template uses that are not defined
    pub fn unknown_keys(&self) -> Vec<String> {
        let substitutions = self.contexts.other.substitutions();
        self.template
            .referenced_keys()
            .into_iter()
            .filter(|key| !substitutions.contains_key(key))
            .collect()
    }

    /// Generate one name for `category`
    pub fn generate_one<R: RandomSource + ?Sized>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> std::result::Result<String, EvalError> {
        self.template
            .evaluate(rng, self.contexts.for_category(category))
    }

    /// Generate one name per request, in request order
    ///
    /// Each request gets its own generator: seeded with `seed + index` when
    /// `seed` is given, from entropy otherwise. The lowest-index failing
    /// request aborts the batch.
    pub fn generate_batch(
        &self,
        requests: &[NameRequest],
        seed: Option<u64>,
    ) -> Result<Vec<NameResponse>> {
        let results: Vec<Result<NameResponse>> = requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| {
                let mut rng = request_rng(seed, index);
                self.generate_one(request.category(), &mut rng)
                    .map(|name| NameResponse {
                        id: request.id.clone(),
                        name,
                    })
                    .map_err(|source| {
                        tracing::warn!(id = %request.id, error = %source, "name generation failed");
                        NamegenError::Request {
                            id: request.id.clone(),
                            source,
                        }
                    })
            })
            .collect();

        let responses = results.into_iter().collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = responses.len(), "generated name batch");
        Ok(responses)
    }
}

fn load_template(text: &str) -> Result<Token> {
    Ok(parse(&strip_line_breaks(text))?)
}

fn load_contexts(text: &str, substitutions: Substitutions) -> Result<ContextSet> {
    let table = WordTable::parse(text)?;
    tracing::debug!(
        columns = table.columns().len(),
        rows = table.row_count(),
        "word table loaded"
    );
    Ok(ContextSet::from_word_table(&table, substitutions))
}

fn request_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Synthetic requests for a batch that arrived empty
///
/// Ids run `"0"` to `count - 1`; each category is drawn with the configured
/// shares.
pub fn default_requests<R: Rng + ?Sized>(
    count: usize,
    mix: &GenerateConfig,
    rng: &mut R,
) -> Vec<NameRequest> {
    (0..count)
        .map(|i| {
            let roll: f64 = rng.gen();
            let category = if roll < mix.female_share {
                Category::Female
            } else if roll < mix.female_share + mix.male_share {
                Category::Male
            } else {
                Category::Other
            };
            NameRequest::new(i.to_string(), category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TransportError;

    const TEMPLATE: &str = "$First \" \" #First";
    const TABLE: &str = "First@female\tFirst@male\r\nAda\tBo\r\n";

    fn generator() -> NameGenerator {
        NameGenerator::from_texts(TEMPLATE, TABLE, Substitutions::new()).unwrap()
    }

    struct StaticSource {
        template: &'static str,
        word_table: &'static str,
    }

    impl Source for StaticSource {
        fn fetch_template_text(&self) -> std::result::Result<String, TransportError> {
            Ok(self.template.to_string())
        }

        fn fetch_word_table(&self) -> std::result::Result<String, TransportError> {
            Ok(self.word_table.to_string())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[test]
    fn test_bootstrap_parses_both_inputs() {
        let source = StaticSource {
            template: "$First\r\n",
            word_table: TABLE,
        };
        let generator = NameGenerator::bootstrap(&source, Substitutions::new()).unwrap();
        assert_eq!(
            generator.template(),
            &Token::ListSelection {
                name: "First".to_string(),
                filtered: true
            }
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generator.generate_one(Category::Female, &mut rng).unwrap(),
            "Ada"
        );
    }

    #[test]
    fn test_bootstrap_reports_template_failure_first() {
        let source = StaticSource {
            template: "[",
            word_table: "",
        };
        let err = NameGenerator::bootstrap(&source, Substitutions::new()).unwrap_err();
        assert!(matches!(err, NamegenError::Parse(_)));

        let source = StaticSource {
            template: "$First",
            word_table: "",
        };
        let err = NameGenerator::bootstrap(&source, Substitutions::new()).unwrap_err();
        assert!(matches!(err, NamegenError::WordTable(_)));
    }

    #[test]
    fn test_from_texts_strips_line_breaks() {
        let generator =
            NameGenerator::from_texts("\"a\r\nb\"\r\n", "A\r\n", Substitutions::new()).unwrap();
        assert_eq!(generator.template(), &Token::Literal("ab".to_string()));
    }

    #[test]
    fn test_generate_one_uses_category_context() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(1);
        let name = generator.generate_one(Category::Female, &mut rng).unwrap();
        assert!(name.starts_with("Ada "));
        let name = generator.generate_one(Category::Male, &mut rng).unwrap();
        assert!(name.starts_with("Bo "));
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let generator = generator();
        let requests: Vec<NameRequest> = (0..8)
            .map(|i| NameRequest::new(i.to_string(), Category::Other))
            .collect();

        let first = generator.generate_batch(&requests, Some(42)).unwrap();
        let second = generator.generate_batch(&requests, Some(42)).unwrap();
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_batch_reports_failing_request() {
        let generator =
            NameGenerator::from_texts("$Missing", "A\r\nx\r\n", Substitutions::new()).unwrap();
        let requests = vec![NameRequest::new("first", Category::Male)];

        let err = generator.generate_batch(&requests, Some(0)).unwrap_err();
        match err {
            NamegenError::Request { id, source } => {
                assert_eq!(id, "first");
                assert_eq!(
                    source,
                    EvalError::MissingList {
                        name: "Missing".to_string()
                    }
                );
            }
            other => panic!("Expected Request error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_batch_yields_empty_response() {
        let generator = generator();
        assert!(generator.generate_batch(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_lists_and_keys() {
        let generator =
            NameGenerator::from_texts("$A #B @K", "A\r\nx\r\n", Substitutions::new()).unwrap();
        assert_eq!(generator.unknown_lists(), vec!["B".to_string()]);
        assert_eq!(generator.unknown_keys(), vec!["K".to_string()]);
    }

    #[test]
    fn test_default_requests_follow_shares() {
        let mix = GenerateConfig {
            default_count: 4,
            female_share: 1.0,
            male_share: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let requests = default_requests(4, &mix, &mut rng);
        assert_eq!(requests.len(), 4);
        assert!(requests.iter().all(|r| r.category() == Category::Female));
        assert_eq!(requests[3].id, "3");

        let mix = GenerateConfig {
            default_count: 4,
            female_share: 0.0,
            male_share: 0.0,
        };
        let requests = default_requests(4, &mix, &mut rng);
        assert!(requests.iter().all(|r| r.category() == Category::Other));
    }
}
