//! Behavioural tests for the mail-corpus crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering template parsing, lenient loading, and message generation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use mail_corpus::{Category, GenerationError, TemplateError, TemplateSet, generate_messages};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Base valid template JSON used by multiple Given steps.
const VALID_TEMPLATE_JSON: &str = r#"[
    {
        "subject": "Hi {name}",
        "body": ["Code: {code}", "See you at {time}."]
    },
    {
        "subject": "{discount}% off {item}",
        "body": ["Visit {url} before {expiry_date}."]
    }
]"#;

/// Fixed seed for deterministic scenario runs.
const SCENARIO_SEED: u64 = 42;

/// Fixed reference time so date-dependent draws are reproducible.
fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0)
        .single()
        .expect("valid reference time")
}

/// Test world holding parsed templates and generated messages.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    parse_result: Slot<Result<TemplateSet, TemplateError>>,
    templates: Slot<TemplateSet>,
    loaded_set: Slot<TemplateSet>,
    messages: Slot<Vec<String>>,
    second_messages: Slot<Vec<String>>,
    generation_result: Slot<Result<Vec<String>, GenerationError>>,
}

impl World {
    /// Extracts the parse result from the world state.
    fn parse_result(&self) -> Result<TemplateSet, TemplateError> {
        self.parse_result.get().expect("parse result should be set")
    }

    /// Extracts the usable template set from the world state.
    fn templates(&self) -> TemplateSet {
        self.templates.get().expect("template set should be set")
    }

    /// Extracts the generated messages from the world state.
    fn messages(&self) -> Vec<String> {
        self.messages.get().expect("messages should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid template JSON")]
fn a_valid_template_json(world: &World) {
    world.json_input.set(VALID_TEMPLATE_JSON.to_owned());
}

#[given("malformed template JSON")]
fn malformed_template_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("a parsed template set")]
fn a_parsed_template_set(world: &World) {
    let templates = TemplateSet::from_json(VALID_TEMPLATE_JSON).expect("valid template JSON");
    world.templates.set(templates);
}

#[given("a template with an unsupported placeholder")]
fn a_template_with_an_unsupported_placeholder(world: &World) {
    let json = r#"[{"subject": "Your {account_number} statement", "body": []}]"#;
    let templates = TemplateSet::from_json(json).expect("well-formed JSON");
    world.templates.set(templates);
}

#[given("an empty template set")]
fn an_empty_template_set(world: &World) {
    world.templates.set(TemplateSet::default());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the templates are parsed")]
fn the_templates_are_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.parse_result.set(TemplateSet::from_json(&json));
}

#[when("templates are loaded leniently from a missing file")]
fn templates_are_loaded_leniently_from_a_missing_file(world: &World) {
    let loaded = TemplateSet::load_or_empty(Path::new("/nonexistent/templates.json"));
    world.loaded_set.set(loaded);
}

#[when("{count:usize} messages are generated")]
fn n_messages_are_generated(world: &World, count: usize) {
    let templates = world.templates();
    let mut rng = ChaCha8Rng::seed_from_u64(SCENARIO_SEED);
    let messages = generate_messages(
        &templates,
        count,
        Category::Spam,
        0.0,
        reference_time(),
        &mut rng,
    )
    .expect("generation succeeds");
    world.messages.set(messages);
}

#[when("messages are generated twice with the same seed")]
fn messages_are_generated_twice_with_the_same_seed(world: &World) {
    let templates = world.templates();
    let now = reference_time();

    let mut rng1 = ChaCha8Rng::seed_from_u64(SCENARIO_SEED);
    let first = generate_messages(&templates, 10, Category::Ham, 0.02, now, &mut rng1)
        .expect("first generation");

    let mut rng2 = ChaCha8Rng::seed_from_u64(SCENARIO_SEED);
    let second = generate_messages(&templates, 10, Category::Ham, 0.02, now, &mut rng2)
        .expect("second generation");

    world.messages.set(first);
    world.second_messages.set(second);
}

#[when("generation is attempted")]
fn generation_is_attempted(world: &World) {
    let templates = world.templates();
    let mut rng = ChaCha8Rng::seed_from_u64(SCENARIO_SEED);
    let result = generate_messages(
        &templates,
        1,
        Category::Spam,
        0.0,
        reference_time(),
        &mut rng,
    );
    world.generation_result.set(result);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds and the set contains {count:usize} templates")]
fn parsing_succeeds_with_count(world: &World, count: usize) {
    let templates = world.parse_result().expect("parsing should succeed");
    assert_eq!(templates.len(), count);
}

#[then("parsing fails")]
fn parsing_fails(world: &World) {
    let result = world.parse_result();
    assert!(matches!(result, Err(TemplateError::Parse { .. })));
}

#[then("the template set is empty")]
fn the_template_set_is_empty(world: &World) {
    let loaded = world.loaded_set.get().expect("loaded set should be set");
    assert!(loaded.is_empty());
}

#[then("{count:usize} messages are produced")]
fn n_messages_are_produced(world: &World, count: usize) {
    assert_eq!(world.messages().len(), count);
}

#[then("every message has four header lines followed by a blank line")]
fn every_message_has_four_headers(world: &World) {
    for message in world.messages() {
        let header_count = message
            .split('\n')
            .take_while(|line| !line.is_empty())
            .count();
        assert_eq!(header_count, 4, "expected four header lines: {message}");
        assert!(message.contains("\n\n"), "missing blank line: {message}");
    }
}

#[then("both generations are identical")]
fn both_generations_are_identical(world: &World) {
    let first = world.messages();
    let second = world
        .second_messages
        .get()
        .expect("second generation should be set");
    assert_eq!(first, second);
}

#[then("generation fails with an unknown placeholder error")]
fn generation_fails_with_unknown_placeholder(world: &World) {
    let result = world
        .generation_result
        .get()
        .expect("generation result should be set");
    assert!(matches!(
        result,
        Err(GenerationError::UnknownPlaceholder { .. })
    ));
}

#[then("generation fails because there are no templates")]
fn generation_fails_with_no_templates(world: &World) {
    let result = world
        .generation_result
        .get()
        .expect("generation result should be set");
    assert_eq!(result, Err(GenerationError::NoTemplates));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "Valid template JSON parses successfully"
)]
fn valid_template_json_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "Malformed template JSON fails parsing"
)]
fn malformed_template_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "A missing template file is recovered into an empty set"
)]
fn a_missing_template_file_is_recovered(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "Generation produces the requested number of messages"
)]
fn generation_produces_the_requested_number(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "Generated messages carry four headers and a body"
)]
fn generated_messages_carry_four_headers(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "Deterministic generation produces identical messages"
)]
fn deterministic_generation_produces_identical_messages(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "An unsupported placeholder fails generation"
)]
fn an_unsupported_placeholder_fails_generation(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mail_corpus.feature",
    name = "An empty template set cannot generate"
)]
fn an_empty_template_set_cannot_generate(world: World) {
    let _ = world;
}
