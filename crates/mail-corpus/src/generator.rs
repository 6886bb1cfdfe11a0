//! Message synthesis from templates and generated field values.
//!
//! This module provides the core generation function that renders template
//! patterns into full messages. Placeholder values are resolved through an
//! explicit binding map built per rendered line; a name the field generator
//! does not support is a fatal error, never a silent default. The same seed
//! and reference time always produce identical output.

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::category::Category;
use crate::error::GenerationError;
use crate::fields;
use crate::template::{Template, TemplateSet};
use crate::typo::inject_typos;

/// Generates `count` messages from the template set.
///
/// Each message picks one template uniformly at random (with replacement),
/// renders the subject and every body line with independent field draws,
/// and assembles From/To/Subject/Date headers, a blank line, and the body.
/// Ham messages then receive the typo pass at `typo_probability`; spam
/// messages are left clean.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - `typo_probability` is outside `[0, 1]`
/// - the template set is empty
/// - a pattern references an unsupported placeholder or is malformed
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use mail_corpus::{Category, Template, TemplateSet, generate_messages};
///
/// let templates = TemplateSet::new(vec![Template::new(
///     "Hi {name}".to_owned(),
///     vec!["Code: {code}".to_owned()],
/// )]);
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let messages = generate_messages(&templates, 3, Category::Spam, 0.02, Utc::now(), &mut rng)
///     .expect("generation succeeds");
///
/// assert_eq!(messages.len(), 3);
/// ```
pub fn generate_messages(
    templates: &TemplateSet,
    count: usize,
    category: Category,
    typo_probability: f64,
    now: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<String>, GenerationError> {
    if !(0.0..=1.0).contains(&typo_probability) {
        return Err(GenerationError::InvalidTypoProbability {
            value: typo_probability,
        });
    }
    if templates.is_empty() {
        return Err(GenerationError::NoTemplates);
    }

    let mut messages = Vec::with_capacity(count);
    for _ in 0..count {
        let message = generate_single_message(templates, category, typo_probability, now, rng)?;
        messages.push(message);
    }

    Ok(messages)
}

/// Generates a single message with the provided RNG.
fn generate_single_message(
    templates: &TemplateSet,
    category: Category,
    typo_probability: f64,
    now: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> Result<String, GenerationError> {
    let template: &Template = templates
        .templates()
        .choose(rng)
        .ok_or(GenerationError::NoTemplates)?;
    let today = now.date_naive();

    let subject = render_pattern(template.subject(), today, rng)?;

    let mut body_lines = Vec::with_capacity(template.body().len());
    for line in template.body() {
        body_lines.push(render_pattern(line, today, rng)?);
    }

    let from = fields::email_address(rng);
    let to = fields::email_address(rng);
    let date = fields::timestamp_this_year(rng, now);
    let body = body_lines.join("\n");
    let message = format!("From: {from}\nTo: {to}\nSubject: {subject}\nDate: {date}\n\n{body}");

    if category.applies_typos() {
        return Ok(inject_typos(&message, typo_probability, rng));
    }
    Ok(message)
}

/// Renders a pattern, substituting every `{name}` occurrence.
///
/// Bindings are resolved lazily into a per-pattern map: repeats of a name
/// within one pattern share a single draw, while separate patterns draw
/// independently. `{{` and `}}` are literal-brace escapes.
fn render_pattern(
    pattern: &str,
    today: NaiveDate,
    rng: &mut ChaCha8Rng,
) -> Result<String, GenerationError> {
    let mut rendered = String::with_capacity(pattern.len());
    let mut bindings: HashMap<String, String> = HashMap::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                rendered.push('{');
            }
            '{' => {
                let name = collect_placeholder_name(&mut chars).ok_or_else(|| {
                    GenerationError::UnterminatedPlaceholder {
                        pattern: pattern.to_owned(),
                    }
                })?;
                let value = match bindings.get(&name) {
                    Some(existing) => existing.clone(),
                    None => {
                        let fresh = resolve_placeholder(&name, today, rng)?;
                        bindings.insert(name, fresh.clone());
                        fresh
                    }
                };
                rendered.push_str(&value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                rendered.push('}');
            }
            '}' => {
                return Err(GenerationError::StrayBrace {
                    pattern: pattern.to_owned(),
                });
            }
            _ => rendered.push(c),
        }
    }

    Ok(rendered)
}

/// Consumes characters up to the closing brace, returning the placeholder
/// name, or `None` if the pattern ends first.
fn collect_placeholder_name(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut name = String::new();
    for c in chars {
        if c == '}' {
            return Some(name);
        }
        name.push(c);
    }
    None
}

/// Resolves a placeholder name to a freshly generated value.
fn resolve_placeholder(
    name: &str,
    today: NaiveDate,
    rng: &mut ChaCha8Rng,
) -> Result<String, GenerationError> {
    match name {
        "name" => Ok(fields::first_name(rng)),
        "item" => Ok(fields::random_item(rng).to_owned()),
        "discount" => Ok(fields::random_discount(rng).to_string()),
        "code" => Ok(fields::random_code(rng, fields::CODE_LENGTH)),
        "url" => Ok(fields::random_url(rng)),
        "expiry_date" => Ok(fields::expiry_date(rng, today)),
        "company" => Ok(fields::random_company(rng).to_owned()),
        "time" => Ok(fields::time_of_day(rng)),
        "deadline" => Ok(fields::deadline_date(rng, today)),
        "sender_name" => Ok(fields::sender_name(rng)),
        _ => Err(GenerationError::UnknownPlaceholder {
            name: name.to_owned(),
        }),
    }
}
