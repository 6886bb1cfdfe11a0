//! Randomized field value generation.
//!
//! Each generator is an independent, stateless draw from the provided RNG;
//! calling the same generator twice yields two independent samples. Date
//! generators take the reference date as an explicit parameter so output is
//! reproducible under a fixed seed and a fixed clock.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use fake::Fake;
use fake::faker::internet::raw::{DomainSuffix, FreeEmail};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::locales::EN;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

/// Default length of generated alphanumeric codes.
pub const CODE_LENGTH: usize = 10;

/// Alphabet for generated codes: uppercase ASCII letters and digits.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Horizon in days for expiry dates.
const EXPIRY_HORIZON_DAYS: i64 = 30;

/// Horizon in days for deadline dates.
const DEADLINE_HORIZON_DAYS: i64 = 10;

/// Minimum generated discount percentage.
const DISCOUNT_MIN: u32 = 5;

/// Maximum generated discount percentage.
const DISCOUNT_MAX: u32 = 80;

/// Fixed catalog of promotional item names.
const ITEMS: [&str; 5] = [
    "iPhone 14",
    "100 USD Gift Card",
    "Laptop",
    "Gift Card",
    "SmartWatch",
];

/// Fixed catalog of company names.
const COMPANIES: [&str; 5] = ["TechCorp", "ShopEasy", "SafeBank", "PromoMax", "BizSolutions"];

/// Generates a short person (first) name.
#[must_use]
pub fn first_name(rng: &mut ChaCha8Rng) -> String {
    FirstName(EN).fake_with_rng(rng)
}

/// Generates a full sender name.
#[must_use]
pub fn sender_name(rng: &mut ChaCha8Rng) -> String {
    Name(EN).fake_with_rng(rng)
}

/// Generates an email address.
#[must_use]
pub fn email_address(rng: &mut ChaCha8Rng) -> String {
    FreeEmail(EN).fake_with_rng(rng)
}

/// Generates a URL of the form `https://www.<word>.<suffix>/`.
#[must_use]
pub fn random_url(rng: &mut ChaCha8Rng) -> String {
    let word: String = LastName(EN).fake_with_rng(rng);
    let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
    let slug: String = word
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    format!("https://www.{slug}.{suffix}/")
}

/// Picks an item name from the fixed catalog.
#[must_use]
pub fn random_item(rng: &mut ChaCha8Rng) -> &'static str {
    ITEMS.choose(rng).copied().unwrap_or("Gift Card")
}

/// Picks a company name from the fixed catalog.
#[must_use]
pub fn random_company(rng: &mut ChaCha8Rng) -> &'static str {
    COMPANIES.choose(rng).copied().unwrap_or("TechCorp")
}

/// Generates an integer discount percentage in `[5, 80]`.
#[must_use]
pub fn random_discount(rng: &mut ChaCha8Rng) -> u32 {
    rng.random_range(DISCOUNT_MIN..=DISCOUNT_MAX)
}

/// Generates a fixed-length code over uppercase letters and digits.
#[must_use]
pub fn random_code(rng: &mut ChaCha8Rng, length: usize) -> String {
    (0..length)
        .map(|_| CODE_ALPHABET.choose(rng).copied().map_or('X', char::from))
        .collect()
}

/// Generates an expiry date within 30 days of `today`, as `YYYY-MM-DD`.
#[must_use]
pub fn expiry_date(rng: &mut ChaCha8Rng, today: NaiveDate) -> String {
    near_future_date(rng, today, EXPIRY_HORIZON_DAYS)
}

/// Generates a deadline date within 10 days of `today`, as `YYYY-MM-DD`.
#[must_use]
pub fn deadline_date(rng: &mut ChaCha8Rng, today: NaiveDate) -> String {
    near_future_date(rng, today, DEADLINE_HORIZON_DAYS)
}

fn near_future_date(rng: &mut ChaCha8Rng, today: NaiveDate, horizon_days: i64) -> String {
    let offset = rng.random_range(0..=horizon_days);
    let date = today
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(today);
    date.format("%Y-%m-%d").to_string()
}

/// Generates a time of day formatted as `HH:MM` on a 24-hour clock.
#[must_use]
pub fn time_of_day(rng: &mut ChaCha8Rng) -> String {
    let hour = rng.random_range(0..24_u32);
    let minute = rng.random_range(0..60_u32);
    format!("{hour:02}:{minute:02}")
}

/// Generates a timestamp between the start of the current year and `now`,
/// formatted as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn timestamp_this_year(rng: &mut ChaCha8Rng, now: DateTime<Utc>) -> String {
    let year_start = Utc
        .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    let span_seconds = (now - year_start).num_seconds().max(0);
    let offset = rng.random_range(0..=span_seconds);
    let stamp = year_start
        .checked_add_signed(Duration::seconds(offset))
        .unwrap_or(now);
    stamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
