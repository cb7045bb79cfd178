//! Full name generation from locale-specific pools.
//!
//! Names are produced by sampling independent given-name and family-name
//! pools. Pools are fixed at compile time; the same seed always yields the
//! same name sequence.

use rand::Rng;
use synth_core::schema::NameLocale;
use synth_core::Value;

/// Common English given names.
const EN_GIVEN_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Joshua", "Kevin",
    "Brian", "George", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Margaret", "Sandra", "Ashley", "Emily",
    "Michelle", "Amanda", "Melissa", "Stephanie",
];

/// Common English family names.
const EN_FAMILY_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee",
    "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young", "Allen",
    "King", "Wright", "Scott", "Hill", "Green", "Adams", "Nelson", "Baker", "Hall", "Campbell",
    "Mitchell", "Carter", "Roberts",
];

/// Common Egyptian Arabic given names (Arabic script).
const AR_EG_GIVEN_NAMES: &[&str] = &[
    "محمد",
    "أحمد",
    "محمود",
    "مصطفى",
    "خالد",
    "عمر",
    "علي",
    "حسن",
    "حسين",
    "يوسف",
    "إبراهيم",
    "عبد الرحمن",
    "كريم",
    "طارق",
    "سامي",
    "عمرو",
    "هشام",
    "وليد",
    "أيمن",
    "شريف",
    "فاطمة",
    "عائشة",
    "زينب",
    "مريم",
    "سارة",
    "نور",
    "هدى",
    "أمل",
    "منى",
    "ليلى",
    "ياسمين",
    "دينا",
    "رنا",
    "هبة",
    "شيماء",
    "أسماء",
    "إيمان",
    "نادية",
    "سلمى",
    "رضوى",
];

/// Common Egyptian family names (Arabic script).
const AR_EG_FAMILY_NAMES: &[&str] = &[
    "السيد",
    "إبراهيم",
    "حسن",
    "محمود",
    "الشاذلي",
    "عبد الله",
    "المصري",
    "سليمان",
    "فرج",
    "عوض",
    "رمضان",
    "شعبان",
    "زكي",
    "فهمي",
    "النجار",
    "الخولي",
    "عاشور",
    "درويش",
    "سالم",
    "أمين",
    "حجازي",
    "عبد العزيز",
    "الجمل",
    "منصور",
    "عثمان",
    "غانم",
    "البنا",
    "حماد",
    "صالح",
    "يونس",
];

/// Pools for one locale.
fn pools(locale: NameLocale) -> (&'static [&'static str], &'static [&'static str]) {
    match locale {
        NameLocale::En => (EN_GIVEN_NAMES, EN_FAMILY_NAMES),
        NameLocale::ArEg => (AR_EG_GIVEN_NAMES, AR_EG_FAMILY_NAMES),
    }
}

/// Generate a full name for the given locale.
pub fn generate_full_name<R: Rng>(rng: &mut R, locale: NameLocale) -> Value {
    let (given, family) = pools(locale);

    let first = given[rng.gen_range(0..given.len())];
    let last = family[rng.gen_range(0..family.len())];

    Value::Text(format!("{first} {last}"))
}
