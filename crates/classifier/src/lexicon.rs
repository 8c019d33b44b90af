//! Static vocabulary for rule-based classification.
//!
//! Everything here is immutable data shared by every request. Keyword tables
//! are ordered slices rather than maps so that scan order (and therefore
//! first-match-wins behaviour) is explicit.

use std::sync::LazyLock;

use nearby_core::BusinessCategory;
use regex::Regex;

/// Keyword → category, scanned in order; the first keyword found in the query wins.
///
/// Specific keywords come before the generic ones they overlap with
/// (`coffee` before `shop`, `grocery` before `store`).
pub const CATEGORY_KEYWORDS: &[(&str, BusinessCategory)] = &[
    ("coffee", BusinessCategory::Cafe),
    ("cafe", BusinessCategory::Cafe),
    ("espresso", BusinessCategory::Cafe),
    ("bakery", BusinessCategory::Cafe),
    ("restaurant", BusinessCategory::Restaurant),
    ("diner", BusinessCategory::Restaurant),
    ("pizza", BusinessCategory::Restaurant),
    ("sushi", BusinessCategory::Restaurant),
    ("burger", BusinessCategory::Restaurant),
    ("medical", BusinessCategory::Healthcare),
    ("clinic", BusinessCategory::Healthcare),
    ("doctor", BusinessCategory::Healthcare),
    ("hospital", BusinessCategory::Healthcare),
    ("dentist", BusinessCategory::Healthcare),
    ("pharmacy", BusinessCategory::Healthcare),
    ("mechanic", BusinessCategory::Automotive),
    ("car wash", BusinessCategory::Automotive),
    ("oil change", BusinessCategory::Automotive),
    ("tires", BusinessCategory::Automotive),
    ("salon", BusinessCategory::Beauty),
    ("barber", BusinessCategory::Beauty),
    ("haircut", BusinessCategory::Beauty),
    ("nail", BusinessCategory::Beauty),
    ("gym", BusinessCategory::Fitness),
    ("fitness", BusinessCategory::Fitness),
    ("yoga", BusinessCategory::Fitness),
    ("cinema", BusinessCategory::Entertainment),
    ("movie", BusinessCategory::Entertainment),
    ("theater", BusinessCategory::Entertainment),
    ("bowling", BusinessCategory::Entertainment),
    ("arcade", BusinessCategory::Entertainment),
    ("repair", BusinessCategory::Services),
    ("service", BusinessCategory::Services),
    ("fix", BusinessCategory::Services),
    ("plumber", BusinessCategory::Services),
    ("cleaning", BusinessCategory::Services),
    ("laundry", BusinessCategory::Services),
    ("grocery", BusinessCategory::Grocery),
    ("market", BusinessCategory::Grocery),
    ("store", BusinessCategory::Retail),
    ("shop", BusinessCategory::Retail),
    ("boutique", BusinessCategory::Retail),
];

/// Keyword → related tag filters. Every matching group contributes.
pub const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("coffee", &["coffee", "espresso", "cafe"]),
    ("espresso", &["espresso", "coffee"]),
    ("cafe", &["cafe", "coffee"]),
    ("pizza", &["pizza", "italian"]),
    ("sushi", &["sushi", "japanese"]),
    ("burger", &["burgers", "american"]),
    ("vegan", &["vegan", "vegetarian"]),
    ("vegetarian", &["vegetarian"]),
    ("gluten", &["gluten-free"]),
    ("breakfast", &["breakfast", "brunch"]),
    ("brunch", &["brunch"]),
    ("wifi", &["wifi"]),
    ("wi-fi", &["wifi"]),
    ("outdoor", &["outdoor-seating"]),
    ("patio", &["outdoor-seating"]),
    ("parking", &["parking"]),
    ("delivery", &["delivery"]),
    ("takeout", &["takeout"]),
    ("open late", &["open-late"]),
    ("24 hour", &["24-hours"]),
    ("family", &["family-friendly"]),
    ("dog friendly", &["pet-friendly"]),
    ("pet friendly", &["pet-friendly"]),
    ("cheap", &["affordable"]),
    ("affordable", &["affordable"]),
    ("organic", &["organic"]),
    ("emergency", &["emergency"]),
    ("urgent", &["urgent-care"]),
    ("dentist", &["dental"]),
    ("pharmacy", &["pharmacy"]),
    ("mechanic", &["auto-repair"]),
    ("repair", &["repair"]),
    ("gym", &["gym", "fitness"]),
    ("yoga", &["yoga", "fitness"]),
    ("barber", &["barber", "haircut"]),
    ("haircut", &["haircut", "salon"]),
    ("grocery", &["grocery"]),
    ("wheelchair", &["wheelchair-accessible"]),
];

/// Generic category words; any of them makes a non-exhaustive query broad.
pub const BROAD_TERMS: &[&str] = &[
    "coffee",
    "restaurant",
    "cafe",
    "medical",
    "clinic",
    "doctor",
    "hospital",
    "repair",
    "service",
    "fix",
    "store",
    "shop",
    "grocery",
    "market",
];

/// Words never used as tags.
pub const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "been", "before", "being", "best",
    "but", "can", "company", "could", "day", "days", "each", "every", "for", "from", "good",
    "great", "had", "has", "have", "here", "how", "inc", "into", "its", "just", "llc", "ltd",
    "more", "most", "near", "new", "nice", "not", "offer", "offers", "only", "our", "over",
    "place", "provide", "provides", "serving", "serves", "should", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "they", "this", "too", "under", "very",
    "was", "were", "what", "when", "where", "which", "who", "why", "will", "with", "would",
    "you", "your",
];

/// Description words that are allowed to become tags.
pub const DOMAIN_WORDS: &[&str] = &[
    // food and drink
    "bakery", "barbecue", "bistro", "bread", "breakfast", "brewery", "brunch", "burger",
    "burgers", "cafe", "cakes", "catering", "cocktails", "coffee", "delivery", "dessert",
    "desserts", "diner", "dinner", "espresso", "grill", "halal", "juice", "kosher", "latte",
    "lunch", "noodles", "organic", "pasta", "pastries", "pizza", "ramen", "restaurant",
    "seafood", "smoothies", "steak", "sushi", "tacos", "takeout", "vegan", "vegetarian",
    "wine",
    // cuisines
    "chinese", "french", "greek", "indian", "italian", "japanese", "korean", "mediterranean",
    "mexican", "thai", "vietnamese",
    // health
    "chiropractor", "clinic", "dental", "dentist", "medical", "pediatric", "pharmacy",
    "physiotherapy", "veterinary",
    // services
    "cleaning", "electrical", "laundry", "mechanic", "plumbing", "repair", "tailoring",
    // beauty and fitness
    "barber", "boxing", "fitness", "haircut", "massage", "nails", "pilates", "salon", "yoga",
    // retail
    "books", "bookstore", "butcher", "clothing", "electronics", "florist", "flowers",
    "furniture", "gifts", "groceries", "grocery", "handmade", "hardware", "jewelry", "produce",
    "shoes", "thrift", "toys", "vintage",
    // amenities
    "parking", "wifi",
];

/// Starter tags for each category.
const STARTER_TAGS: &[(BusinessCategory, &[&str])] = &[
    (BusinessCategory::Restaurant, &["restaurant", "food", "dining"]),
    (BusinessCategory::Cafe, &["cafe", "coffee", "drinks"]),
    (BusinessCategory::Retail, &["retail", "shopping"]),
    (BusinessCategory::Grocery, &["grocery", "groceries", "food"]),
    (BusinessCategory::Healthcare, &["healthcare", "medical", "health"]),
    (BusinessCategory::Services, &["services", "local service"]),
    (BusinessCategory::Automotive, &["automotive", "car care"]),
    (BusinessCategory::Beauty, &["beauty", "personal care"]),
    (BusinessCategory::Fitness, &["fitness", "health", "exercise"]),
    (BusinessCategory::Entertainment, &["entertainment", "fun", "activities"]),
];

/// Starter tags for a free-text category name; unknown names have none.
#[must_use]
pub fn starter_tags(category: &str) -> &'static [&'static str] {
    category
        .parse::<BusinessCategory>()
        .ok()
        .and_then(|category| {
            STARTER_TAGS
                .iter()
                .find(|(c, _)| *c == category)
                .map(|(_, tags)| *tags)
        })
        .unwrap_or(&[])
}

/// Phrase patterns checked against a whole listing. Each match adds its tag once.
pub static PHRASE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\b(wi-?fi|internet|wireless)\b", "wifi"),
        (r"\b(outdoor seating|patio|terrace)\b", "outdoor seating"),
        (r"\bcash only\b", "cash only"),
        (r"\b(family|kid|kids|child)[- ]friendly\b", "family friendly"),
        (r"\b(pet|dog)[- ]friendly\b", "pet friendly"),
        (r"\bdeliver(y|s)?\b", "delivery"),
        (r"\b(take[- ]?out|to[- ]go)\b", "takeout"),
        (r"\bvegan\b", "vegan"),
        (r"\bvegetarian\b", "vegetarian"),
        (r"\bgluten[- ]free\b", "gluten free"),
        (r"\b(24/7|24 hours|open late|late night)\b", "open late"),
        (r"\bparking\b", "parking"),
        (r"\b(wheelchair|accessible)\b", "wheelchair accessible"),
        (r"\breservations?\b", "reservations"),
        (r"\blive music\b", "live music"),
        (r"\b(credit cards?|card payments?|contactless)\b", "card payments"),
        (r"\bhappy hour\b", "happy hour"),
        (r"\bappointments?\b", "by appointment"),
        (r"\bwalk[- ]ins?\b", "walk-ins"),
    ]
    .into_iter()
    .map(|(pattern, tag)| (Regex::new(pattern).expect("Invalid phrase rule regex"), tag))
    .collect()
});

/// Matches queries that ask for an exhaustive listing ("all", "find all", "every", ...).
pub static COMPREHENSIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(all|every)\b").expect("Invalid comprehensive regex"));

/// Synonym expansion for exhaustive coffee searches.
pub const COFFEE_EXPANSION: &str = "coffee cafe espresso coffee shop coffee house";

/// Synonym expansion for exhaustive restaurant searches.
pub const RESTAURANT_EXPANSION: &str = "restaurant dining food eatery bistro";

/// Returns true if `word` is a stop-word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Returns true if `word` may be taken from a description as a tag.
#[must_use]
pub fn is_domain_word(word: &str) -> bool {
    DOMAIN_WORDS.contains(&word)
}
