//! Built-in Tarifit skill catalog.
//!
//! Five skills in a linear unlock chain, from greetings through daily
//! activities. The ledger treats this as read-only input; tests and the CLI
//! use it as the default catalog.

use crate::catalog::{Catalog, Exercise, ExerciseKind, Skill, UnlockRequirement};

/// Build the built-in catalog.
pub fn builtin() -> Catalog {
    Catalog::new(vec![greetings(), numbers(), family(), food(), activities()])
}

fn greetings() -> Skill {
    Skill::new(
        "greetings",
        "Greetings & Basics",
        "Learn basic greetings and essential words",
        vec![
            Exercise::new(
                "greetings_1",
                ExerciseKind::PictureMatching,
                "Hello - Picture Match",
                "Azul",
                "Azul",
            )
            .with_options(&["Azul", "Adiyus", "Tanmirt", "Ɛafek"])
            .with_meaning("Hello"),
            Exercise::new(
                "greetings_2",
                ExerciseKind::TranslateText,
                "Translate: Goodbye",
                "Goodbye",
                "Adiyus",
            ),
            Exercise::new(
                "greetings_3",
                ExerciseKind::MultipleChoice,
                "What is \"Please\"?",
                "Please",
                "Ɛafek",
            )
            .with_options(&["Ɛafek", "Tanmirt", "Wah", "La"]),
            Exercise::new(
                "greetings_4",
                ExerciseKind::SentenceBuilding,
                "Build: Azul fell-ak",
                "Azul fell-ak",
                "Azul fell-ak",
            )
            .with_meaning("Hello to you")
            .with_context("A polite greeting"),
            Exercise::new(
                "greetings_5",
                ExerciseKind::Translation,
                "Thank you",
                "Thank you",
                "Tanmirt",
            ),
            Exercise::new(
                "greetings_6",
                ExerciseKind::MultipleChoice,
                "Yes or No?",
                "What is \"Yes\" in Tarifit?",
                "Wah",
            )
            .with_options(&["Wah", "La", "Tanmirt", "Ɛafek"]),
            Exercise::new(
                "greetings_7",
                ExerciseKind::SentenceBuilding,
                "What is your name?",
                "Isminu?",
                "Isminu?",
            )
            .with_meaning("What is your name?")
            .with_context("Asking someone their name"),
            Exercise::new(
                "greetings_8",
                ExerciseKind::Translation,
                "My name is...",
                "My name is...",
                "Isem-inu...",
            ),
        ],
    )
}

fn numbers() -> Skill {
    Skill::new(
        "numbers",
        "Numbers & Colors",
        "Master numbers and colors",
        vec![
            Exercise::new(
                "numbers_1",
                ExerciseKind::PictureMatching,
                "Number One",
                "Ijj",
                "Ijj",
            )
            .with_options(&["Ijj", "Tnayen", "Tlata", "Rebɛa"])
            .with_meaning("One"),
            Exercise::new(
                "numbers_2",
                ExerciseKind::MultipleChoice,
                "What is Two?",
                "Two",
                "Tnayen",
            )
            .with_options(&["Ijj", "Tnayen", "Tlata", "Rebɛa"]),
            Exercise::new(
                "numbers_3",
                ExerciseKind::Translation,
                "Three",
                "Three",
                "Tlata",
            ),
            Exercise::new(
                "numbers_4",
                ExerciseKind::SentenceBuilding,
                "Three apples",
                "Tlata n maɛṭica",
                "Tlata n maɛṭica",
            )
            .with_meaning("Three apples")
            .with_context("Counting objects"),
            Exercise::new(
                "numbers_5",
                ExerciseKind::PictureMatching,
                "Red Color",
                "Azggagh",
                "Azggagh",
            )
            .with_options(&["Azggagh", "Ziyzu", "Azyza", "Amellal"])
            .with_meaning("Red"),
            Exercise::new(
                "numbers_6",
                ExerciseKind::MultipleChoice,
                "Blue Color",
                "Blue",
                "Ziyzu",
            )
            .with_options(&["Azggagh", "Ziyzu", "Azyza", "Amellal"]),
            Exercise::new(
                "numbers_7",
                ExerciseKind::Translation,
                "Green",
                "Green",
                "Azyza",
            ),
            Exercise::new(
                "numbers_8",
                ExerciseKind::SentenceBuilding,
                "Five days",
                "Xemsa n wussan",
                "Xemsa n wussan",
            )
            .with_meaning("Five days")
            .with_context("Time expression"),
            Exercise::new(
                "numbers_9",
                ExerciseKind::MultipleChoice,
                "Ten",
                "Ten",
                "Ɛecra",
            )
            .with_options(&["Xemsa", "Ɛecra", "Rebɛa", "Tlata"]),
            Exercise::new(
                "numbers_10",
                ExerciseKind::SentenceBuilding,
                "Blue and white",
                "Ziyzu d acemlal",
                "Ziyzu d acemlal",
            )
            .with_meaning("Blue and white")
            .with_context("Describing colors together"),
        ],
    )
    .with_unlock_requirement(UnlockRequirement::new("greetings", 6))
}

fn family() -> Skill {
    Skill::new(
        "family",
        "Family & People",
        "Learn family relationships and people",
        vec![
            Exercise::new(
                "family_1",
                ExerciseKind::PictureMatching,
                "Father",
                "Baba",
                "Baba",
            )
            .with_options(&["Baba", "Yemma", "Arraw", "Jeddi"])
            .with_meaning("Father"),
            Exercise::new(
                "family_2",
                ExerciseKind::PictureMatching,
                "Mother",
                "Yemma",
                "Yemma",
            )
            .with_options(&["Baba", "Yemma", "Tarbat", "Jidda"])
            .with_meaning("Mother"),
            Exercise::new(
                "family_3",
                ExerciseKind::MultipleChoice,
                "Son",
                "Son",
                "Arraw",
            )
            .with_options(&["Arraw", "Tarbat", "Awma", "Weltma"]),
            Exercise::new(
                "family_4",
                ExerciseKind::Translation,
                "Daughter",
                "Daughter",
                "Tarbat",
            ),
            Exercise::new(
                "family_5",
                ExerciseKind::SentenceBuilding,
                "Our father",
                "Baba-neɣ",
                "Baba-neɣ",
            )
            .with_meaning("Our father")
            .with_context("Possessive form"),
            Exercise::new(
                "family_6",
                ExerciseKind::MultipleChoice,
                "Brother",
                "Brother",
                "Awma",
            )
            .with_options(&["Awma", "Weltma", "Jeddi", "Jidda"]),
            Exercise::new(
                "family_7",
                ExerciseKind::Translation,
                "Sister",
                "Sister",
                "Weltma",
            ),
            Exercise::new(
                "family_8",
                ExerciseKind::SentenceBuilding,
                "Your brother",
                "Awma-k",
                "Awma-k",
            )
            .with_meaning("Your brother")
            .with_context("Possessive form"),
            Exercise::new(
                "family_9",
                ExerciseKind::SentenceBuilding,
                "Fatima's son",
                "Arraw n Fatima",
                "Arraw n Fatima",
            )
            .with_meaning("Fatima's son")
            .with_context("Genitive construction"),
        ],
    )
    .with_unlock_requirement(UnlockRequirement::new("numbers", 7))
}

fn food() -> Skill {
    Skill::new(
        "food",
        "Food & Drinks",
        "Learn about food and beverages",
        vec![
            Exercise::new(
                "food_1",
                ExerciseKind::PictureMatching,
                "Bread",
                "Aɣrum",
                "Aɣrum",
            )
            .with_options(&["Aɣrum", "Acffay", "Aman", "Atay"])
            .with_meaning("Bread"),
            Exercise::new(
                "food_2",
                ExerciseKind::Translation,
                "Milk",
                "Milk",
                "Acffay",
            ),
            Exercise::new(
                "food_3",
                ExerciseKind::MultipleChoice,
                "Water",
                "Water",
                "Aman",
            )
            .with_options(&["Aman", "Atay", "Acffay", "Aysum"]),
            Exercise::new(
                "food_4",
                ExerciseKind::PictureMatching,
                "Tea",
                "Atay",
                "Atay",
            )
            .with_options(&["Atay", "Aman", "Acffay", "Tamment"])
            .with_meaning("Tea"),
            Exercise::new(
                "food_5",
                ExerciseKind::SentenceBuilding,
                "Tea and mint",
                "Atay d tminta",
                "Atay d tminta",
            )
            .with_meaning("Tea and mint")
            .with_context("Common combination"),
            Exercise::new(
                "food_6",
                ExerciseKind::Translation,
                "Meat",
                "Meat",
                "Aysum",
            ),
            Exercise::new(
                "food_7",
                ExerciseKind::MultipleChoice,
                "Fish",
                "Fish",
                "Iselman",
            )
            .with_options(&["Iselman", "Aysum", "Tateffaḥt", "Azemmur"]),
            Exercise::new(
                "food_8",
                ExerciseKind::SentenceBuilding,
                "Bread with honey",
                "Aɣrum ak tamment",
                "Aɣrum ak tamment",
            )
            .with_meaning("Bread with honey")
            .with_context("Common meal"),
            Exercise::new(
                "food_9",
                ExerciseKind::Translation,
                "I want water",
                "I want water",
                "Xseɣ aman",
            ),
            Exercise::new(
                "food_10",
                ExerciseKind::PictureMatching,
                "Apple",
                "Tateffaḥt",
                "Tateffaḥt",
            )
            .with_options(&["Tateffaḥt", "Azemmur", "Tamellalt", "Tamment"])
            .with_meaning("Apple"),
            Exercise::new(
                "food_11",
                ExerciseKind::SentenceBuilding,
                "She ate couscous",
                "Tecca seysu",
                "Tecca seysu",
            )
            .with_meaning("She ate couscous")
            .with_context("Past tense eating"),
            Exercise::new(
                "food_12",
                ExerciseKind::MultipleChoice,
                "Tagine",
                "Tagine",
                "Tajin",
            )
            .with_options(&["Tajin", "Seysu", "Aɣrum", "Atay"]),
        ],
    )
    .with_unlock_requirement(UnlockRequirement::new("family", 7))
}

fn activities() -> Skill {
    Skill::new(
        "activities",
        "Daily Activities",
        "Learn daily activities and time expressions",
        vec![
            Exercise::new(
                "activities_1",
                ExerciseKind::PictureMatching,
                "Eat",
                "Ecc",
                "Ecc",
            )
            .with_options(&["Ecc", "Sew", "Ṭṭeṣ", "Ugur"])
            .with_meaning("Eat"),
            Exercise::new(
                "activities_2",
                ExerciseKind::Translation,
                "Drink",
                "Drink",
                "Sew",
            ),
            Exercise::new(
                "activities_3",
                ExerciseKind::SentenceBuilding,
                "I ate bread",
                "Ecciɣ aɣrum",
                "Ecciɣ aɣrum",
            )
            .with_meaning("I ate bread")
            .with_context("Past tense action"),
            Exercise::new(
                "activities_4",
                ExerciseKind::MultipleChoice,
                "Sleep",
                "Sleep",
                "Ṭṭeṣ",
            )
            .with_options(&["Ṭṭeṣ", "Qqim", "Ugur", "Xdem"]),
            Exercise::new(
                "activities_5",
                ExerciseKind::SentenceBuilding,
                "I drank tea",
                "Swiɣ atay",
                "Swiɣ atay",
            )
            .with_meaning("I drank tea")
            .with_context("Past tense drinking"),
            Exercise::new(
                "activities_6",
                ExerciseKind::Translation,
                "Walk",
                "Walk",
                "Ugur",
            ),
            Exercise::new(
                "activities_7",
                ExerciseKind::MultipleChoice,
                "Work",
                "Work",
                "Xdem",
            )
            .with_options(&["Xdem", "Ɣar", "Ari", "Ssawal"]),
            Exercise::new(
                "activities_8",
                ExerciseKind::SentenceBuilding,
                "I sleep in the evening",
                "Ttṭṣeɣ deg uɛecci",
                "Ttṭṣeɣ deg uɛecci",
            )
            .with_meaning("I sleep in the evening")
            .with_context("Time expression"),
            Exercise::new(
                "activities_9",
                ExerciseKind::Translation,
                "Morning",
                "Morning",
                "Uffu",
            ),
            Exercise::new(
                "activities_10",
                ExerciseKind::SentenceBuilding,
                "I go to the market",
                "Ggʷareɣ ɣer souq",
                "Ggʷareɣ ɣer souq",
            )
            .with_meaning("I go to the market")
            .with_context("Direction and movement"),
        ],
    )
    .with_unlock_requirement(UnlockRequirement::new("food", 9))
}
