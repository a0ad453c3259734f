//! Topic classification for human queries.
//!
//! Categories and their multilingual keyword lists are fixed configuration.
//! Matching is first-category-first-keyword: categories iterate in
//! declaration order, keywords in list order, and the first substring hit
//! wins. There is no scoring; the iteration order is the tie-break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic category assigned to a human query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Scholarship,
    Exams,
    Hostel,
    Library,
    Fees,
    Admission,
    Courses,
    Management,
    Counselling,
    Food,
    Teaching,
}

/// Display color for the synthetic "Others" bucket in the report.
pub const OTHERS_COLOR: &str = "#6b7280";

impl Category {
    /// Classification order. This is the tie-break priority: a query
    /// matching keywords from two categories lands in the earlier one.
    pub const ALL: [Category; 11] = [
        Category::Scholarship,
        Category::Exams,
        Category::Hostel,
        Category::Library,
        Category::Fees,
        Category::Admission,
        Category::Courses,
        Category::Management,
        Category::Counselling,
        Category::Food,
        Category::Teaching,
    ];

    /// Returns the display name used in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scholarship => "Scholarship",
            Category::Exams => "Exams",
            Category::Hostel => "Hostel",
            Category::Library => "Library",
            Category::Fees => "Fees",
            Category::Admission => "Admission",
            Category::Courses => "Courses",
            Category::Management => "Management",
            Category::Counselling => "Counselling",
            Category::Food => "Food",
            Category::Teaching => "Teaching",
        }
    }

    /// Dashboard display color for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Scholarship => "#8b5cf6",
            Category::Exams => "#3b82f6",
            Category::Hostel => "#10b981",
            Category::Library => "#f59e0b",
            Category::Fees => "#ef4444",
            Category::Admission => "#6366f1",
            Category::Courses => "#14b8a6",
            Category::Management => "#9333ea",
            Category::Counselling => "#0ea5e9",
            Category::Food => "#22c55e",
            Category::Teaching => "#f97316",
        }
    }

    /// Ordered keyword list for this category. Keywords are stored
    /// lowercased and span English plus Tamil, Hindi, Telugu, Kannada,
    /// Gujarati and Bengali.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Scholarship => &[
                "scholarship",
                "stipend",
                "financial aid",
                "grant",
                "fee waiver",
                "உதவித்தொகை",
                "छात्रवृत्ति",
                "స్కాలర్‌షిప్",
                "ವಿದ್ಯಾರ್ಥಿ ವೇತನ",
                "સ્કોલરશિપ",
                "বৃত্তি",
            ],
            Category::Exams => &[
                "exam",
                "test",
                "result",
                "marks",
                "hall ticket",
                "timetable",
                "தேர்வு",
                "परीक्षा",
                "పరీక్ష",
                "ಪರೀಕ್ಷೆ",
                "પरीક્ષા",
                "পরীক্ষা",
            ],
            Category::Hostel => &[
                "hostel",
                "room",
                "mess",
                "warden",
                "accommodation",
                "விடுதி",
                "हॉस्टल",
                "హాస్టల్",
                "ವಸತಿ",
                "હોસ્ટેલ",
                "হোস্টেল",
            ],
            Category::Library => &[
                "library",
                "book",
                "borrow",
                "return",
                "fine",
                "நூலகம்",
                "पुस्तकालय",
                "లైబ్రరీ",
                "ಗ್ರಂಥಾಲಯ",
                "લાઇબ્રેરી",
                "গ্রন্থাগার",
            ],
            Category::Fees => &[
                "fee",
                "fees",
                "payment",
                "due",
                "receipt",
                "கட்டணம்",
                "फ़ीस",
                "ఫీజు",
                "ಶುಲ್ಕ",
                "ફી",
                "ফি",
            ],
            Category::Admission => &[
                "admission",
                "apply",
                "application",
                "register",
                "enroll",
                "சேர்க்கை",
                "प्रवेश",
                "ప్రవేశం",
                "ಪ್ರವೇಶ",
                "એડમિશન",
                "ভর্তি",
            ],
            Category::Courses => &[
                "course",
                "subject",
                "syllabus",
                "semester",
                "credits",
                "பாடம்",
                "पाठ्यक्रम",
                "కోర్సు",
                "ಪಠ್ಯಕ್ರಮ",
                "કોર્સ",
                "কোর্স",
            ],
            Category::Management => &[
                "management",
                "principal",
                "hod",
                "office",
                "administration",
                "நிர்வாகம்",
                "प्रबंधन",
                "నిర్వహణ",
                "ನಿರ್ವಹಣೆ",
                "વ્યવસ્થાપન",
                "প্রশাসন",
            ],
            Category::Counselling => &[
                "counsel",
                "counselling",
                "guidance",
                "mentor",
                "career help",
                "ஆலோசனை",
                "परामर्श",
                "సలహా",
                "ಮಾರ್ಗದರ್ಶನ",
                "કાઉન્સેલિંગ",
                "পরামর্শ",
            ],
            Category::Food => &[
                "food",
                "mess food",
                "canteen",
                "breakfast",
                "lunch",
                "dinner",
                "உணவு",
                "खाना",
                "ఆహారం",
                "ಆಹಾರ",
                "ભોજન",
                "খাবার",
            ],
            Category::Teaching => &[
                "teaching",
                "faculty",
                "teacher",
                "professor",
                "lecture",
                "கற்பித்தல்",
                "शिक्षण",
                "బోధన",
                "ಬೋಧನೆ",
                "શિક્ષણ",
                "পাঠদান",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies lowercased query text into the first matching category.
///
/// Returns `None` when no keyword from any category occurs in the text; the
/// aggregator buckets those under "Others". Empty keywords are skipped so
/// they can never match as the empty substring.
pub fn classify_topic(lower: &str) -> Option<Category> {
    for category in Category::ALL {
        for keyword in category.keywords() {
            if keyword.is_empty() {
                continue;
            }
            if lower.contains(keyword) {
                return Some(category);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keyword_match() {
        assert_eq!(
            classify_topic("when is the exam timetable out"),
            Some(Category::Exams)
        );
        assert_eq!(
            classify_topic("my hostel room is leaking"),
            Some(Category::Hostel)
        );
    }

    #[test]
    fn test_multilingual_keyword_match() {
        assert_eq!(classify_topic("छात्रवृत्ति कब मिलेगी"), Some(Category::Scholarship));
        assert_eq!(classify_topic("தேர்வு எப்போது"), Some(Category::Exams));
        assert_eq!(classify_topic("ఫీజు వివరాలు"), Some(Category::Fees));
    }

    #[test]
    fn test_category_order_breaks_ties() {
        // "fine" (Library) and "fee" (Fees) both occur; Library comes first
        // in the declaration order.
        assert_eq!(
            classify_topic("is there a fine on late fee payment"),
            Some(Category::Library)
        );
        // "hostel" (Hostel) precedes "fee" (Fees) in category order even
        // though "fee" appears first in the text.
        assert_eq!(
            classify_topic("fee for the hostel please"),
            Some(Category::Hostel)
        );
    }

    #[test]
    fn test_keyword_position_in_text_is_irrelevant() {
        assert_eq!(
            classify_topic("what is the hostel fee amount?"),
            Some(Category::Hostel)
        );
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(classify_topic("will it rain tomorrow"), None);
    }

    #[test]
    fn test_no_category_has_empty_keywords() {
        for category in Category::ALL {
            assert!(
                category.keywords().iter().all(|k| !k.is_empty()),
                "{} has an empty keyword",
                category
            );
        }
    }

    #[test]
    fn test_every_category_has_color_and_label() {
        for category in Category::ALL {
            assert!(category.color().starts_with('#'));
            assert!(!category.label().is_empty());
        }
    }
}
