//! Zodiac table — sign date ranges, elements, traits, canned forecasts.
//!
//! DESIGN
//! ======
//! The table is static data compiled into the binary. Sign resolution
//! walks the table in calendar order and matches the birth month/day
//! against each inclusive range. Capricorn is the only range that wraps
//! the year end and is handled explicitly.

use std::fmt;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Static profile for one sign.
#[derive(Debug)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    /// Inclusive range as `(start_month, start_day, end_month, end_day)`.
    pub date_range: (u8, u8, u8, u8),
    pub element: Element,
    pub personality_traits: [&'static str; 10],
    pub predictions: &'static str,
}

// =============================================================================
// TABLE
// =============================================================================

static SIGNS: [SignInfo; 12] = [
    SignInfo {
        sign: ZodiacSign::Aries,
        date_range: (3, 21, 4, 19),
        element: Element::Fire,
        personality_traits: [
            "Courageous",
            "Energetic",
            "Willful",
            "Pioneering",
            "Independent",
            "Dynamic",
            "Quick-witted",
            "Enthusiastic",
            "Confident",
            "Optimistic",
        ],
        predictions: "This year brings new beginnings and exciting opportunities. Your natural leadership \
                      qualities will shine, and you'll find yourself taking charge of important projects. \
                      Your energy and enthusiasm will attract positive attention and open doors to new \
                      possibilities.",
    },
    SignInfo {
        sign: ZodiacSign::Taurus,
        date_range: (4, 20, 5, 20),
        element: Element::Earth,
        personality_traits: [
            "Patient",
            "Reliable",
            "Devoted",
            "Persistent",
            "Practical",
            "Stable",
            "Determined",
            "Loyal",
            "Ambitious",
            "Sensual",
        ],
        predictions: "Stability and growth are your themes this year. Your practical approach to life will \
                      help you build solid foundations in both personal and professional areas. Financial \
                      opportunities may arise, and your patience will be rewarded with long-term success.",
    },
    SignInfo {
        sign: ZodiacSign::Gemini,
        date_range: (5, 21, 6, 20),
        element: Element::Air,
        personality_traits: [
            "Adaptable",
            "Versatile",
            "Communicative",
            "Witty",
            "Intellectual",
            "Eloquent",
            "Youthful",
            "Lively",
            "Quick-thinking",
            "Curious",
        ],
        predictions: "Communication and learning are highlighted this year. Your natural curiosity will lead \
                      you to new knowledge and experiences. Networking opportunities abound, and your ability \
                      to adapt will help you navigate any challenges that arise.",
    },
    SignInfo {
        sign: ZodiacSign::Cancer,
        date_range: (6, 21, 7, 22),
        element: Element::Water,
        personality_traits: [
            "Nurturing",
            "Protective",
            "Sympathetic",
            "Moody",
            "Tenacious",
            "Highly imaginative",
            "Loyal",
            "Emotional",
            "Intuitive",
            "Caring",
        ],
        predictions: "Emotional growth and family matters take center stage this year. Your intuitive nature \
                      will guide you in making important decisions. Home and family life will bring you great \
                      satisfaction, and your nurturing qualities will be appreciated by those around you.",
    },
    SignInfo {
        sign: ZodiacSign::Leo,
        date_range: (7, 23, 8, 22),
        element: Element::Fire,
        personality_traits: [
            "Creative",
            "Passionate",
            "Generous",
            "Warm-hearted",
            "Cheerful",
            "Humorous",
            "Dignified",
            "Self-confident",
            "Natural leader",
            "Dramatic",
        ],
        predictions: "This is your year to shine! Your natural charisma and leadership abilities will be \
                      recognized and rewarded. Creative projects will flourish, and your generous spirit will \
                      attract positive relationships. Success in your chosen field is highly likely.",
    },
    SignInfo {
        sign: ZodiacSign::Virgo,
        date_range: (8, 23, 9, 22),
        element: Element::Earth,
        personality_traits: [
            "Analytical",
            "Kind",
            "Hardworking",
            "Practical",
            "Modest",
            "Intelligent",
            "Loyal",
            "Reliable",
            "Perfectionist",
            "Helpful",
        ],
        predictions: "Your attention to detail and analytical mind will serve you well this year. Professional \
                      growth and skill development are highlighted. Your practical approach to problem-solving \
                      will earn you respect and recognition in your work environment.",
    },
    SignInfo {
        sign: ZodiacSign::Libra,
        date_range: (9, 23, 10, 22),
        element: Element::Air,
        personality_traits: [
            "Diplomatic",
            "Gracious",
            "Fair-minded",
            "Social",
            "Peaceful",
            "Idealistic",
            "Cooperative",
            "Romantic",
            "Charming",
            "Easy-going",
        ],
        predictions: "Relationships and harmony are your focus this year. Your diplomatic nature will help \
                      resolve conflicts and build stronger connections. Partnership opportunities, both \
                      personal and professional, will bring balance and fulfillment to your life.",
    },
    SignInfo {
        sign: ZodiacSign::Scorpio,
        date_range: (10, 23, 11, 21),
        element: Element::Water,
        personality_traits: [
            "Passionate",
            "Determined",
            "Magnetic",
            "Mysterious",
            "Strategic",
            "Intense",
            "Perceptive",
            "Loyal",
            "Ambitious",
            "Transformative",
        ],
        predictions: "Transformation and deep personal growth are your themes this year. Your intuitive \
                      insights will lead to important discoveries about yourself and others. Financial \
                      opportunities may arise through your strategic thinking and determination.",
    },
    SignInfo {
        sign: ZodiacSign::Sagittarius,
        date_range: (11, 22, 12, 21),
        element: Element::Fire,
        personality_traits: [
            "Optimistic",
            "Adventurous",
            "Independent",
            "Honest",
            "Philosophical",
            "Enthusiastic",
            "Wanderlust",
            "Extroverted",
            "Fun-loving",
            "Generous",
        ],
        predictions: "Adventure and expansion are calling you this year. Travel opportunities, both physical \
                      and intellectual, will broaden your horizons. Your optimistic outlook will attract \
                      positive experiences, and your honesty will strengthen important relationships.",
    },
    SignInfo {
        sign: ZodiacSign::Capricorn,
        date_range: (12, 22, 1, 19),
        element: Element::Earth,
        personality_traits: [
            "Responsible",
            "Disciplined",
            "Self-controlled",
            "Ambitious",
            "Patient",
            "Humble",
            "Hardworking",
            "Traditional",
            "Practical",
            "Wise",
        ],
        predictions: "Career advancement and long-term goals are your focus this year. Your disciplined \
                      approach and patience will pay off with significant achievements. Financial stability \
                      and professional recognition are likely outcomes of your hard work.",
    },
    SignInfo {
        sign: ZodiacSign::Aquarius,
        date_range: (1, 20, 2, 18),
        element: Element::Air,
        personality_traits: [
            "Progressive",
            "Original",
            "Independent",
            "Humanitarian",
            "Intellectual",
            "Friendly",
            "Aloof",
            "Inventive",
            "Unconventional",
            "Visionary",
        ],
        predictions: "Innovation and social change are your themes this year. Your unique perspective and \
                      humanitarian instincts will lead to meaningful contributions to society. Networking with \
                      like-minded individuals will open doors to exciting opportunities.",
    },
    SignInfo {
        sign: ZodiacSign::Pisces,
        date_range: (2, 19, 3, 20),
        element: Element::Water,
        personality_traits: [
            "Compassionate",
            "Artistic",
            "Intuitive",
            "Gentle",
            "Musical",
            "Romantic",
            "Dreamy",
            "Mystical",
            "Selfless",
            "Adaptable",
        ],
        predictions: "Spiritual growth and creative expression are highlighted this year. Your intuitive \
                      abilities will be heightened, leading to important insights. Artistic projects and \
                      spiritual pursuits will bring you deep satisfaction and personal fulfillment.",
    },
];

// =============================================================================
// LOOKUP
// =============================================================================

impl ZodiacSign {
    /// Resolve the sign for a birth month (1-12) and day (1-31).
    ///
    /// Returns `None` when no range matches, e.g. for month 0 or 13.
    #[must_use]
    pub fn from_month_day(month: u8, day: u8) -> Option<Self> {
        SIGNS
            .iter()
            .find(|info| range_contains(info.date_range, month, day))
            .map(|info| info.sign)
    }

    #[must_use]
    pub fn info(self) -> &'static SignInfo {
        // Table order matches declaration order.
        &SIGNS[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    #[must_use]
    pub fn element(self) -> Element {
        self.info().element
    }

    /// The first `n` canned traits, in table order.
    #[must_use]
    pub fn top_traits(self, n: usize) -> Vec<String> {
        self.info()
            .personality_traits
            .iter()
            .take(n)
            .map(|t| (*t).to_owned())
            .collect()
    }

    #[must_use]
    pub fn predictions(self) -> &'static str {
        self.info().predictions
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn range_contains((start_month, start_day, end_month, end_day): (u8, u8, u8, u8), month: u8, day: u8) -> bool {
    if start_month > end_month {
        // Wraps the year end (Capricorn).
        return (month == start_month && day >= start_day) || (month == end_month && day <= end_day);
    }
    (month == start_month && day >= start_day)
        || (month == end_month && day <= end_day)
        || (start_month < month && month < end_month)
}

#[cfg(test)]
#[path = "zodiac_test.rs"]
mod tests;
