// All Gemini prompt constants for the travel API.
// Templates carry `{placeholder}` markers that the builder functions replace
// before sending; the model output is returned to clients verbatim.

use crate::travel::query::Budget;

/// Content categories served by `/quick-info/:category` and assembled into
/// the complete travel guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Itinerary,
    Attractions,
    Food,
    Accommodation,
    Transport,
    Shopping,
    Culture,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Itinerary,
        Category::Attractions,
        Category::Food,
        Category::Accommodation,
        Category::Transport,
        Category::Shopping,
        Category::Culture,
    ];

    pub fn parse(raw: &str) -> Option<Category> {
        match raw {
            "itinerary" => Some(Category::Itinerary),
            "attractions" => Some(Category::Attractions),
            "food" => Some(Category::Food),
            "accommodation" => Some(Category::Accommodation),
            "transport" => Some(Category::Transport),
            "shopping" => Some(Category::Shopping),
            "culture" => Some(Category::Culture),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Itinerary => "itinerary",
            Category::Attractions => "attractions",
            Category::Food => "food",
            Category::Accommodation => "accommodation",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Culture => "culture",
        }
    }
}

const ITINERARY_TEMPLATE: &str = r#"Create a detailed {days}-day travel itinerary for {location}.
Budget: {budget}

Format as:
**Day 1:**
- Morning: [Activity] (Time, Cost estimate)
- Afternoon: [Activity] (Time, Cost estimate)
- Evening: [Activity] (Time, Cost estimate)

Include rest periods and travel time between locations."#;

const ATTRACTIONS_TEMPLATE: &str = r#"List the top 10 must-visit attractions in {location}.
Budget: {budget}

For each attraction, provide:
- Name and brief description
- Best time to visit
- Entry fee (if any)
- How to reach from city center
- Time needed for visit"#;

const FOOD_TEMPLATE: &str = r#"Recommend the best food experiences in {location}.
Budget: {budget}

Include:
- 5 must-try local dishes
- 3 best restaurants for each budget category
- Popular street food areas
- Food markets and timings
- Average cost per meal"#;

const ACCOMMODATION_TEMPLATE: &str = r#"Suggest accommodation options in {location} for {days} days.
Budget focus: {budget}

Provide 3 options each for:
- Budget stays (₹500-1500/night)
- Mid-range hotels (₹1500-4000/night)
- Luxury options (₹4000+/night)

Include location, amenities, and booking tips."#;

const TRANSPORT_TEMPLATE: &str = r#"Provide comprehensive transport guide for {location}.

Cover:
- How to reach {location} (nearest airport, railway station)
- Local transport options (metro, bus, auto, cab)
- Daily transport costs
- Best transport apps to use
- Walking vs transport recommendations"#;

const SHOPPING_TEMPLATE: &str = r#"Guide to shopping in {location}.
Budget: {budget}

Include:
- Popular markets and shopping areas
- Best items to buy as souvenirs
- Local specialties and handicrafts
- Bargaining tips
- Market timings and days"#;

const CULTURE_TEMPLATE: &str = r#"Cultural experiences and activities in {location}.

Suggest:
- Cultural events and festivals
- Museums and heritage sites
- Local traditions to experience
- Photography spots
- Evening entertainment options
- Unique local experiences"#;

const THINGS_TO_DO_TEMPLATE: &str = r#"What are the top fun, cultural, and adventurous things to do in {location}?
Include day-wise or category-wise breakdown."#;

const WEATHER_TEMPLATE: &str = r#"Provide weather information and best time to visit {location}.

Include:
- Current season and weather
- Best months to visit and why
- Weather to avoid and reasons
- What to pack for each season
- Seasonal festivals or events"#;

const BUDGET_ESTIMATE_TEMPLATE: &str = r#"Create a detailed budget estimate for {travelers} person(s) visiting {location} for {days} days.

Break down costs for:
- Accommodation (budget/mid-range/luxury per night)
- Food (meals per day)
- Local transport (daily)
- Attractions and activities
- Shopping and miscellaneous
- Total estimated cost for {days} days

Provide costs in INR and mention cost-saving tips."#;

pub const POPULAR_DESTINATIONS_PROMPT: &str = r#"List the top 20 popular travel destinations in India with brief descriptions.

Format each as:
**City Name, State**
- Best for: [Type of travel - heritage/adventure/beach/hill station]
- Best time: [Months]
- Key attractions: [2-3 main attractions]

Cover diverse destinations including metros, hill stations, beaches, heritage sites."#;

/// Builds the prompt for one content category. `{budget}` expands to the
/// tier's descriptive phrasing, not the tier name.
pub fn category_prompt(category: Category, location: &str, days: u8, budget: Budget) -> String {
    let template = match category {
        Category::Itinerary => ITINERARY_TEMPLATE,
        Category::Attractions => ATTRACTIONS_TEMPLATE,
        Category::Food => FOOD_TEMPLATE,
        Category::Accommodation => ACCOMMODATION_TEMPLATE,
        Category::Transport => TRANSPORT_TEMPLATE,
        Category::Shopping => SHOPPING_TEMPLATE,
        Category::Culture => CULTURE_TEMPLATE,
    };

    template
        .replace("{location}", location)
        .replace("{days}", &days.to_string())
        .replace("{budget}", budget.context())
}

/// One-line trip planning prompt. Uses the raw tier word, not its phrasing.
pub fn plan_trip_prompt(location: &str, days: u8, budget: Budget) -> String {
    format!(
        "Plan a trip to {location} for {days} days on a {} budget.",
        budget.as_str()
    )
}

pub fn things_to_do_prompt(location: &str) -> String {
    THINGS_TO_DO_TEMPLATE.replace("{location}", location)
}

pub fn weather_prompt(location: &str) -> String {
    WEATHER_TEMPLATE.replace("{location}", location)
}

pub fn budget_estimate_prompt(location: &str, days: u8, travelers: u8) -> String {
    BUDGET_ESTIMATE_TEMPLATE
        .replace("{location}", location)
        .replace("{days}", &days.to_string())
        .replace("{travelers}", &travelers.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        assert_eq!(Category::parse("nightlife"), None);
    }

    #[test]
    fn test_category_prompt_interpolates_all_placeholders() {
        let prompt = category_prompt(Category::Itinerary, "Jaipur", 5, Budget::High);
        assert!(prompt.contains("5-day travel itinerary for Jaipur"));
        assert!(prompt.contains("luxury, premium"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_transport_prompt_has_no_budget_placeholder() {
        let prompt = category_prompt(Category::Transport, "Mumbai", 3, Budget::Low);
        assert!(prompt.contains("How to reach Mumbai"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_plan_trip_prompt_uses_tier_word() {
        let prompt = plan_trip_prompt("Goa", 4, Budget::Low);
        assert_eq!(prompt, "Plan a trip to Goa for 4 days on a low budget.");
    }

    #[test]
    fn test_budget_estimate_prompt_interpolates_travelers() {
        let prompt = budget_estimate_prompt("Udaipur", 3, 2);
        assert!(prompt.contains("2 person(s) visiting Udaipur for 3 days"));
        assert!(!prompt.contains('{'));
    }
}
