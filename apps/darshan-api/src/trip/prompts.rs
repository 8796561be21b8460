// All Gemini prompt constants for the pilgrimage API.
// Templates carry `{placeholder}` markers that the builder functions replace
// before sending; the model output is returned to clients verbatim.

use chrono::NaiveDate;

use crate::trip::query::TravelMode;

const ITINERARY_TEMPLATE: &str = r#"Create a detailed day-wise darshan itinerary for a pilgrimage to {destination}.

Include:
- Temple opening hours and morning/evening aarti timings
- Best order to visit the main temple and nearby shrines
- Expected queue and darshan duration
- Rest breaks and meal stops
- Dress code and items not allowed inside"#;

const FOOD_TEMPLATE: &str = r#"Recommend food for pilgrims visiting {destination}.

Include:
- The famous prasad and where to get it
- Pure vegetarian restaurants and bhojanalayas near the temple
- Popular street snacks and their areas
- What to carry for early morning darshan queues
- Average cost per meal"#;

const STAY_TEMPLATE: &str = r#"Suggest stay options for pilgrims in {destination}.

Provide options for:
- Dharamshalas and trust-run guest houses
- Budget hotels near the temple (₹500-1500/night)
- Mid-range and comfortable hotels (₹1500-4000/night)

Include distance from the main temple and booking tips."#;

const TRANSPORT_TEMPLATE: &str = r#"Explain local transport around {destination} for pilgrims.

Cover:
- Reaching the main temple from the railway station and bus stand
- Auto, e-rickshaw and shared tempo fares
- Walking routes and cloakroom facilities
- Options for elderly pilgrims"#;

const MARKETS_TEMPLATE: &str = r#"Guide to the markets around the temple in {destination}.

Include:
- Markets for puja items and religious souvenirs
- Local specialties and handicrafts
- Bargaining tips
- Market timings and closed days"#;

const THINGS_TO_DO_TEMPLATE: &str = r#"What should a pilgrim do in {destination} beyond the main darshan?
Include nearby shrines, ghats or sacred sites, evening aartis and cultural programs.
Give a day-wise or category-wise breakdown."#;

const ATTRACTIONS_TEMPLATE: &str = r#"List the must-visit temples and sacred sites in and around {destination}.

For each, provide:
- Name and significance
- Darshan timings
- Entry or special darshan fee (if any)
- How to reach from the main temple
- Time needed for visit"#;

const TRIP_SUMMARY_TEMPLATE: &str = r#"Plan a complete {days}-day pilgrimage from {origin} to {destination}, travelling by {mode} from {start_date} to {end_date}.

{schedule}

Cover:
- Outbound and return travel with realistic timings and fares
- Day-wise darshan itinerary with aarti timings
- Stay options near the main temple for each budget
- Food, prasad and local customs to know
- Total budget estimate per person in INR"#;

const STATION_SUGGESTION_TEMPLATE: &str = r#"You are an Indian Railways routing assistant.
No direct trains were found between {origin} and {destination}.
Suggest the nearest major railway stations that are well connected for this journey.

Respond with valid JSON only, no markdown fences, using this exact schema:
{"origin_code": "<station code near {origin}>", "destination_code": "<station code near {destination}>"}"#;

pub fn itinerary_prompt(destination: &str) -> String {
    ITINERARY_TEMPLATE.replace("{destination}", destination)
}

pub fn food_prompt(destination: &str) -> String {
    FOOD_TEMPLATE.replace("{destination}", destination)
}

pub fn stay_prompt(destination: &str) -> String {
    STAY_TEMPLATE.replace("{destination}", destination)
}

pub fn transport_prompt(destination: &str) -> String {
    TRANSPORT_TEMPLATE.replace("{destination}", destination)
}

pub fn markets_prompt(destination: &str) -> String {
    MARKETS_TEMPLATE.replace("{destination}", destination)
}

pub fn things_to_do_prompt(destination: &str) -> String {
    THINGS_TO_DO_TEMPLATE.replace("{destination}", destination)
}

pub fn attractions_prompt(destination: &str) -> String {
    ATTRACTIONS_TEMPLATE.replace("{destination}", destination)
}

/// Builds the trip summary prompt. `schedule` is the pre-rendered train
/// schedule block (or the no-schedule note) from `summary`.
pub fn trip_summary_prompt(
    origin: &str,
    destination: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u8,
    mode: TravelMode,
    schedule: &str,
) -> String {
    TRIP_SUMMARY_TEMPLATE
        .replace("{days}", &days.to_string())
        .replace("{origin}", origin)
        .replace("{destination}", destination)
        .replace("{mode}", mode.as_str())
        .replace("{start_date}", &start_date.format("%d %b %Y").to_string())
        .replace("{end_date}", &end_date.format("%d %b %Y").to_string())
        .replace("{schedule}", schedule)
}

/// Prompt asking the model for nearby station codes as strict JSON.
pub fn station_suggestion_prompt(origin: &str, destination: &str) -> String {
    STATION_SUGGESTION_TEMPLATE
        .replace("{origin}", origin)
        .replace("{destination}", destination)
}
