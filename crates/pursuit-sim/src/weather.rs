//! Weather transitions: a two-state Markov chain favouring clear skies.

use rand::Rng;

use pursuit_core::constants::{WEATHER_CLEAR_TO_CLOUDY, WEATHER_CLOUDY_TO_CLEAR};
use pursuit_core::enums::Weather;

/// Roll the weather for the next round.
pub fn next_weather<R: Rng + ?Sized>(current: Weather, rng: &mut R) -> Weather {
    match current {
        Weather::Clear if rng.gen_bool(WEATHER_CLEAR_TO_CLOUDY) => Weather::Cloudy,
        Weather::Cloudy if rng.gen_bool(WEATHER_CLOUDY_TO_CLEAR) => Weather::Clear,
        unchanged => unchanged,
    }
}

/// Long-run share of cloudy rounds implied by the transition probabilities.
pub fn cloudy_share() -> f64 {
    WEATHER_CLEAR_TO_CLOUDY / (WEATHER_CLEAR_TO_CLOUDY + WEATHER_CLOUDY_TO_CLEAR)
}
